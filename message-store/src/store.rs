//! Message persistence layer
//!
//! Stores saved messages to disk as a JSON array so they survive between runs.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::Utc;
use rand::Rng;
use tracing::{debug, error, info};

use crate::error::{Result, StoreError};
use crate::message::{NewMessage, SavedMessage};

/// File name of the store inside its directory
pub const STORE_FILE: &str = "saved-messages.json";

/// Length of generated message ids
pub const ID_LEN: usize = 26;

/// Saved message storage backed by one JSON file
#[derive(Debug, Clone)]
pub struct MessageStore {
    path: PathBuf,
}

impl MessageStore {
    /// Store at an explicit file path
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default location (`<data dir>/cipher-lab/saved-messages.json`),
    /// falling back to the working directory when there is no data dir.
    pub fn default_location() -> Self {
        let path = dirs::data_dir()
            .map(|dir| dir.join("cipher-lab").join(STORE_FILE))
            .unwrap_or_else(|| PathBuf::from(STORE_FILE));
        Self::at_path(path)
    }

    /// Explicit path if given, default location otherwise
    pub fn locate(explicit: Option<PathBuf>) -> Self {
        match explicit {
            Some(path) => Self::at_path(path),
            None => Self::default_location(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All messages in the order they were saved.
    ///
    /// A missing file is an empty store. A file that cannot be parsed is
    /// logged and also read as empty.
    pub fn list_all(&self) -> Result<Vec<SavedMessage>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        match serde_json::from_str(&raw) {
            Ok(messages) => Ok(messages),
            Err(e) => {
                error!(path = %self.path.display(), error = %e, "failed to parse saved messages");
                Ok(Vec::new())
            }
        }
    }

    /// All messages, most recent first
    pub fn list_newest_first(&self) -> Result<Vec<SavedMessage>> {
        let mut messages = self.list_all()?;
        messages.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(messages)
    }

    pub fn get(&self, id: &str) -> Result<SavedMessage> {
        self.list_all()?
            .into_iter()
            .find(|message| message.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Appends a message, assigning it a fresh id and the current time.
    pub fn save(&self, message: NewMessage) -> Result<SavedMessage> {
        let mut messages = self.list_all()?;

        let saved = SavedMessage {
            id: generate_id(),
            name: message.name,
            original_text: message.original_text,
            encrypted_text: message.encrypted_text,
            method: message.method,
            key: message.key,
            timestamp: Utc::now().timestamp_millis(),
        };

        messages.push(saved.clone());
        self.write_all(&messages)?;

        info!(id = %saved.id, name = %saved.name, method = %saved.method, "saved message");
        Ok(saved)
    }

    /// Removes the message with `id`. Returns `false` if there was none.
    pub fn delete(&self, id: &str) -> Result<bool> {
        let mut messages = self.list_all()?;
        let before = messages.len();
        messages.retain(|message| message.id != id);

        if messages.len() == before {
            debug!(id, "no saved message to delete");
            return Ok(false);
        }

        self.write_all(&messages)?;
        info!(id, "deleted message");
        Ok(true)
    }

    fn write_all(&self, messages: &[SavedMessage]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(messages)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// Random lowercase base-36 identifier
pub fn generate_id() -> String {
    let mut rng = rand::thread_rng();
    (0..ID_LEN)
        .map(|_| std::char::from_digit(rng.gen_range(0..36), 36).unwrap_or('0'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{MessageKey, Method};
    use tempfile::tempdir;

    fn new_message(name: &str) -> NewMessage {
        NewMessage {
            name: name.to_string(),
            original_text: "Hello".to_string(),
            encrypted_text: "Khoor".to_string(),
            method: Method::Caesar,
            key: MessageKey::Shift(3),
        }
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let store = MessageStore::at_path(dir.path().join("none.json"));
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_save_and_list_roundtrip() {
        let dir = tempdir().unwrap();
        let store = MessageStore::at_path(dir.path().join("nested").join(STORE_FILE));

        let first = store.save(new_message("first")).unwrap();
        let second = store.save(new_message("second")).unwrap();
        assert_ne!(first.id, second.id);

        let messages = store.list_all().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].name, "first");
        assert_eq!(messages[1].name, "second");
        assert_eq!(store.get(&second.id).unwrap(), second);
    }

    #[test]
    fn test_delete() {
        let dir = tempdir().unwrap();
        let store = MessageStore::at_path(dir.path().join(STORE_FILE));

        let keep = store.save(new_message("keep")).unwrap();
        let removed = store.save(new_message("drop")).unwrap();

        assert!(store.delete(&removed.id).unwrap());
        assert!(!store.delete(&removed.id).unwrap());
        assert!(!store.delete("unknown").unwrap());

        let messages = store.list_all().unwrap();
        assert_eq!(messages, vec![keep]);
        assert!(matches!(store.get(&removed.id), Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_corrupt_file_reads_as_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(STORE_FILE);
        fs::write(&path, "{ not json").unwrap();

        let store = MessageStore::at_path(&path);
        assert!(store.list_all().unwrap().is_empty());

        store.save(new_message("fresh")).unwrap();
        assert_eq!(store.list_all().unwrap().len(), 1);
    }

    #[test]
    fn test_newest_first() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(STORE_FILE);
        let raw = r#"[
            {"id":"a","name":"old","originalText":"x","encryptedText":"y","method":"caesar","key":1,"timestamp":100},
            {"id":"b","name":"new","originalText":"x","encryptedText":"y","method":"vigenere","key":"k","timestamp":300},
            {"id":"c","name":"mid","originalText":"x","encryptedText":"y","method":"caesar","key":"rot13","timestamp":200}
        ]"#;
        fs::write(&path, raw).unwrap();

        let store = MessageStore::at_path(&path);
        let names: Vec<String> = store
            .list_newest_first()
            .unwrap()
            .into_iter()
            .map(|m| m.name)
            .collect();
        assert_eq!(names, vec!["new", "mid", "old"]);
        assert_eq!(store.list_all().unwrap()[0].name, "old");
    }

    #[test]
    fn test_generate_id() {
        let id = generate_id();
        assert_eq!(id.len(), ID_LEN);
        assert!(id.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
        assert_ne!(generate_id(), id);
    }
}
