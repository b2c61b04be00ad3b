//! Saved message records

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};

use classic_ciphers::{parse_shift, Atbash, Caesar, CipherKind, Rot13, TextCipher, Vigenere};

use crate::error::{Result, StoreError};

/// Cipher family a message was produced with.
///
/// Atbash and ROT13 results are filed under `Caesar` with the cipher's name
/// as the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    Caesar,
    Vigenere,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Caesar => "caesar",
            Method::Vigenere => "vigenere",
        };
        f.pad(name)
    }
}

impl FromStr for Method {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "caesar" => Ok(Method::Caesar),
            "vigenere" => Ok(Method::Vigenere),
            _ => Err(StoreError::UnknownMethod(s.to_string())),
        }
    }
}

/// A shift (stored as a JSON number) or a keyword (stored as a string).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageKey {
    Shift(i64),
    Keyword(String),
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageKey::Shift(shift) => write!(f, "{}", shift),
            MessageKey::Keyword(keyword) => f.write_str(keyword),
        }
    }
}

impl From<i64> for MessageKey {
    fn from(shift: i64) -> Self {
        MessageKey::Shift(shift)
    }
}

impl From<&str> for MessageKey {
    fn from(keyword: &str) -> Self {
        MessageKey::Keyword(keyword.to_string())
    }
}

/// A message about to be saved; the store assigns id and timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    pub name: String,
    pub original_text: String,
    pub encrypted_text: String,
    pub method: Method,
    pub key: MessageKey,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedMessage {
    pub id: String,
    pub name: String,
    pub original_text: String,
    pub encrypted_text: String,
    pub method: Method,
    pub key: MessageKey,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
}

impl SavedMessage {
    /// Local time the message was saved, if the timestamp is representable.
    pub fn saved_at(&self) -> Option<DateTime<Local>> {
        Local.timestamp_millis_opt(self.timestamp).single()
    }

    /// Rebuilds the cipher described by `method` and `key`.
    pub fn cipher(&self) -> Result<Box<dyn TextCipher>> {
        let cipher: Box<dyn TextCipher> = match (&self.method, &self.key) {
            (Method::Caesar, MessageKey::Shift(shift)) => Box::new(Caesar::new(*shift)),
            (Method::Caesar, MessageKey::Keyword(word)) => match word.parse::<CipherKind>() {
                Ok(CipherKind::Atbash) => Box::new(Atbash),
                Ok(CipherKind::Rot13) => Box::new(Rot13),
                _ => Box::new(Caesar::new(parse_shift(word)?)),
            },
            (Method::Vigenere, MessageKey::Keyword(word)) => Box::new(Vigenere::new(word)),
            (Method::Vigenere, MessageKey::Shift(shift)) => {
                return Err(StoreError::InvalidKey {
                    method: self.method,
                    key: shift.to_string(),
                })
            }
        };
        Ok(cipher)
    }

    /// Whether `encrypted_text` is what the stored key turns `original_text`
    /// into, in either direction.
    pub fn verify(&self) -> Result<bool> {
        let cipher = self.cipher()?;
        Ok(cipher.encrypt(&self.original_text) == self.encrypted_text
            || cipher.decrypt(&self.original_text) == self.encrypted_text)
    }
}

/// Name used when the user saves without one, e.g. `Caesar-2026-10-19 14:03:11`.
pub fn default_name(label: &str) -> String {
    format!("{}-{}", label, Local::now().format("%Y-%m-%d %H:%M:%S"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(method: Method, key: MessageKey, original: &str, encrypted: &str) -> SavedMessage {
        SavedMessage {
            id: "abc123".to_string(),
            name: "test".to_string(),
            original_text: original.to_string(),
            encrypted_text: encrypted.to_string(),
            method,
            key,
            timestamp: 1_700_000_000_000,
        }
    }

    #[test]
    fn test_json_field_names() {
        let saved = message(Method::Caesar, MessageKey::Shift(3), "ABC", "DEF");
        let json = serde_json::to_value(&saved).unwrap();

        assert_eq!(json["originalText"], "ABC");
        assert_eq!(json["encryptedText"], "DEF");
        assert_eq!(json["method"], "caesar");
        assert_eq!(json["key"], 3);
        assert_eq!(json["timestamp"], 1_700_000_000_000i64);
    }

    #[test]
    fn test_key_accepts_numbers_and_strings() {
        let raw = r#"{"id":"x","name":"n","originalText":"a","encryptedText":"b",
            "method":"vigenere","key":"LEMON","timestamp":1}"#;
        let saved: SavedMessage = serde_json::from_str(raw).unwrap();
        assert_eq!(saved.key, MessageKey::Keyword("LEMON".to_string()));
        assert_eq!(saved.method, Method::Vigenere);
    }

    #[test]
    fn test_method_parsing() {
        assert_eq!("Caesar".parse::<Method>().unwrap(), Method::Caesar);
        assert!(matches!("atbash".parse::<Method>(), Err(StoreError::UnknownMethod(_))));
    }

    #[test]
    fn test_verify_rebuilds_cipher() {
        assert!(message(Method::Caesar, MessageKey::Shift(3), "ABC", "DEF").verify().unwrap());
        assert!(message(Method::Caesar, MessageKey::Shift(3), "DEF", "ABC").verify().unwrap());
        assert!(message(Method::Caesar, "atbash".into(), "Hello", "Svool").verify().unwrap());
        assert!(message(Method::Caesar, "rot13".into(), "Hello", "Uryyb").verify().unwrap());
        assert!(message(Method::Caesar, "7".into(), "abc", "hij").verify().unwrap());
        assert!(message(Method::Vigenere, "LEMON".into(), "ATTACKATDAWN", "LXFOPVEFRNHR")
            .verify()
            .unwrap());
        assert!(!message(Method::Caesar, MessageKey::Shift(4), "ABC", "DEF").verify().unwrap());
    }

    #[test]
    fn test_invalid_keys() {
        assert!(matches!(
            message(Method::Vigenere, MessageKey::Shift(3), "a", "b").cipher(),
            Err(StoreError::InvalidKey { .. })
        ));
        assert!(matches!(
            message(Method::Caesar, "enigma".into(), "a", "b").cipher(),
            Err(StoreError::Cipher(_))
        ));
    }

    #[test]
    fn test_default_name() {
        let name = default_name("Vigenere");
        assert!(name.starts_with("Vigenere-"));
        assert_eq!(name.len(), "Vigenere-".len() + "2026-10-19 14:03:11".len());
    }

    #[test]
    fn test_saved_at() {
        let saved = message(Method::Caesar, MessageKey::Shift(1), "a", "b");
        assert_eq!(saved.saved_at().unwrap().timestamp_millis(), 1_700_000_000_000);
    }
}
