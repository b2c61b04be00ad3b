//! # Message Store
//!
//! Keeps named records of texts encrypted with the classic ciphers: the
//! original text, the result, the cipher and its key, and when it was saved.
//!
//! ```no_run
//! use message_store::{MessageKey, MessageStore, Method, NewMessage};
//!
//! let store = MessageStore::default_location();
//! let saved = store.save(NewMessage {
//!     name: "greeting".to_string(),
//!     original_text: "Hello".to_string(),
//!     encrypted_text: "Khoor".to_string(),
//!     method: Method::Caesar,
//!     key: MessageKey::Shift(3),
//! })?;
//! store.delete(&saved.id)?;
//! # Ok::<(), message_store::StoreError>(())
//! ```

pub mod error;
pub mod message;
pub mod store;

pub use error::{Result, StoreError};
pub use message::{default_name, MessageKey, Method, NewMessage, SavedMessage};
pub use store::{generate_id, MessageStore, STORE_FILE};

/// Environment variable naming the store file
pub const STORE_ENV: &str = "CIPHER_LAB_STORE";
