//! Error types for the message store

use thiserror::Error;

use classic_ciphers::CipherError;

use crate::message::Method;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No saved message with id {0}")]
    NotFound(String),

    #[error("Unknown method: {0} (expected caesar or vigenere)")]
    UnknownMethod(String),

    #[error("Key {key:?} cannot be used with the {method} method")]
    InvalidKey { method: Method, key: String },

    #[error(transparent)]
    Cipher(#[from] CipherError),
}

pub type Result<T> = std::result::Result<T, StoreError>;
