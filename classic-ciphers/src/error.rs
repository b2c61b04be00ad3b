//! Error types for parsing cipher parameters

use thiserror::Error;

/// The transforms themselves never fail; these errors only come from
/// turning user-supplied strings into cipher parameters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    #[error("Unknown cipher: {0}")]
    UnknownCipher(String),

    #[error("Invalid shift value: {0:?} (expected an integer)")]
    InvalidShift(String),
}

pub type Result<T> = std::result::Result<T, CipherError>;
