//! Generic text cipher trait

use std::fmt;
use std::str::FromStr;

use crate::error::{CipherError, Result};

/// Which way a transform runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    Encrypt,
    Decrypt,
}

impl Direction {
    pub fn is_encrypt(self) -> bool {
        self == Direction::Encrypt
    }
}

impl From<bool> for Direction {
    /// `true` encrypts, `false` decrypts.
    fn from(encrypt: bool) -> Self {
        if encrypt {
            Direction::Encrypt
        } else {
            Direction::Decrypt
        }
    }
}

/// Trait for a letter-substitution cipher over text.
///
/// Implementations map ASCII letters only, keep their case, and leave every
/// other character in place, so the output always has the same length as
/// the input.
pub trait TextCipher {
    /// Encrypts a whole text
    fn encrypt(&self, text: &str) -> String;

    /// Decrypts a whole text
    fn decrypt(&self, text: &str) -> String;

    /// Short lowercase name of the cipher
    fn name(&self) -> &'static str;

    /// Runs the cipher in the given direction
    fn apply(&self, text: &str, direction: Direction) -> String {
        match direction {
            Direction::Encrypt => self.encrypt(text),
            Direction::Decrypt => self.decrypt(text),
        }
    }
}

/// The ciphers this crate implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CipherKind {
    Caesar,
    Vigenere,
    Atbash,
    Rot13,
}

impl CipherKind {
    pub const ALL: [CipherKind; 4] = [
        CipherKind::Caesar,
        CipherKind::Vigenere,
        CipherKind::Atbash,
        CipherKind::Rot13,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CipherKind::Caesar => "caesar",
            CipherKind::Vigenere => "vigenere",
            CipherKind::Atbash => "atbash",
            CipherKind::Rot13 => "rot13",
        }
    }

    /// Whether applying the cipher twice gives back the input.
    pub fn is_involution(self) -> bool {
        matches!(self, CipherKind::Atbash | CipherKind::Rot13)
    }
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CipherKind {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "caesar" => Ok(CipherKind::Caesar),
            "vigenere" | "vigenère" => Ok(CipherKind::Vigenere),
            "atbash" => Ok(CipherKind::Atbash),
            "rot13" => Ok(CipherKind::Rot13),
            _ => Err(CipherError::UnknownCipher(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_bool() {
        assert_eq!(Direction::from(true), Direction::Encrypt);
        assert_eq!(Direction::from(false), Direction::Decrypt);
        assert!(Direction::default().is_encrypt());
    }

    #[test]
    fn test_cipher_kind_parsing() {
        assert_eq!("ROT13".parse::<CipherKind>().unwrap(), CipherKind::Rot13);
        assert_eq!(" atbash".parse::<CipherKind>().unwrap(), CipherKind::Atbash);
        assert_eq!("Vigenère".parse::<CipherKind>().unwrap(), CipherKind::Vigenere);
        assert!(matches!(
            "enigma".parse::<CipherKind>(),
            Err(CipherError::UnknownCipher(_))
        ));
    }

    #[test]
    fn test_cipher_kind_names_round_trip() {
        for kind in CipherKind::ALL {
            assert_eq!(kind.to_string().parse::<CipherKind>().unwrap(), kind);
        }
    }
}
