//! Fixed substitution ciphers: Atbash and ROT13
//!
//! Both are involutions, so encryption and decryption are the same map.

use crate::cipher::{Direction, TextCipher};
use crate::ciphers::caesar::caesar;
use crate::utils;

/// Mirrors each letter in the alphabet (A↔Z, B↔Y, ...), keeping its case.
///
/// ```rust
/// assert_eq!(classic_ciphers::atbash("Hello"), "Svool");
/// ```
pub fn atbash(text: &str) -> String {
    text.chars()
        .map(|c| match utils::case_base(c) {
            Some(base) => (base + (utils::ALPHABET_LEN - 1) - (c as u8 - base)) as char,
            None => c,
        })
        .collect()
}

/// Caesar with a fixed shift of 13.
///
/// ```rust
/// assert_eq!(classic_ciphers::rot13("Hello, World!"), "Uryyb, Jbeyq!");
/// ```
pub fn rot13(text: &str) -> String {
    caesar(text, 13, Direction::Encrypt)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Atbash;

impl TextCipher for Atbash {
    fn encrypt(&self, text: &str) -> String {
        atbash(text)
    }

    fn decrypt(&self, text: &str) -> String {
        atbash(text)
    }

    fn name(&self) -> &'static str {
        "atbash"
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rot13;

impl TextCipher for Rot13 {
    fn encrypt(&self, text: &str) -> String {
        rot13(text)
    }

    fn decrypt(&self, text: &str) -> String {
        rot13(text)
    }

    fn name(&self) -> &'static str {
        "rot13"
    }
}
