//! Vigenère cipher

use crate::cipher::{Direction, TextCipher};
use crate::utils;

/// How the key stream moves along the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyAdvance {
    /// Only letters consume a key position; punctuation does not
    /// desynchronize the key from the letters.
    #[default]
    Letters,
    /// Every character consumes a key position, letters or not.
    EveryChar,
}

/// Turns a keyword into a list of shifts: lowercased, non-letters dropped.
///
/// `"Le-Mon 1"` becomes the shifts of `"lemon"`.
pub fn derive_key(keyword: &str) -> Vec<u8> {
    keyword.chars().filter_map(utils::letter_index).map(|i| i as u8).collect()
}

/// Encrypts or decrypts `text` with a repeating keyword, advancing the key
/// over letters only.
///
/// A keyword without any letters leaves the text unchanged.
///
/// ```rust
/// use classic_ciphers::{vigenere, Direction};
///
/// assert_eq!(vigenere("ATTACKATDAWN", "LEMON", Direction::Encrypt), "LXFOPVEFRNHR");
/// ```
pub fn vigenere(text: &str, keyword: &str, direction: Direction) -> String {
    vigenere_with(text, keyword, direction, KeyAdvance::Letters)
}

/// Like [`vigenere`], with an explicit key advancement policy.
///
/// # Arguments
///
/// * `text` - The input text.
/// * `keyword` - The keyword; case-insensitive, non-letters ignored.
/// * `direction` - Encrypt adds the key shift, decrypt adds its complement.
/// * `advance` - Whether non-letters consume key positions.
///
/// # Returns
///
/// A `String` with letter case and non-letters in their original positions.
pub fn vigenere_with(text: &str, keyword: &str, direction: Direction, advance: KeyAdvance) -> String {
    let key: Vec<u8> = derive_key(keyword);
    if key.is_empty() {
        return text.to_string();
    }

    let mut key_index: usize = 0;
    let mut result: String = String::with_capacity(text.len());

    for (position, c) in text.chars().enumerate() {
        if utils::case_base(c).is_none() {
            // Non-alphabetic characters remain unchanged
            result.push(c);
            continue;
        }

        let slot: usize = match advance {
            KeyAdvance::Letters => key_index,
            KeyAdvance::EveryChar => position,
        };
        let key_shift: u8 = key[slot % key.len()];
        let shift: u8 = match direction {
            Direction::Encrypt => key_shift,
            Direction::Decrypt => utils::complement(key_shift),
        };

        result.push(utils::shift_char(c, shift));
        key_index += 1;
    }

    result
}

/// A Vigenère cipher bound to one keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vigenere {
    keyword: String,
    advance: KeyAdvance,
}

impl Vigenere {
    pub fn new(keyword: &str) -> Self {
        Self {
            keyword: keyword.to_string(),
            advance: KeyAdvance::default(),
        }
    }

    pub fn with_advance(mut self, advance: KeyAdvance) -> Self {
        self.advance = advance;
        self
    }

    /// The key actually used: lowercase letters of the keyword.
    pub fn key(&self) -> String {
        derive_key(&self.keyword).into_iter().map(|i| utils::letter_at(i as usize)).collect()
    }

    /// True when the keyword has no letters, in which case the cipher is the identity.
    pub fn is_identity(&self) -> bool {
        derive_key(&self.keyword).is_empty()
    }
}

impl TextCipher for Vigenere {
    fn encrypt(&self, text: &str) -> String {
        vigenere_with(text, &self.keyword, Direction::Encrypt, self.advance)
    }

    fn decrypt(&self, text: &str) -> String {
        vigenere_with(text, &self.keyword, Direction::Decrypt, self.advance)
    }

    fn name(&self) -> &'static str {
        "vigenere"
    }
}
