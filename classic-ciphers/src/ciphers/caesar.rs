//! Caesar (additive) cipher

use crate::cipher::{Direction, TextCipher};
use crate::utils;

/// Shifts every ASCII letter of `text` by `shift` positions, wrapping inside
/// its own case.
///
/// # Arguments
///
/// * `text` - The input text. Non-letters are passed through unchanged.
/// * `shift` - Any integer; it is reduced modulo 26 first, so `-1` and `25`
///   are the same key.
/// * `direction` - Decryption is encryption with the complementary shift.
///
/// # Returns
///
/// A `String` with the same number of characters as `text`.
///
/// # Example
///
/// ```rust
/// use classic_ciphers::{caesar, Direction};
///
/// assert_eq!(caesar("ABC", 3, Direction::Encrypt), "DEF");
/// assert_eq!(caesar("DEF", 3, Direction::Decrypt), "ABC");
/// ```
pub fn caesar(text: &str, shift: i64, direction: Direction) -> String {
    let mut shift: u8 = utils::normalize_shift(shift);

    if direction == Direction::Decrypt {
        shift = utils::complement(shift);
    }

    text.chars().map(|c| utils::shift_char(c, shift)).collect()
}

/// A Caesar cipher bound to one shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caesar {
    shift: i64,
}

impl Caesar {
    pub fn new(shift: i64) -> Self {
        Self { shift }
    }

    /// The shift as given
    pub fn shift(&self) -> i64 {
        self.shift
    }

    /// The shift reduced into `0..26`
    pub fn normalized_shift(&self) -> u8 {
        utils::normalize_shift(self.shift)
    }
}

impl TextCipher for Caesar {
    fn encrypt(&self, text: &str) -> String {
        caesar(text, self.shift, Direction::Encrypt)
    }

    fn decrypt(&self, text: &str) -> String {
        caesar(text, self.shift, Direction::Decrypt)
    }

    fn name(&self) -> &'static str {
        "caesar"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_vectors() {
        assert_eq!(caesar("ABC", 3, Direction::Encrypt), "DEF");
        assert_eq!(caesar("DEF", 3, Direction::Decrypt), "ABC");
        assert_eq!(caesar("xyz", 3, Direction::Encrypt), "abc");
    }

    #[test]
    fn test_preserves_case_and_non_letters() {
        let encrypted = caesar("Hello, World! 123 äß", 5, Direction::Encrypt);
        assert_eq!(encrypted, "Mjqqt, Btwqi! 123 äß");
    }

    #[test]
    fn test_negative_and_large_shifts_are_normalized() {
        let text = "The quick brown fox";
        assert_eq!(
            caesar(text, -1, Direction::Encrypt),
            caesar(text, 25, Direction::Encrypt)
        );
        assert_eq!(
            caesar(text, 55, Direction::Encrypt),
            caesar(text, 3, Direction::Encrypt)
        );
        assert_eq!(caesar(text, 26, Direction::Encrypt), text);
    }

    #[test]
    fn test_decrypt_undoes_encrypt() {
        let text = "Attack at dawn! Meet at the old mill, 6pm.";
        for shift in -30..30 {
            let encrypted = caesar(text, shift, Direction::Encrypt);
            assert_eq!(caesar(&encrypted, shift, Direction::Decrypt), text);
        }
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(caesar("", 7, Direction::Encrypt), "");
    }

    #[test]
    fn test_text_cipher_impl() {
        let cipher = Caesar::new(-23);
        assert_eq!(cipher.normalized_shift(), 3);
        assert_eq!(cipher.encrypt("abc"), "def");
        assert_eq!(cipher.apply("def", Direction::Decrypt), "abc");
        assert_eq!(cipher.name(), "caesar");
    }
}
