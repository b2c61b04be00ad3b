//! # Classic Ciphers Library
//!
//! Classical substitution ciphers and the elementary cryptanalysis used to
//! break them. None of this is secure; it exists to be read and played with.
//!
//! ## Supported Ciphers
//!
//! - **Caesar** - every letter shifted by a fixed offset
//! - **Vigenère** - per-letter shift taken from a repeating keyword
//! - **Atbash** - alphabet mirrored (A↔Z)
//! - **ROT13** - Caesar with shift 13
//!
//! ## Analysis
//!
//! - Letter frequency tables and an English reference distribution
//! - Automatic Caesar decryption by frequency matching, and a full listing
//!   of all 26 shifts
//! - A heuristic keyword strength estimate
//!
//! ## Usage
//!
//! ```rust
//! use classic_ciphers::{auto_decrypt_caesar, caesar, vigenere, Direction};
//!
//! let secret = caesar("Attack at dawn", 3, Direction::Encrypt);
//! assert_eq!(secret, "Dwwdfn dw gdzq");
//! assert_eq!(caesar(&secret, 3, Direction::Decrypt), "Attack at dawn");
//!
//! let secret = vigenere("ATTACKATDAWN", "LEMON", Direction::Encrypt);
//! assert_eq!(secret, "LXFOPVEFRNHR");
//!
//! let guess = auto_decrypt_caesar("Wkh txlfn eurzq ira mxpsv ryhu wkh odcb grj");
//! println!("shift {}: {}", guess.shift, guess.plain_text);
//! ```
//!
//! Only ASCII letters are transformed. Case is preserved and every other
//! character stays where it was, so output and input have the same length.
//! None of the functions fail: shifts are reduced modulo 26, and an empty
//! keyword leaves the text unchanged.
//!
//! ## Features
//!
//! - `serde` - `Serialize` for the analysis result types

// Public modules
pub mod analysis;
pub mod cipher;
pub mod ciphers;
pub mod error;
pub mod strength;
pub mod utils;

// Re-exports for easy access
pub use analysis::{
    auto_decrypt_caesar, brute_force, english_frequency, frequency_profile, letter_frequency,
    reference_english_frequency, AutoDecryption, Candidate, FrequencyTable, LetterProfile,
    ENGLISH_FREQUENCIES, PREVIEW_CHARS,
};
pub use cipher::{CipherKind, Direction, TextCipher};
pub use ciphers::{atbash, caesar, rot13, vigenere, vigenere_with, Atbash, Caesar, KeyAdvance, Rot13, Vigenere};
pub use error::{CipherError, Result};
pub use strength::{estimate_strength, CharacterClasses, StrengthAssessment, StrengthTier, Suggestion};
pub use utils::parse_shift;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Names of all supported ciphers
pub fn supported_ciphers() -> Vec<&'static str> {
    CipherKind::ALL.iter().map(|kind| kind.as_str()).collect()
}

/// Builds a cipher from its kind and a key string.
///
/// Caesar expects an integer shift, Vigenère a keyword; Atbash and ROT13
/// ignore the key.
///
/// # Example
///
/// ```rust
/// use classic_ciphers::{build_cipher, CipherKind};
///
/// let cipher = build_cipher(CipherKind::Caesar, "3")?;
/// assert_eq!(cipher.encrypt("abc"), "def");
/// # Ok::<(), classic_ciphers::CipherError>(())
/// ```
pub fn build_cipher(kind: CipherKind, key: &str) -> Result<Box<dyn TextCipher>> {
    let cipher: Box<dyn TextCipher> = match kind {
        CipherKind::Caesar => Box::new(Caesar::new(parse_shift(key)?)),
        CipherKind::Vigenere => Box::new(Vigenere::new(key)),
        CipherKind::Atbash => Box::new(Atbash),
        CipherKind::Rot13 => Box::new(Rot13),
    };
    Ok(cipher)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXTS: [&str; 5] = [
        "",
        "Hello, World!",
        "The quick brown fox jumps over the lazy dog. 1234567890",
        "MiXeD cAsE wItH \t tabs\nand newlines",
        "Ünïcödé stays: 日本語 ✓",
    ];

    fn ciphers() -> Vec<Box<dyn TextCipher>> {
        vec![
            Box::new(Caesar::new(3)),
            Box::new(Caesar::new(-40)),
            Box::new(Vigenere::new("LEMON")),
            Box::new(Vigenere::new("Secret Key!").with_advance(KeyAdvance::EveryChar)),
            Box::new(Atbash),
            Box::new(Rot13),
        ]
    }

    #[test]
    fn test_all_ciphers_round_trip() {
        for cipher in ciphers() {
            for text in TEXTS {
                let encrypted = cipher.encrypt(text);
                assert_eq!(cipher.decrypt(&encrypted), text, "{} failed on {:?}", cipher.name(), text);
            }
        }
    }

    #[test]
    fn test_all_ciphers_preserve_shape() {
        for cipher in ciphers() {
            for text in TEXTS {
                let encrypted = cipher.encrypt(text);
                assert_eq!(encrypted.chars().count(), text.chars().count());

                for (a, b) in text.chars().zip(encrypted.chars()) {
                    if a.is_ascii_alphabetic() {
                        assert!(b.is_ascii_alphabetic());
                        assert_eq!(a.is_ascii_uppercase(), b.is_ascii_uppercase());
                    } else {
                        assert_eq!(a, b);
                    }
                }
            }
        }
    }

    #[test]
    fn test_build_cipher() {
        let caesar = build_cipher(CipherKind::Caesar, " 3 ").unwrap();
        assert_eq!(caesar.encrypt("ABC"), "DEF");

        let vigenere = build_cipher(CipherKind::Vigenere, "LEMON").unwrap();
        assert_eq!(vigenere.encrypt("ATTACKATDAWN"), "LXFOPVEFRNHR");

        let rot13 = build_cipher(CipherKind::Rot13, "").unwrap();
        assert_eq!(rot13.name(), "rot13");

        assert!(matches!(
            build_cipher(CipherKind::Caesar, "three"),
            Err(CipherError::InvalidShift(_))
        ));
    }

    #[test]
    fn test_metadata() {
        assert_eq!(supported_ciphers(), vec!["caesar", "vigenere", "atbash", "rot13"]);
        assert!(!VERSION.is_empty());
    }
}
