//! Character helpers shared by the transforms

use crate::error::{CipherError, Result};

/// Number of letters in the Latin alphabet
pub const ALPHABET_LEN: u8 = 26;

/// Returns the code of `'A'` or `'a'` when `c` is an ASCII letter of that case.
pub fn case_base(c: char) -> Option<u8> {
    match c {
        'A'..='Z' => Some(b'A'),
        'a'..='z' => Some(b'a'),
        _ => None,
    }
}

/// Alphabet position (a=0 .. z=25) of an ASCII letter, ignoring case.
pub fn letter_index(c: char) -> Option<usize> {
    case_base(c).map(|base| (c as u8 - base) as usize)
}

/// Lowercase letter at alphabet position `index` (wrapped into 0..26).
pub fn letter_at(index: usize) -> char {
    (b'a' + (index % ALPHABET_LEN as usize) as u8) as char
}

/// Reduces any integer shift into `0..26`.
pub fn normalize_shift(shift: i64) -> u8 {
    shift.rem_euclid(ALPHABET_LEN as i64) as u8
}

/// The shift that undoes `shift`.
pub fn complement(shift: u8) -> u8 {
    (ALPHABET_LEN - shift % ALPHABET_LEN) % ALPHABET_LEN
}

/// Shifts an ASCII letter forward by `shift` positions inside its own case.
/// Every other character is returned unchanged.
pub fn shift_char(c: char, shift: u8) -> char {
    match case_base(c) {
        Some(base) => ((c as u8 - base + shift % ALPHABET_LEN) % ALPHABET_LEN + base) as char,
        None => c,
    }
}

/// Parses a shift typed by a user, e.g. `"3"`, `" -27 "`.
pub fn parse_shift(input: &str) -> Result<i64> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| CipherError::InvalidShift(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_shift() {
        assert_eq!(normalize_shift(3), 3);
        assert_eq!(normalize_shift(26), 0);
        assert_eq!(normalize_shift(-1), 25);
        assert_eq!(normalize_shift(-27), 25);
        assert_eq!(normalize_shift(i64::MIN), normalize_shift(i64::MIN % 26));
    }

    #[test]
    fn test_complement() {
        assert_eq!(complement(0), 0);
        assert_eq!(complement(3), 23);
        assert_eq!(complement(13), 13);
    }

    #[test]
    fn test_shift_char_wraps_within_case() {
        assert_eq!(shift_char('z', 1), 'a');
        assert_eq!(shift_char('Z', 1), 'A');
        assert_eq!(shift_char('M', 13), 'Z');
        assert_eq!(shift_char('!', 5), '!');
        assert_eq!(shift_char('é', 5), 'é');
    }

    #[test]
    fn test_letter_index() {
        assert_eq!(letter_index('a'), Some(0));
        assert_eq!(letter_index('Z'), Some(25));
        assert_eq!(letter_index('5'), None);
        assert_eq!(letter_at(4), 'e');
    }

    #[test]
    fn test_parse_shift() {
        assert_eq!(parse_shift("7").unwrap(), 7);
        assert_eq!(parse_shift(" -3 ").unwrap(), -3);
        assert!(matches!(parse_shift("seven"), Err(CipherError::InvalidShift(_))));
    }
}
