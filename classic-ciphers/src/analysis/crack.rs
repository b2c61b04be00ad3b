//! Caesar key recovery: exhaustive listing and frequency matching

use std::fmt;

use tracing::debug;

use crate::analysis::frequency::{FrequencyTable, ENGLISH_FREQUENCIES};
use crate::cipher::Direction;
use crate::ciphers::caesar;
use crate::utils::ALPHABET_LEN;

/// Characters shown per candidate when listing all shifts
pub const PREVIEW_CHARS: usize = 50;

/// Result of automatic Caesar decryption.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AutoDecryption {
    /// The shift that was undone (0..26)
    pub shift: u8,
    pub plain_text: String,
    /// Sum of squared percentage differences to English; lower is better
    pub score: f64,
}

/// Recovers a Caesar shift by matching letter frequencies against English.
///
/// Every shift in `0..26` is scored by the sum of squared differences between
/// the decrypted text's letter percentages and [`ENGLISH_FREQUENCIES`]; the
/// lowest score wins and ties go to the smaller shift. Text without letters
/// scores every shift alike, so the result is shift 0.
///
/// Reliable on a paragraph of English; short or unusual text may mislead it.
pub fn auto_decrypt_caesar(cipher_text: &str) -> AutoDecryption {
    let frequencies: FrequencyTable = FrequencyTable::from_text(cipher_text);
    let total: f64 = frequencies.total().max(1) as f64;

    let mut best_shift: u8 = 0;
    let mut best_score: f64 = f64::MAX;

    for shift in 0..ALPHABET_LEN {
        let score: f64 = shift_score(frequencies.counts(), total, shift);
        debug!(shift, score, "scored candidate shift");

        if score < best_score {
            best_score = score;
            best_shift = shift;
        }
    }

    debug!(shift = best_shift, score = best_score, "selected shift");

    AutoDecryption {
        shift: best_shift,
        plain_text: caesar(cipher_text, best_shift as i64, Direction::Decrypt),
        score: best_score,
    }
}

/// Squared-difference score of decrypting with `shift`.
///
/// Decrypting maps cipher letter `i + shift` to plain letter `i`, so the
/// plain count for `i` is read from the cipher table without re-encoding.
fn shift_score(counts: &[usize; 26], total: f64, shift: u8) -> f64 {
    (0..counts.len())
        .map(|i| {
            let observed: f64 = counts[(i + shift as usize) % counts.len()] as f64 / total * 100.0;
            (ENGLISH_FREQUENCIES[i] - observed).powi(2)
        })
        .sum()
}

/// One decryption attempt when trying every shift.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Candidate {
    pub shift: u8,
    pub text: String,
}

impl Candidate {
    /// The first `max_chars` characters, with `...` appended when cut.
    pub fn preview(&self, max_chars: usize) -> String {
        let mut chars = self.text.chars();
        let head: String = chars.by_ref().take(max_chars).collect();

        if chars.next().is_some() {
            format!("{}...", head)
        } else {
            head
        }
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Shift {}: {}", self.shift, self.preview(PREVIEW_CHARS))
    }
}

/// Decrypts `text` with each of the 26 shifts, in ascending order.
pub fn brute_force(text: &str) -> Vec<Candidate> {
    (0..ALPHABET_LEN)
        .map(|shift| Candidate {
            shift,
            text: caesar(text, shift as i64, Direction::Decrypt),
        })
        .collect()
}
