//! Letter frequency analysis

use std::collections::BTreeMap;

use crate::utils;

/// English letter frequencies in percent, a..z
pub const ENGLISH_FREQUENCIES: [f64; 26] = [
    8.12, 1.49, 2.71, 4.32, 12.02, 2.30, 2.03, 5.92,
    7.31, 0.10, 0.69, 3.98, 2.61, 6.95, 7.68, 1.82,
    0.11, 6.02, 6.28, 9.10, 2.88, 1.11, 2.09, 0.17,
    2.11, 0.07,
];

/// Expected percentage of `letter` in English prose (0.0 for non-letters).
pub fn english_frequency(letter: char) -> f64 {
    utils::letter_index(letter)
        .map(|index| ENGLISH_FREQUENCIES[index])
        .unwrap_or(0.0)
}

/// The reference table keyed by lowercase letter.
pub fn reference_english_frequency() -> BTreeMap<char, f64> {
    ENGLISH_FREQUENCIES
        .iter()
        .enumerate()
        .map(|(index, &percent)| (utils::letter_at(index), percent))
        .collect()
}

/// Occurrence counts for all 26 letters, case folded.
///
/// Every letter is always present; letters that do not occur count 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrequencyTable {
    counts: [usize; 26],
}

impl FrequencyTable {
    /// Counts the ASCII letters of `text`, ignoring everything else.
    pub fn from_text(text: &str) -> Self {
        let mut counts: [usize; 26] = [0; 26];

        for index in text.chars().filter_map(utils::letter_index) {
            counts[index] += 1;
        }

        Self { counts }
    }

    pub fn from_counts(counts: [usize; 26]) -> Self {
        Self { counts }
    }

    /// Count for `letter` in either case; 0 for non-letters.
    pub fn count(&self, letter: char) -> usize {
        utils::letter_index(letter)
            .map(|index| self.counts[index])
            .unwrap_or(0)
    }

    pub fn counts(&self) -> &[usize; 26] {
        &self.counts
    }

    /// Number of letters counted
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// `(letter, count)` pairs in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(|(index, &count)| (utils::letter_at(index), count))
    }

    /// Counts as percentages of the total letter count.
    ///
    /// An empty table divides by 1, so every percentage is 0.
    pub fn percentages(&self) -> [f64; 26] {
        let total: f64 = self.total().max(1) as f64;
        let mut percentages: [f64; 26] = [0.0; 26];

        for (slot, &count) in percentages.iter_mut().zip(self.counts.iter()) {
            *slot = count as f64 / total * 100.0;
        }

        percentages
    }

    pub fn percentage(&self, letter: char) -> f64 {
        utils::letter_index(letter)
            .map(|index| self.percentages()[index])
            .unwrap_or(0.0)
    }

    pub fn to_map(&self) -> BTreeMap<char, usize> {
        self.iter().collect()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for FrequencyTable {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.counts.len()))?;
        for (letter, count) in self.iter() {
            map.serialize_entry(&letter, &count)?;
        }
        map.end()
    }
}

/// Counts letter occurrences in `text`.
///
/// # Example
///
/// ```rust
/// let table = classic_ciphers::letter_frequency("Aa!");
/// assert_eq!(table.count('a'), 2);
/// assert_eq!(table.count('z'), 0);
/// ```
pub fn letter_frequency(text: &str) -> FrequencyTable {
    FrequencyTable::from_text(text)
}

/// One row of a frequency comparison against English.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LetterProfile {
    pub letter: char,
    pub count: usize,
    pub observed_percent: f64,
    pub english_percent: f64,
}

/// Observed and expected percentages for every letter, a..z.
pub fn frequency_profile(text: &str) -> Vec<LetterProfile> {
    let table: FrequencyTable = FrequencyTable::from_text(text);
    let percentages: [f64; 26] = table.percentages();

    table
        .iter()
        .zip(percentages)
        .zip(ENGLISH_FREQUENCIES)
        .map(|(((letter, count), observed_percent), english_percent)| LetterProfile {
            letter,
            count,
            observed_percent,
            english_percent,
        })
        .collect()
}
