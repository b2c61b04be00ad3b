//! Heuristic keyword / password strength estimation
//!
//! This is a teaching aid: the score only looks at length and which
//! character classes occur, and the crack time assumes a plain brute-force
//! search at a fixed guess rate.

use std::fmt;

/// Assumed attacker throughput
pub const GUESSES_PER_SECOND: f64 = 1_000_000_000.0;

/// Length below which a lengthening hint is given
pub const MIN_RECOMMENDED_LENGTH: usize = 8;

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3_600.0;
const DAY: f64 = 86_400.0;
const YEAR: f64 = 31_536_000.0;
const CENTURY: f64 = YEAR * 100.0;

/// Character classes present in a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CharacterClasses {
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    /// Anything that is not an ASCII letter or digit
    pub symbols: bool,
}

impl CharacterClasses {
    pub fn detect(password: &str) -> Self {
        let mut classes = Self::default();

        for c in password.chars() {
            match c {
                'A'..='Z' => classes.uppercase = true,
                'a'..='z' => classes.lowercase = true,
                '0'..='9' => classes.digits = true,
                _ => classes.symbols = true,
            }
        }

        classes
    }

    /// How many of the four classes are present
    pub fn count(&self) -> usize {
        [self.uppercase, self.lowercase, self.digits, self.symbols]
            .iter()
            .filter(|&&present| present)
            .count()
    }

    /// Size of the alphabet a brute-force search has to cover.
    pub fn alphabet_size(&self) -> usize {
        let mut size: usize = 0;
        if self.lowercase {
            size += 26;
        }
        if self.uppercase {
            size += 26;
        }
        if self.digits {
            size += 10;
        }
        if self.symbols {
            size += 32;
        }
        size
    }
}

/// An improvement hint. Variants are declared in the order they are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suggestion {
    Lengthen,
    AddUppercase,
    AddLowercase,
    AddDigits,
    AddSymbols,
}

impl Suggestion {
    pub fn message(self) -> &'static str {
        match self {
            Suggestion::Lengthen => "Make your password longer (at least 8 characters).",
            Suggestion::AddUppercase => "Add uppercase letters.",
            Suggestion::AddLowercase => "Add lowercase letters.",
            Suggestion::AddDigits => "Add numbers.",
            Suggestion::AddSymbols => "Add special characters.",
        }
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Suggestion {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message())
    }
}

/// Score bands used when displaying an assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum StrengthTier {
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthTier {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=29 => StrengthTier::Weak,
            30..=59 => StrengthTier::Fair,
            60..=79 => StrengthTier::Good,
            _ => StrengthTier::Strong,
        }
    }
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StrengthTier::Weak => "Weak",
            StrengthTier::Fair => "Fair",
            StrengthTier::Good => "Good",
            StrengthTier::Strong => "Strong",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StrengthAssessment {
    /// 0..=100
    pub score: u8,
    pub estimated_crack_time: String,
    pub suggestions: Vec<Suggestion>,
}

impl StrengthAssessment {
    pub fn tier(&self) -> StrengthTier {
        StrengthTier::from_score(self.score)
    }
}

/// Scores a keyword or password.
///
/// `score = 4 * length + 15 * classes`, clamped to 100. Suggestions come in a
/// fixed order: length, uppercase, lowercase, digits, symbols.
///
/// # Example
///
/// ```rust
/// let assessment = classic_ciphers::estimate_strength("");
/// assert_eq!(assessment.score, 0);
/// assert_eq!(assessment.suggestions.len(), 5);
/// ```
pub fn estimate_strength(password: &str) -> StrengthAssessment {
    let length: usize = password.chars().count();
    let classes: CharacterClasses = CharacterClasses::detect(password);

    let raw_score: usize = length
        .saturating_mul(4)
        .saturating_add(5 * classes.count())
        .saturating_add(10 * classes.count());
    let score: u8 = raw_score.min(100) as u8;

    let mut suggestions: Vec<Suggestion> = Vec::new();
    if length < MIN_RECOMMENDED_LENGTH {
        suggestions.push(Suggestion::Lengthen);
    }
    if !classes.uppercase {
        suggestions.push(Suggestion::AddUppercase);
    }
    if !classes.lowercase {
        suggestions.push(Suggestion::AddLowercase);
    }
    if !classes.digits {
        suggestions.push(Suggestion::AddDigits);
    }
    if !classes.symbols {
        suggestions.push(Suggestion::AddSymbols);
    }

    let seconds: f64 = brute_force_seconds(classes.alphabet_size(), length);

    StrengthAssessment {
        score,
        estimated_crack_time: format_crack_time(seconds),
        suggestions,
    }
}

/// Seconds to try `alphabet_size ^ length` combinations at [`GUESSES_PER_SECOND`].
///
/// An empty alphabet is treated as size 1.
pub fn brute_force_seconds(alphabet_size: usize, length: usize) -> f64 {
    let base: f64 = alphabet_size.max(1) as f64;
    base.powf(length as f64) / GUESSES_PER_SECOND
}

/// Renders a duration with two decimals in the largest fitting unit, up to
/// years; anything from a hundred years on is just "centuries".
pub fn format_crack_time(seconds: f64) -> String {
    if seconds < MINUTE {
        format!("{:.2} seconds", seconds)
    } else if seconds < HOUR {
        format!("{:.2} minutes", seconds / MINUTE)
    } else if seconds < DAY {
        format!("{:.2} hours", seconds / HOUR)
    } else if seconds < YEAR {
        format!("{:.2} days", seconds / DAY)
    } else if seconds < CENTURY {
        format!("{:.2} years", seconds / YEAR)
    } else {
        "centuries".to_string()
    }
}
