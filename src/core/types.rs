// src/core/types.rs
use serde::{Deserialize, Serialize};

/// Largest value the numeral grammar covers: 999兆9999億9999万9999.
pub const MAX_VALUE: i64 = 999_999_999_999_999;

/// Marker used in all three fields of the sentinel triple.
pub const UNKNOWN_MARKER: &str = "?";

/// The three parallel renderings of one number.
/// All fields are derived together from `value` by a single deterministic
/// conversion; instances are created per call and owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumeralTriple {
    pub value: i64,
    /// Logographic (kanji) form, e.g. 三百.
    pub kanji: String,
    /// Phonetic (hiragana) form, canonical reading, e.g. さんびゃく.
    pub hiragana: String,
    /// Latin transliteration of the canonical reading, e.g. "sanbyaku".
    /// Accepted spelling variants are derived at match time, not stored.
    pub romaji: String,
}

impl NumeralTriple {
    pub fn new(value: i64, kanji: &str, hiragana: &str, romaji: &str) -> Self {
        Self {
            value,
            kanji: kanji.to_string(),
            hiragana: hiragana.to_string(),
            romaji: romaji.to_string(),
        }
    }

    /// The sentinel returned for any value the grammar cannot express.
    pub fn unknown(value: i64) -> Self {
        Self::new(value, UNKNOWN_MARKER, UNKNOWN_MARKER, UNKNOWN_MARKER)
    }

    pub fn is_unknown(&self) -> bool {
        self.kanji == UNKNOWN_MARKER
    }
}
