use crate::core::converter;
use crate::core::tables::TABULATED_VALUES;
use crate::core::types::NumeralTriple;
use crate::fuzzy::matcher;
use crate::sampler;

// The engine is a stateless bundle over the pure conversion, matching and
// sampling functions plus the static tables. Safe to share freely; every
// call is independent.
pub struct NumeralEngine;

impl NumeralEngine {
    pub fn new() -> Self {
        Self
    }

    /// Converts a value to its kanji/hiragana/romaji triple. Out-of-domain
    /// values come back as the sentinel triple.
    pub fn convert(&self, value: i64) -> NumeralTriple {
        converter::convert(value)
    }

    /// Judges a free-text answer against a triple, tolerating romanization
    /// spelling variants and alternate readings.
    pub fn is_match(&self, user_input: &str, triple: &NumeralTriple) -> bool {
        matcher::is_match(user_input, triple)
    }

    /// Draws a realistic practice number from `[min, max]`.
    pub fn sample(&self, min: i64, max: i64) -> i64 {
        sampler::sample(min, max)
    }

    /// Draws a realistic practice number from the whole numeral domain.
    pub fn sample_full(&self) -> i64 {
        sampler::sample_full()
    }

    /// Snaps an already-chosen value to its band's rounding granularity.
    pub fn round_to_realistic(&self, value: i64) -> i64 {
        sampler::round_to_realistic(value)
    }

    /// The fixed practice set: triples for every directly-tabulated value
    /// (0-20, the decades, 100), in ascending order.
    pub fn tabulated(&self) -> Vec<NumeralTriple> {
        TABULATED_VALUES.iter().map(|&v| converter::convert(v)).collect()
    }
}

impl Default for NumeralEngine {
    fn default() -> Self {
        Self::new()
    }
}
