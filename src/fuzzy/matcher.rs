// src/fuzzy/matcher.rs
use crate::core::tables;
use crate::core::types::NumeralTriple;
use crate::fuzzy::variants::expand_variants;

/// Decides whether a free-text answer names the triple's number.
///
/// Kanji and hiragana must match exactly (after normalization); romaji is
/// matched fuzzily through the variant set. Tabulated alternate readings
/// (しち for 7, し for 4, ...) are accepted the same way even though the
/// canonical triple never displays them.
pub fn is_match(user_input: &str, triple: &NumeralTriple) -> bool {
    if triple.is_unknown() {
        return false;
    }
    let input = normalize(user_input);
    if input.is_empty() {
        return false;
    }
    if input == normalize(&triple.kanji) || input == normalize(&triple.hiragana) {
        return true;
    }
    if transliteration_match(&input, &triple.romaji) {
        return true;
    }
    tables::alternate_readings(triple.value)
        .iter()
        .any(|&(hiragana, romaji)| input == hiragana || transliteration_match(&input, romaji))
}

/// Fuzzy romaji comparison: exact hit first, then membership in the
/// variant closure of the canonical spelling.
pub fn transliteration_match(input: &str, canonical: &str) -> bool {
    let input = normalize(input);
    let canonical = normalize(canonical);
    if input == canonical {
        return true;
    }
    expand_variants(&canonical).contains(&input)
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::converter::convert;

    #[test]
    fn exact_fields_match() {
        let t = convert(300);
        assert!(is_match("三百", &t));
        assert!(is_match("さんびゃく", &t));
        assert!(is_match("sanbyaku", &t));
    }

    #[test]
    fn normalization_tolerates_case_and_whitespace() {
        let t = convert(8000);
        assert!(is_match("  Hassen ", &t));
    }

    #[test]
    fn romaji_variants_accepted() {
        assert!(is_match("jyuu", &convert(10)));
        assert!(is_match("jyu", &convert(10)));
        assert!(is_match("sannbyaku", &convert(300)));
    }

    #[test]
    fn alternate_readings_accepted() {
        assert!(is_match("shi", &convert(4)));
        assert!(is_match("し", &convert(4)));
        assert!(is_match("shichi", &convert(7)));
        assert!(is_match("ku", &convert(9)));
        assert!(is_match("juushichi", &convert(17)));
        assert!(is_match("shichijuu", &convert(70)));
    }

    #[test]
    fn wrong_answer_rejected() {
        assert!(!is_match("ichi", &convert(21)));
        assert!(!is_match("にじゅう", &convert(21)));
        assert!(!is_match("", &convert(21)));
    }

    #[test]
    fn sentinel_never_matches() {
        let t = convert(-1);
        assert!(!is_match("?", &t));
        assert!(!is_match("rei", &t));
    }
}
