// src/fuzzy/variants.rs
use std::collections::HashSet;

/// The 5 long-vowel digraphs: (digraph, short form, lengthening letter).
/// The digraph is always short form + lengthening letter; only "ou"
/// lengthens with a letter other than itself.
const LONG_VOWEL_PAIRS: [(&str, char, char); 5] = [
    ("aa", 'a', 'a'),
    ("ii", 'i', 'i'),
    ("uu", 'u', 'u'),
    ("ee", 'e', 'e'),
    ("ou", 'o', 'u'),
];

/// The 13 palatalized/plain consonant-cluster pairs. Both substitution
/// directions are applied; the list is deliberately permissive.
const PALATAL_PAIRS: [(&str, &str); 13] = [
    ("kya", "ka"),
    ("kyu", "ku"),
    ("kyo", "ko"),
    ("gya", "ga"),
    ("gyu", "gu"),
    ("gyo", "go"),
    ("hya", "ha"),
    ("hyu", "hu"),
    ("hyo", "ho"),
    ("bya", "ba"),
    ("byu", "bu"),
    ("byo", "bo"),
    ("jyu", "ju"),
];

/// Consonants that trigger moraic-nasal doubling when they follow an `n`
/// (labials and plosives).
const NASAL_TRIGGERS: [char; 7] = ['b', 'p', 'm', 'k', 'g', 't', 'd'];

/// Iteration cap for the closure. Each family only grows or shrinks a string
/// by fixed small deltas, so the closure is finite; the cap guarantees
/// termination regardless.
const MAX_ROUNDS: usize = 4;

/// Expands a canonical romaji string into its set of accepted spelling
/// variants, closed under repeated substitution.
///
/// This is an equivalence-class approximation, not a complete phonological
/// model; it prefers over-accepting a plausible spelling to rejecting a
/// correct-minded answer. The returned set always contains `canonical`.
pub fn expand_variants(canonical: &str) -> HashSet<String> {
    let mut variants = HashSet::new();
    variants.insert(canonical.to_string());

    let mut frontier: Vec<String> = vec![canonical.to_string()];

    for _ in 0..MAX_ROUNDS {
        let mut next = Vec::new();
        for v in &frontier {
            for candidate in substitutions(v) {
                if variants.insert(candidate.clone()) {
                    next.push(candidate);
                }
            }
        }
        if next.is_empty() {
            break;
        }
        frontier = next;
    }

    variants
}

/// One round of single-family rewrites of `s`.
fn substitutions(s: &str) -> Vec<String> {
    let mut out = Vec::new();

    for &(long, short, extension) in LONG_VOWEL_PAIRS.iter() {
        if s.contains(long) {
            out.push(s.replace(long, &short.to_string()));
        }
        let promoted = promote_short_vowel(s, short, extension);
        if promoted != s {
            out.push(promoted);
        }
    }

    for &(palatal, plain) in PALATAL_PAIRS.iter() {
        if s.contains(palatal) {
            out.push(s.replace(palatal, plain));
        }
        if s.contains(plain) {
            out.push(s.replace(plain, palatal));
        }
    }

    let doubled = double_nasals(s);
    if doubled != s {
        out.push(doubled);
    }
    if s.contains("nn") {
        out.push(s.replace("nn", "n"));
    }

    out
}

/// Lengthens every occurrence of `short` that is not already part of its
/// digraph and is not followed by another vowel letter (which would create
/// an invalid triphthong).
fn promote_short_vowel(s: &str, short: char, extension: char) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len() + 2);
    for (i, &c) in chars.iter().enumerate() {
        out.push(c);
        if c != short {
            continue;
        }
        let prev_extends = i > 0 && chars[i - 1] == short;
        let next = chars.get(i + 1).copied();
        let next_extends = next == Some(extension);
        let next_is_vowel = matches!(next, Some('a' | 'i' | 'u' | 'e' | 'o'));
        if !prev_extends && !next_extends && !next_is_vowel {
            out.push(extension);
        }
    }
    out
}

/// Doubles every nasal that sits before a labial or plosive.
fn double_nasals(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len() + 2);
    for (i, &c) in chars.iter().enumerate() {
        out.push(c);
        if c == 'n'
            && (i == 0 || chars[i - 1] != 'n')
            && matches!(chars.get(i + 1), Some(next) if NASAL_TRIGGERS.contains(next))
        {
            out.push('n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_contains_canonical() {
        assert!(expand_variants("juu").contains("juu"));
    }

    #[test]
    fn long_vowel_collapse_and_palatalization() {
        let v = expand_variants("juu");
        assert!(v.contains("ju"));
        assert!(v.contains("jyuu"));
        assert!(v.contains("jyu"));
    }

    #[test]
    fn short_vowel_promotion_respects_vowel_boundary() {
        // Final "u" lengthens, but the "ui" cluster in hyakuichi must not
        // grow a triphthong.
        let v = expand_variants("hyakuichi");
        assert!(!v.contains("hyakuuichi"));
    }

    #[test]
    fn kyuu_accepts_plain_cluster() {
        let v = expand_variants("kyuu");
        assert!(v.contains("kuu"));
        assert!(v.contains("ku"));
    }

    #[test]
    fn ou_digraph_lengthens_with_u() {
        // "ou" is the one pair whose lengthening letter differs from its
        // short vowel: o promotes to ou, never to oo.
        let v = expand_variants("chou");
        assert!(v.contains("cho"));
        let v = expand_variants("nicho");
        assert!(v.contains("nichou"));
        assert!(!v.contains("nichoo"));
    }

    #[test]
    fn nasal_doubling_before_labial() {
        let v = expand_variants("sanbyaku");
        assert!(v.contains("sannbyaku"));
        // And the collapse direction.
        let v = expand_variants("sannin");
        assert!(v.contains("sanin"));
    }

    #[test]
    fn closure_terminates_on_growing_rules() {
        // jyu/ju and uu/u feed each other; the round cap must hold.
        let v = expand_variants("juuichimanjuu");
        assert!(v.contains("juuichimanjuu"));
        assert!(v.len() < 100_000);
    }
}
