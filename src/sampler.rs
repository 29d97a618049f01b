// src/sampler.rs
use crate::core::tables::MAGNITUDE_BANDS;
use crate::core::types::MAX_VALUE;
use rand::Rng;

/// Draws a uniform integer in `[min, max]` and snaps it to a realistic
/// magnitude-appropriate value. Bounds are clamped into the valid numeral
/// domain and swapped if inverted, so the result always converts.
pub fn sample(min: i64, max: i64) -> i64 {
    let min = min.clamp(0, MAX_VALUE);
    let max = max.clamp(0, MAX_VALUE);
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    let raw = rand::thread_rng().gen_range(lo..=hi);
    round_to_realistic(raw)
}

/// Convenience form over the whole numeral domain.
pub fn sample_full() -> i64 {
    sample(0, MAX_VALUE)
}

/// Rounds half-up to the granularity of the magnitude band containing
/// `value`. The band is chosen by the value's own magnitude, not by any
/// caller range. Out-of-domain input is clamped first; the top band can
/// round past the domain ceiling, so the result is clamped too.
pub fn round_to_realistic(value: i64) -> i64 {
    let value = value.clamp(0, MAX_VALUE);
    let granularity = MAGNITUDE_BANDS
        .iter()
        .find(|band| value >= band.lower && value < band.upper)
        .map(|band| band.granularity)
        .unwrap_or(1);
    let rounded = (value + granularity / 2) / granularity * granularity;
    rounded.clamp(0, MAX_VALUE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::converter::convert;

    #[test]
    fn small_band_is_unrounded() {
        for v in [0, 1, 17, 999] {
            assert_eq!(round_to_realistic(v), v);
        }
    }

    #[test]
    fn granularity_laws_per_band() {
        let cases = [
            (1_234, 100),
            (45_678, 500),
            (567_890, 1_000),
            (2_345_678, 10_000),
            (34_567_890, 50_000),
            (456_789_012, 100_000),
            (5_678_901_234, 1_000_000),
            (67_890_123_456, 5_000_000),
            (789_012_345_678, 10_000_000),
            (8_901_234_567_890, 100_000_000),
        ];
        for (v, g) in cases {
            assert_eq!(round_to_realistic(v) % g, 0, "value {}", v);
        }
    }

    #[test]
    fn rounds_half_up() {
        assert_eq!(round_to_realistic(1_250), 1_300);
        assert_eq!(round_to_realistic(1_249), 1_200);
        assert_eq!(round_to_realistic(10_250), 10_500);
        assert_eq!(round_to_realistic(10_249), 10_000);
    }

    #[test]
    fn rounding_can_cross_band_boundaries() {
        assert_eq!(round_to_realistic(9_999), 10_000);
        assert_eq!(round_to_realistic(99_999), 100_000);
    }

    #[test]
    fn top_edge_clamps_into_domain() {
        let r = round_to_realistic(MAX_VALUE - 1);
        assert!(r <= MAX_VALUE);
        assert_eq!(round_to_realistic(MAX_VALUE), MAX_VALUE);
    }

    #[test]
    fn sample_respects_domain_even_with_bad_bounds() {
        for _ in 0..200 {
            let r = sample(500, 20);
            assert!((0..=MAX_VALUE).contains(&r));
        }
        let r = sample(-50, MAX_VALUE + 7);
        assert!((0..=MAX_VALUE).contains(&r));
    }

    #[test]
    fn sampler_output_always_converts() {
        for _ in 0..500 {
            let r = sample_full();
            assert!((0..=MAX_VALUE).contains(&r));
            assert!(!convert(r).is_unknown());
        }
    }
}
