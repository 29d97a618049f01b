// src/core/converter.rs
use crate::core::tables::{self, MagnitudeUnit};
use crate::core::types::{NumeralTriple, MAX_VALUE};

/// Converts an integer to its kanji/hiragana/romaji triple.
///
/// Total over all of `i64`: out-of-domain values come back as the sentinel
/// triple, never a panic or a partial result. Callers check with
/// `NumeralTriple::is_unknown`.
pub fn convert(value: i64) -> NumeralTriple {
    if !(0..=MAX_VALUE).contains(&value) {
        return NumeralTriple::unknown(value);
    }
    if let Some(e) = tables::digit_band(value) {
        return NumeralTriple::new(value, e.kanji, e.hiragana, e.romaji);
    }
    if let Some(e) = tables::fixed_point(value) {
        return NumeralTriple::new(value, e.kanji, e.hiragana, e.romaji);
    }

    let (period, remainder) = if value < 100 {
        decompose_tens(value)
    } else {
        decompose_unit(value)
    };

    let period = match period {
        Some(p) => p,
        None => return NumeralTriple::unknown(value),
    };
    if remainder == 0 {
        return NumeralTriple::new(value, &period.0, &period.1, &period.2);
    }

    // Remainder periods concatenate directly, field by field, no connector.
    let rest = convert(remainder);
    if rest.is_unknown() {
        return NumeralTriple::unknown(value);
    }
    NumeralTriple::new(
        value,
        &format!("{}{}", period.0, rest.kanji),
        &format!("{}{}", period.1, rest.hiragana),
        &format!("{}{}", period.2, rest.romaji),
    )
}

type PeriodForm = (String, String, String);

/// 21..=99: the degenerate glyph-less tens band. The decade itself is
/// tabulated, the ones digit is the remainder.
fn decompose_tens(value: i64) -> (Option<PeriodForm>, i64) {
    let decade = (value / 10) * 10;
    let form = tables::digit_band(decade).map(|e| {
        (e.kanji.to_string(), e.hiragana.to_string(), e.romaji.to_string())
    });
    (form, value % 10)
}

/// 101 and up: take the most significant magnitude unit that fits.
fn decompose_unit(value: i64) -> (Option<PeriodForm>, i64) {
    for unit in tables::MAGNITUDE_UNITS.iter() {
        if value >= unit.scale {
            let leading = value / unit.scale;
            let remainder = value % unit.scale;
            return (period_form(leading, unit), remainder);
        }
    }
    (None, 0)
}

/// Reading of one period: leading count + the unit's own glyph/reading,
/// with the sound-change table consulted first.
fn period_form(leading: i64, unit: &MagnitudeUnit) -> Option<PeriodForm> {
    if let Some((hiragana, romaji)) = tables::sound_change(leading, unit.scale) {
        // Overrides only exist for single leading digits, so the kanji side
        // stays the regular digit + glyph concatenation.
        let digit = tables::digit_band(leading)?;
        return Some((
            format!("{}{}", digit.kanji, unit.kanji),
            hiragana.to_string(),
            romaji.to_string(),
        ));
    }
    if leading == 1 && !unit.speaks_leading_one {
        return Some((
            unit.kanji.to_string(),
            unit.hiragana.to_string(),
            unit.romaji.to_string(),
        ));
    }
    // 万 and above take a full sub-numeral as their count (e.g. 四万五千),
    // so the leading part recurses.
    let lead = convert(leading);
    if lead.is_unknown() {
        return None;
    }
    Some((
        format!("{}{}", lead.kanji, unit.kanji),
        format!("{}{}", lead.hiragana, unit.hiragana),
        format!("{}{}", lead.romaji, unit.romaji),
    ))
}
