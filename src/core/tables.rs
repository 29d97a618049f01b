// src/core/tables.rs
//
// All irregularities of the numeral grammar live here as data. The converter
// consults these tables and never hard-codes a pronunciation.

/// One row of static lookup data: the three renderings of a tabulated form.
#[derive(Debug, Clone, Copy)]
pub struct DigitEntry {
    pub kanji: &'static str,
    pub hiragana: &'static str,
    pub romaji: &'static str,
}

const fn entry(kanji: &'static str, hiragana: &'static str, romaji: &'static str) -> DigitEntry {
    DigitEntry { kanji, hiragana, romaji }
}

/// Every value with a direct table entry: 0-20, the decades, and 100.
/// Collaborators that present a fixed practice set iterate this instead of
/// sampling.
pub const TABULATED_VALUES: [i64; 29] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20,
    30, 40, 50, 60, 70, 80, 90, 100,
];

/// Base case of the recursion. Canonical readings use the counting forms
/// (yon, nana, kyuu); the other culturally-valid readings are accept-only
/// and live in `alternate_readings`.
pub fn digit_band(value: i64) -> Option<DigitEntry> {
    let e = match value {
        0 => entry("零", "れい", "rei"),
        1 => entry("一", "いち", "ichi"),
        2 => entry("二", "に", "ni"),
        3 => entry("三", "さん", "san"),
        4 => entry("四", "よん", "yon"),
        5 => entry("五", "ご", "go"),
        6 => entry("六", "ろく", "roku"),
        7 => entry("七", "なな", "nana"),
        8 => entry("八", "はち", "hachi"),
        9 => entry("九", "きゅう", "kyuu"),
        10 => entry("十", "じゅう", "juu"),
        11 => entry("十一", "じゅういち", "juuichi"),
        12 => entry("十二", "じゅうに", "juuni"),
        13 => entry("十三", "じゅうさん", "juusan"),
        14 => entry("十四", "じゅうよん", "juuyon"),
        15 => entry("十五", "じゅうご", "juugo"),
        16 => entry("十六", "じゅうろく", "juuroku"),
        17 => entry("十七", "じゅうなな", "juunana"),
        18 => entry("十八", "じゅうはち", "juuhachi"),
        19 => entry("十九", "じゅうきゅう", "juukyuu"),
        20 => entry("二十", "にじゅう", "nijuu"),
        30 => entry("三十", "さんじゅう", "sanjuu"),
        40 => entry("四十", "よんじゅう", "yonjuu"),
        50 => entry("五十", "ごじゅう", "gojuu"),
        60 => entry("六十", "ろくじゅう", "rokujuu"),
        70 => entry("七十", "ななじゅう", "nanajuu"),
        80 => entry("八十", "はちじゅう", "hachijuu"),
        90 => entry("九十", "きゅうじゅう", "kyuujuu"),
        100 => entry("百", "ひゃく", "hyaku"),
        _ => return None,
    };
    Some(e)
}

/// Second readings for the two-reading entries. Never emitted as canonical
/// output; the matcher accepts them on input. (hiragana, romaji) pairs.
pub fn alternate_readings(value: i64) -> &'static [(&'static str, &'static str)] {
    match value {
        4 => &[("し", "shi")],
        7 => &[("しち", "shichi")],
        9 => &[("く", "ku")],
        14 => &[("じゅうし", "juushi")],
        17 => &[("じゅうしち", "juushichi")],
        19 => &[("じゅうく", "juuku")],
        70 => &[("しちじゅう", "shichijuu")],
        _ => &[],
    }
}

/// A recursive grouping unit. Large numbers group in base-10,000 periods, so
/// the scales above 千 step by 10^4, not 10^3.
#[derive(Debug, Clone, Copy)]
pub struct MagnitudeUnit {
    pub scale: i64,
    pub kanji: &'static str,
    pub hiragana: &'static str,
    pub romaji: &'static str,
    /// Whether a leading 1 is spoken (一万 ichiman) or elided (千 sen).
    pub speaks_leading_one: bool,
}

/// Descending order; the converter takes the first unit whose scale fits.
/// The tens band has no glyph of its own and is handled by the converter
/// through the tabulated decades.
pub const MAGNITUDE_UNITS: [MagnitudeUnit; 5] = [
    MagnitudeUnit { scale: 1_000_000_000_000, kanji: "兆", hiragana: "ちょう", romaji: "chou", speaks_leading_one: true },
    MagnitudeUnit { scale: 100_000_000, kanji: "億", hiragana: "おく", romaji: "oku", speaks_leading_one: true },
    MagnitudeUnit { scale: 10_000, kanji: "万", hiragana: "まん", romaji: "man", speaks_leading_one: true },
    MagnitudeUnit { scale: 1_000, kanji: "千", hiragana: "せん", romaji: "sen", speaks_leading_one: false },
    MagnitudeUnit { scale: 100, kanji: "百", hiragana: "ひゃく", romaji: "hyaku", speaks_leading_one: false },
];

/// Irregular pronunciation overrides for (leading digit, unit scale).
/// The override replaces the whole digit+unit reading; kanji stays regular.
pub fn sound_change(digit: i64, unit_scale: i64) -> Option<(&'static str, &'static str)> {
    match (digit, unit_scale) {
        (3, 100) => Some(("さんびゃく", "sanbyaku")),
        (6, 100) => Some(("ろっぴゃく", "roppyaku")),
        (8, 100) => Some(("はっぴゃく", "happyaku")),
        (3, 1_000) => Some(("さんぜん", "sanzen")),
        (8, 1_000) => Some(("はっせん", "hassen")),
        _ => None,
    }
}

/// Standalone irregular forms that bypass the generic decomposition: the
/// leading-one marker is elided at exactly these values.
pub fn fixed_point(value: i64) -> Option<DigitEntry> {
    match value {
        1_000_000 => Some(entry("百万", "ひゃくまん", "hyakuman")),
        1_000_000_000_000 => Some(entry("兆", "ちょう", "chou")),
        _ => None,
    }
}

/// Rounding coarseness per magnitude, used only by the sampler.
#[derive(Debug, Clone, Copy)]
pub struct MagnitudeBand {
    /// Inclusive lower bound.
    pub lower: i64,
    /// Exclusive upper bound.
    pub upper: i64,
    pub granularity: i64,
}

pub const MAGNITUDE_BANDS: [MagnitudeBand; 11] = [
    MagnitudeBand { lower: 0, upper: 1_000, granularity: 1 },
    MagnitudeBand { lower: 1_000, upper: 10_000, granularity: 100 },
    MagnitudeBand { lower: 10_000, upper: 100_000, granularity: 500 },
    MagnitudeBand { lower: 100_000, upper: 1_000_000, granularity: 1_000 },
    MagnitudeBand { lower: 1_000_000, upper: 10_000_000, granularity: 10_000 },
    MagnitudeBand { lower: 10_000_000, upper: 100_000_000, granularity: 50_000 },
    MagnitudeBand { lower: 100_000_000, upper: 1_000_000_000, granularity: 100_000 },
    MagnitudeBand { lower: 1_000_000_000, upper: 10_000_000_000, granularity: 1_000_000 },
    MagnitudeBand { lower: 10_000_000_000, upper: 100_000_000_000, granularity: 5_000_000 },
    MagnitudeBand { lower: 100_000_000_000, upper: 1_000_000_000_000, granularity: 10_000_000 },
    MagnitudeBand { lower: 1_000_000_000_000, upper: i64::MAX, granularity: 100_000_000 },
];
