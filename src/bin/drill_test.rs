// Minimal test harness for the numeral converter
// Run with: cargo run --bin drill_test
// src/bin/drill_test.rs
use kazu_core::core::converter::convert;

fn main() {
    let test_cases: [i64; 24] = [
        0, 1, 4, 7, 9, 10, 14, 21, 68, 100, 101, 300, 600, 800, 1000, 3000, 8000,
        45_678, 1_000_000, 80_000_000, 100_000_000, 1_000_000_000_000,
        999_999_999_999_999, -1,
    ];
    for value in test_cases.iter() {
        let t = convert(*value);
        println!("{} => {} / {} / {}", value, t.kanji, t.hiragana, t.romaji);
    }
}
