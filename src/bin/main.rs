use crossterm::style::Stylize;
use kazu_core::{NumeralEngine, NumeralTriple};
use std::io::{stdin, stdout, Write};

const RANGES: [(&str, i64, i64); 4] = [
    ("up to 100", 0, 100),
    ("up to 10,000", 0, 10_000),
    ("up to 1,000,000", 0, 1_000_000),
    ("full range", 0, 999_999_999_999_999),
];

fn main() {
    let engine = NumeralEngine::new();
    let mut range = RANGES[1];
    let mut question = engine.convert(engine.sample(range.1, range.2));
    let mut streak: u32 = 0;

    println!("Kazu Drill. Read the number, type the reading. 'exit' to quit.");
    println!("---------------------------------------------------------------");

    loop {
        print_question(&question, range.0, streak);

        let mut input = String::new();
        if stdin().read_line(&mut input).is_err() {
            break;
        }
        let answer = input.trim();

        match answer {
            "exit" => break,
            "" => {
                // Enter on an empty line reveals the answer and moves on.
                println!("\n{}", reveal(&question));
                streak = 0;
                question = engine.convert(engine.sample(range.1, range.2));
            }
            s if s.starts_with(':') && s.len() > 1 => {
                // Difficulty selection :1 to :4
                if let Ok(n) = s[1..].parse::<usize>() {
                    if n > 0 && n <= RANGES.len() {
                        range = RANGES[n - 1];
                        question = engine.convert(engine.sample(range.1, range.2));
                    }
                }
            }
            s => {
                if engine.is_match(s, &question) {
                    streak += 1;
                    println!("\n{} {}", "Correct!".green().bold(), reveal(&question));
                    question = engine.convert(engine.sample(range.1, range.2));
                } else {
                    streak = 0;
                    println!("\n{} Try again, or press Enter to reveal.", "Not quite.".red());
                }
            }
        }
    }

    println!("\nBye.");
}

fn reveal(t: &NumeralTriple) -> String {
    format!("{} = {} / {} / {}", t.value, t.kanji, t.hiragana, t.romaji)
}

fn print_question(question: &NumeralTriple, range_name: &str, streak: u32) {
    println!("\nRange: {}   Streak: {}", range_name, streak);
    println!("Switch range with ':1'..':4'. Enter reveals, 'exit' quits.");
    println!("\nRead this number: {}", question.kanji.as_str().bold());
    print!("> ");
    let _ = stdout().flush();
}
