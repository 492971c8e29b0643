//! Synthetic transcript generator for stress testing chatstat.
//!
//! Usage: cargo run --features gen-test --bin gen_transcript -- [messages] [output] [grammar]
//! Example: cargo run --features gen-test --bin gen_transcript -- 100000 heavy_chat.txt span

use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process;
use std::time::Instant;

use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};
use rand::Rng;
use rand::seq::SliceRandom;

const EMOJIS: &[&str] = &["😀", "😂", "😍", "🤔", "🔥", "👍", "🎉", "💀", "🙏", "😭"];

const SENDERS: &[&str] = &[
    "Alice",
    "Bob",
    "Carol Danvers",
    "+1 555 0100",
    "Иван",
    "村上",
    "محمد",
    "🔥FireUser🔥",
];

const WORDS: &[&str] = &[
    "hello", "kal", "milte", "hai", "meeting", "tomorrow", "the", "project", "yaar", "lunch",
    "done", "please", "check", "bhai", "okay", "nahi", "call", "later", "photo", "weekend",
];

const LINKS: &[&str] = &[
    "https://example.com/docs",
    "www.rust-lang.org",
    "github.com/rust-lang/rust",
];

const NOTICES: &[&str] = &[
    "Messages and calls are end-to-end encrypted.",
    "Alice added Bob",
    "Carol Danvers left",
    "Bob changed this group's icon",
];

const MEDIA_PLACEHOLDER: &str = "<Media omitted>";

fn main() {
    let args: Vec<String> = env::args().collect();

    let count: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(100_000);
    let output = args.get(2).map_or("heavy_chat.txt", String::as_str);
    let grammar = args.get(3).map_or("line", String::as_str);

    let span = match grammar {
        "line" | "a" => false,
        "span" | "b" => true,
        _ => {
            eprintln!("Unknown grammar: {grammar}. Use 'line' or 'span'");
            process::exit(1);
        }
    };

    println!("Synthetic transcript generator");
    println!("   Messages: {count}");
    println!("   Output:   {output}");
    println!("   Grammar:  {grammar}");
    println!();

    if let Err(e) = generate(count, output, span) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn generate(count: usize, output: &str, span: bool) -> io::Result<()> {
    let file = File::create(output)?;
    let mut writer = BufWriter::with_capacity(1024 * 1024, file);

    let mut rng = rand::thread_rng();
    let start = Instant::now();
    let mut bytes_written: usize = 0;

    let mut clock = NaiveDate::from_ymd_opt(2022, 12, 30)
        .and_then(|d| d.and_hms_opt(22, 0, 0))
        .expect("start timestamp is valid");

    for i in 0..count {
        clock += Duration::minutes(rng.gen_range(1..=240));

        let line = if rng.gen_ratio(1, 25) {
            format!("{} - {}\n", header(clock, span, &mut rng), pick(NOTICES, &mut rng))
        } else {
            let sender = pick(SENDERS, &mut rng);
            let body = generate_body(&mut rng, span);
            format!("{} - {}: {}\n", header(clock, span, &mut rng), sender, body)
        };

        bytes_written += line.len();
        writer.write_all(line.as_bytes())?;

        // Lines outside the grammar; line mode drops them, span mode folds them in.
        if i % 1000 == 500 {
            let garbage = "this line has no timestamp\n";
            bytes_written += garbage.len();
            writer.write_all(garbage.as_bytes())?;
        }

        if (i + 1) % 10_000 == 0 {
            let elapsed = start.elapsed().as_secs_f64();
            eprint!(
                "\r   Generated {}/{} ({:.1} MB, {:.0} msg/s)",
                i + 1,
                count,
                bytes_written as f64 / 1_000_000.0,
                (i + 1) as f64 / elapsed
            );
        }
    }

    writer.flush()?;

    let elapsed = start.elapsed();
    println!("\n\nDone!");
    println!("   Size: {:.2} MB", bytes_written as f64 / 1_000_000.0);
    println!("   Time: {:.2}s", elapsed.as_secs_f64());
    Ok(())
}

/// `M/D/YY, H:MM AM`; line mode sometimes omits the marker.
fn header(at: NaiveDateTime, span: bool, rng: &mut impl Rng) -> String {
    let date = at.format("%-m/%-d/%y");
    let (is_pm, hour12) = at.hour12();
    let meridiem = if is_pm { "PM" } else { "AM" };

    if !span && !is_pm && rng.gen_ratio(1, 10) {
        format!("{date}, {hour12}:{:02}", at.minute())
    } else {
        format!("{date}, {hour12}:{:02} {meridiem}", at.minute())
    }
}

fn generate_body(rng: &mut impl Rng, span: bool) -> String {
    match rng.gen_range(0..100) {
        0..=9 => MEDIA_PLACEHOLDER.to_string(),
        10..=14 => format!("look {}", pick(LINKS, rng)),
        15..=24 => {
            let repeats = rng.gen_range(1..4);
            format!("{} {}", sentence(rng, 3), pick(EMOJIS, rng).repeat(repeats))
        }
        25..=32 if span => format!("{}\n{}\n{}", sentence(rng, 4), sentence(rng, 3), sentence(rng, 2)),
        _ => {
            let words = rng.gen_range(1..12);
            sentence(rng, words)
        }
    }
}

fn sentence(rng: &mut impl Rng, words: usize) -> String {
    (0..words)
        .map(|_| pick(WORDS, rng))
        .collect::<Vec<_>>()
        .join(" ")
}

fn pick<'a>(items: &[&'a str], rng: &mut impl Rng) -> &'a str {
    items.choose(rng).copied().unwrap_or_default()
}
