//! Integration tests: files through parse, derive, filter and aggregate.

use chatstat::core::analytics::{self, LinkifyDetector, Selection, UnicodeEmojiTable};
use chatstat::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

const GROUP_CHAT: &str = "\
Messages and calls are end-to-end encrypted. Tap to learn more.
12/30/22, 11:58 PM - Alice created group \"Weekend\"
12/30/22, 11:59 PM - Alice: hello everyone 😀
12/31/22, 12:05 AM - Bob: hi! check https://example.com/plan
and bring snacks
1/1/23, 9:00 AM - Carol: <Media omitted>
1/1/23, 9:01 AM - Alice: happy new year 🎉🎉
1/2/23, 3:04 PM - Bob: the plan is the plan
1/2/23, 3:05 PM - Dave joined using this group's invite link
1/2/23, 3:06 PM - Alice: see rust-lang.org 😀
";

fn write_fixture(dir: &TempDir, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn load(grammar: Grammar) -> Vec<MessageRecord> {
    let dir = tempdir().unwrap();
    let path = write_fixture(&dir, "chat.txt", GROUP_CHAT.as_bytes());
    derive(create_parser(grammar).parse(&path).unwrap())
}

// =========================================================================
// Parsing from files
// =========================================================================

#[test]
fn test_line_grammar_from_file() {
    let records = load(Grammar::Line);

    // Preamble and the continuation line do not match.
    assert_eq!(records.len(), 8);
    assert!(records[0].sender().is_system());
    assert_eq!(records[2].body(), "hi! check https://example.com/plan");
    assert!(records[6].sender().is_system());
}

#[test]
fn test_span_grammar_from_file() {
    let records = load(Grammar::Span);

    assert_eq!(records.len(), 8);
    assert_eq!(
        records[2].body(),
        "hi! check https://example.com/plan\nand bring snacks"
    );
    assert_eq!(records[7].body(), "see rust-lang.org 😀");
}

#[test]
fn test_grammars_differ_only_in_multiline_bodies() {
    let line = load(Grammar::Line);
    let span = load(Grammar::Span);

    assert_eq!(line.len(), span.len());
    for (a, b) in line.iter().zip(&span) {
        assert_eq!(a.sender(), b.sender());
        assert_eq!(a.timestamp(), b.timestamp());
        assert!(b.body().starts_with(a.body()));
    }
}

#[test]
fn test_latin1_file_is_decoded() {
    let dir = tempdir().unwrap();
    let path = write_fixture(&dir, "latin1.txt", b"1/2/23, 3:04 PM - Jos\xe9: caf\xe9\n");

    let records = create_parser(Grammar::Line).parse(&path).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].sender().as_str(), "José");
    assert_eq!(records[0].body(), "café");
}

#[test]
fn test_missing_file_is_io_error() {
    let err = create_parser(Grammar::Line)
        .parse_file("/nonexistent/chat.txt")
        .unwrap_err();
    assert!(err.is_io());
}

// =========================================================================
// Derived fields
// =========================================================================

#[test]
fn test_year_boundary_and_periods() {
    let records = load(Grammar::Line);

    assert_eq!(records[1].year(), Some(2022));
    assert_eq!(records[1].period(), "23-00");
    assert_eq!(records[2].day_name(), "Saturday");
    assert_eq!(records[2].period(), "00-1");
    assert_eq!(records[5].period(), "15-16");
}

// =========================================================================
// Aggregation
// =========================================================================

#[test]
fn test_overall_summary() {
    let records = load(Grammar::Span);
    let stats = summary(&records, &Selection::Overall, MEDIA_PLACEHOLDER, &LinkifyDetector);

    assert_eq!(stats.messages, 8);
    assert_eq!(stats.media, 1);
    assert_eq!(stats.links, 2);
}

#[test]
fn test_most_active_and_shares() {
    let records = load(Grammar::Line);

    let top = most_active_users(&records, 5);
    assert_eq!(
        top,
        vec![
            ("Alice".to_string(), 3),
            ("Bob".to_string(), 2),
            ("Carol".to_string(), 1),
        ]
    );

    let shares = user_shares(&records);
    assert_eq!(shares[0], ("Alice".to_string(), 37.5));
    assert!(shares.iter().any(|(name, share)| name == "SYSTEM" && (*share - 25.0).abs() < 1e-9));
    let total: f64 = shares.iter().map(|(_, s)| s).sum();
    assert!((total - 100.0).abs() <= 0.01 * shares.len() as f64);
}

#[test]
fn test_timelines() {
    let records = load(Grammar::Line);

    let monthly = monthly_timeline(&records, &Selection::Overall);
    let labels: Vec<&str> = monthly.iter().map(|m| m.label.as_str()).collect();
    assert_eq!(labels, vec!["December-2022", "January-2023"]);
    assert_eq!(monthly[0].count, 3);
    assert_eq!(monthly[1].count, 5);

    let daily = daily_timeline(&records, &Selection::sender("Alice"));
    assert_eq!(daily.len(), 3);
    assert!(daily.windows(2).all(|w| w[0].date < w[1].date));
}

#[test]
fn test_vocabulary_with_bundled_stop_words() {
    let records = load(Grammar::Line);
    let stop_words = StopWords::bundled();

    let words = most_common_words(&records, &Selection::Overall, &stop_words, MEDIA_PLACEHOLDER, 20);
    // Emoji tokens count as words too; "😀" ties with "plan" and is seen first.
    assert_eq!(&words[..2], &[("😀".to_string(), 2), ("plan".to_string(), 2)]);
    for (word, _) in &words {
        assert!(!stop_words.contains(word));
        assert_ne!(word, "joined");
        assert_ne!(word, "<media");
    }
}

#[test]
fn test_emoji_frequency() {
    let records = load(Grammar::Line);
    let emojis = emoji_frequency(&records, &Selection::Overall, &UnicodeEmojiTable, true);
    assert_eq!(emojis, vec![("😀".to_string(), 2), ("🎉".to_string(), 2)]);
}

#[test]
fn test_out_of_range_filter_yields_zeros() {
    let records = load(Grammar::Line);
    let config = FilterConfig::new()
        .with_date_from("2030-01-01")
        .unwrap()
        .with_date_to("2030-12-31")
        .unwrap();
    let filtered = apply_filters(&records, &config);
    assert!(filtered.is_empty());

    let report = Report::build(
        &filtered,
        &Selection::Overall,
        &AnalysisConfig::default(),
        &StopWords::bundled(),
    );
    assert_eq!(report.summary.messages, 0);
    assert_eq!(report.summary.words, 0);
    assert_eq!(report.summary.media, 0);
    assert_eq!(report.summary.links, 0);
    assert!(report.most_active_users.is_empty());
    assert!(report.monthly_timeline.is_empty());
    assert!(report.heatmap.is_empty());
    assert!(report.common_words.is_empty());
    assert!(report.emojis.is_empty());
}

#[test]
fn test_sender_selection_matches_prefiltering() {
    let records = load(Grammar::Span);
    let selection = Selection::sender("Bob");
    let prefiltered = apply_filters(&records, &FilterConfig::new().with_sender("Bob"));

    assert_eq!(
        summary(&records, &selection, MEDIA_PLACEHOLDER, &LinkifyDetector),
        summary(&prefiltered, &Selection::Overall, MEDIA_PLACEHOLDER, &LinkifyDetector)
    );
    assert_eq!(
        analytics::activity_heatmap(&records, &selection),
        analytics::activity_heatmap(&prefiltered, &Selection::Overall)
    );
}

#[test]
fn test_senders_list() {
    let records = load(Grammar::Line);
    assert_eq!(senders(&records), vec!["Alice", "Bob", "Carol"]);
}

#[test]
fn test_queries_run_concurrently() {
    let records = load(Grammar::Span);
    let stop_words = StopWords::bundled();

    std::thread::scope(|s| {
        let a = s.spawn(|| most_active_users(&records, 5));
        let b = s.spawn(|| {
            most_common_words(&records, &Selection::Overall, &stop_words, MEDIA_PLACEHOLDER, 20)
        });
        let c = s.spawn(|| activity_heatmap(&records, &Selection::Overall));
        assert!(!a.join().unwrap().is_empty());
        assert!(!b.join().unwrap().is_empty());
        assert!(!c.join().unwrap().is_empty());
    });
}

// =========================================================================
// Export
// =========================================================================

#[test]
fn test_export_every_format() {
    let records = load(Grammar::Span);
    let dir = tempdir().unwrap();

    for format in OutputFormat::all() {
        let path = dir.path().join(format!("out.{}", format.extension()));
        chatstat::format::write_to_format(&records, &path, *format).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("and bring snacks"), "{format} export lost a body");
    }
}
