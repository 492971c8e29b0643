//! Line-anchored transcript parser (grammar A).
//!
//! Every physical line is matched on its own against
//! `DATE, TIME[ AM|PM] - [SENDER: ]BODY`:
//!
//! - a missing AM/PM marker defaults to AM
//! - a line without a `name: ` prefix becomes a [`Sender::System`] record
//! - a line that does not match is dropped, so continuation lines of a
//!   multi-line message are lost and the body keeps only its first line

use crate::MessageRecord;
use crate::message::Sender;
use crate::parser::{Grammar, Parser, RecordIter};
use crate::parsing::transcript::{LINE_RE, parse_timestamp, sender_from_capture};

/// Parser for grammar A.
///
/// # Example
///
/// ```rust
/// use chatstat::parsers::LineParser;
/// use chatstat::parser::Parser;
///
/// let text = "1/2/23, 3:04 PM - Alice: first line\nsecond line";
/// let records = LineParser::new().parse_str(text);
///
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].body(), "first line");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LineParser;

impl LineParser {
    /// Creates a new parser.
    pub fn new() -> Self {
        Self
    }
}

/// Matches one physical line, returning `None` if it is not a message line.
fn parse_line(line: &str) -> Option<MessageRecord> {
    let Some(caps) = LINE_RE.captures(line) else {
        if !line.trim().is_empty() {
            tracing::trace!(line, "dropping line outside transcript grammar");
        }
        return None;
    };

    let date_str = caps.get(1).map_or("", |m| m.as_str());
    let clock = caps.get(2).map_or("", |m| m.as_str());
    let meridiem = caps.get(3).map(|m| m.as_str());
    let sender: Sender = sender_from_capture(caps.get(4).map(|m| m.as_str()));
    let body = caps.get(5).map_or("", |m| m.as_str());

    let timestamp = parse_timestamp(date_str, clock, meridiem);
    if !timestamp.is_valid() {
        tracing::debug!(date = date_str, clock, "unparsable timestamp kept as unknown");
    }

    Some(MessageRecord::new(timestamp, sender, body))
}

impl Parser for LineParser {
    fn name(&self) -> &'static str {
        "Line"
    }

    fn grammar(&self) -> Grammar {
        Grammar::Line
    }

    fn records<'a>(&'a self, text: &'a str) -> RecordIter<'a> {
        Box::new(text.lines().filter_map(parse_line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_parser_name() {
        assert_eq!(LineParser::new().name(), "Line");
        assert_eq!(LineParser::new().grammar(), Grammar::Line);
    }

    #[test]
    fn test_single_well_formed_line() {
        let records = LineParser::new().parse_str("1/2/23, 3:04 PM - Alice: hello");
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert_eq!(record.sender(), &Sender::user("Alice"));
        assert_eq!(record.body(), "hello");
        assert_eq!(record.timestamp().date, NaiveDate::from_ymd_opt(2023, 1, 2));
        assert!(record.timestamp().is_valid());
        assert!(!record.is_derived());
    }

    #[test]
    fn test_missing_meridiem_defaults_to_am() {
        let records = LineParser::new().parse_str("1/2/23, 3:04 - Alice: hello");
        let time = records[0].timestamp().time.unwrap();
        assert_eq!(time.format("%H:%M").to_string(), "03:04");
    }

    #[test]
    fn test_notification_without_prefix_is_system() {
        let records = LineParser::new().parse_str("1/2/23, 3:04 PM - Bob joined using this group's invite link");
        assert_eq!(records.len(), 1);
        assert!(records[0].sender().is_system());
        assert_eq!(records[0].body(), "Bob joined using this group's invite link");
    }

    #[test]
    fn test_continuation_lines_are_dropped() {
        let text = "1/2/23, 3:04 PM - Alice: line one\nline two\nline three\n1/2/23, 3:05 PM - Bob: ok";
        let records = LineParser::new().parse_str(text);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].body(), "line one");
        assert_eq!(records[1].body(), "ok");
    }

    #[test]
    fn test_unparsable_date_is_kept() {
        let records = LineParser::new().parse_str("13/45/23, 3:04 PM - Alice: hello");
        assert_eq!(records.len(), 1);
        assert!(records[0].timestamp().date.is_none());
        assert!(records[0].timestamp().time.is_some());
    }

    #[test]
    fn test_crlf_line_endings() {
        let text = "1/2/23, 3:04 PM - Alice: hello\r\n1/2/23, 3:05 PM - Bob: hi\r\n";
        let records = LineParser::new().parse_str(text);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].body(), "hello");
    }

    #[test]
    fn test_empty_and_garbage_input() {
        assert!(LineParser::new().parse_str("").is_empty());
        assert!(LineParser::new().parse_str("no timestamps here\nat all").is_empty());
    }
}
