//! Span-based transcript parser (grammar B).
//!
//! The whole transcript is split on timestamp headers
//! (`DATE, TIME AM|PM - `, meridiem mandatory). Everything from one header
//! to the next is one message, so embedded newlines survive. Text before
//! the first header has no timestamp and is discarded.
//!
//! Inside a span the first `name: ` on the first line separates sender from
//! body; a span without one is a [`Sender::System`] notification.

use std::iter::Peekable;

use regex::CaptureMatches;

use crate::MessageRecord;
use crate::message::Sender;
use crate::parser::{Grammar, Parser, RecordIter};
use crate::parsing::transcript::{SPAN_HEADER_RE, SPAN_SENDER_RE, parse_timestamp, trim_line_ending};

/// Parser for grammar B.
///
/// # Example
///
/// ```rust
/// use chatstat::parsers::SpanParser;
/// use chatstat::parser::Parser;
///
/// let text = "1/2/23, 3:04 PM - Alice: first line\nsecond line\n";
/// let records = SpanParser::new().parse_str(text);
///
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].body(), "first line\nsecond line");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SpanParser;

impl SpanParser {
    /// Creates a new parser.
    pub fn new() -> Self {
        Self
    }
}

/// Iterator over the spans of one transcript.
struct Spans<'a> {
    text: &'a str,
    headers: Peekable<CaptureMatches<'static, 'a>>,
}

impl<'a> Spans<'a> {
    fn new(text: &'a str) -> Self {
        let headers = SPAN_HEADER_RE.captures_iter(text).peekable();
        Self { text, headers }
    }
}

impl Iterator for Spans<'_> {
    type Item = MessageRecord;

    fn next(&mut self) -> Option<Self::Item> {
        let caps = self.headers.next()?;
        let header = caps.get(0)?;

        let span_end = self
            .headers
            .peek()
            .and_then(|next| next.get(0))
            .map_or(self.text.len(), |m| m.start());
        let span = &self.text[header.end()..span_end];

        let date_str = caps.get(1).map_or("", |m| m.as_str());
        let clock = caps.get(2).map_or("", |m| m.as_str());
        let meridiem = caps.get(3).map(|m| m.as_str());
        let timestamp = parse_timestamp(date_str, clock, meridiem);
        if !timestamp.is_valid() {
            tracing::debug!(date = date_str, clock, "unparsable timestamp kept as unknown");
        }

        let (sender, body) = split_sender(span);
        Some(MessageRecord::new(timestamp, sender, trim_line_ending(body)))
    }
}

/// Splits a span into sender and body on the first `name: ` prefix.
fn split_sender(span: &str) -> (Sender, &str) {
    match SPAN_SENDER_RE.captures(span) {
        Some(caps) => {
            let name = caps.get(1).map_or("", |m| m.as_str());
            let rest = caps.get(0).map_or(span, |m| &span[m.end()..]);
            (Sender::user(name), rest)
        }
        None => (Sender::System, span),
    }
}

impl Parser for SpanParser {
    fn name(&self) -> &'static str {
        "Span"
    }

    fn grammar(&self) -> Grammar {
        Grammar::Span
    }

    fn records<'a>(&'a self, text: &'a str) -> RecordIter<'a> {
        Box::new(Spans::new(text))
    }
}
