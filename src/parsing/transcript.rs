//! Shared transcript grammar: patterns and timestamp parsing.
//!
//! Both parsers recognise the same timestamp shape, `M/D/YY, H:MM AM - `,
//! but differ in how strictly they treat the AM/PM marker and in what they
//! consider one message. The patterns live here so the two strategies
//! cannot drift apart on the date and clock syntax.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;

use crate::message::{Sender, Timestamp};

/// Line-anchored pattern: `DATE, TIME[ AM|PM] - [SENDER: ]BODY`.
///
/// Groups: 1 date, 2 clock, 3 meridiem (optional), 4 sender (optional), 5 body.
pub const LINE_PATTERN: &str =
    r"^(\d{1,2}/\d{1,2}/\d{2,4}), (\d{1,2}:\d{2})\s?(AM|PM|am|pm)? - (?:(.*?): )?(.*)";

/// Timestamp header used to split a whole transcript into spans.
/// The meridiem is mandatory here.
///
/// Groups: 1 date, 2 clock, 3 meridiem.
pub const SPAN_HEADER_PATTERN: &str =
    r"(\d{1,2}/\d{1,2}/\d{2,4}),\s(\d{1,2}:\d{2})\s(AM|PM|am|pm)\s-\s";

/// Sender prefix inside a span; must sit on the span's first line.
///
/// The separator after the colon is horizontal whitespace only, so a first
/// line that merely ends in `:` does not name a sender.
pub const SPAN_SENDER_PATTERN: &str = r"^([^\n]+?):[^\S\n]";

/// Meridiem assumed when the line-anchored grammar finds none.
pub const DEFAULT_MERIDIEM: &str = "AM";

pub(crate) static LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(LINE_PATTERN).expect("line pattern is valid"));

pub(crate) static SPAN_HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SPAN_HEADER_PATTERN).expect("span header pattern is valid"));

pub(crate) static SPAN_SENDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SPAN_SENDER_PATTERN).expect("span sender pattern is valid"));

/// Parses a month-first date such as `1/2/23` or `12/31/2024`.
///
/// A two-digit year is read as `%y` (pivoting into 1970-2069), anything
/// else as a full year.
pub fn parse_date(date_str: &str) -> Option<NaiveDate> {
    let year_width = date_str.rsplit('/').next().map_or(0, str::len);
    let format = if year_width == 2 { "%m/%d/%y" } else { "%m/%d/%Y" };
    NaiveDate::parse_from_str(date_str, format).ok()
}

/// Parses a 12-hour clock reading with its meridiem marker.
///
/// A missing marker falls back to [`DEFAULT_MERIDIEM`]. Readings outside
/// 1-12 (24-hour exports) do not parse and yield `None`.
pub fn parse_clock(clock: &str, meridiem: Option<&str>) -> Option<NaiveTime> {
    let meridiem = meridiem.unwrap_or(DEFAULT_MERIDIEM);
    NaiveTime::parse_from_str(&format!("{clock} {meridiem}"), "%I:%M %p").ok()
}

/// Builds a [`Timestamp`] from captured date, clock and meridiem text.
pub fn parse_timestamp(date_str: &str, clock: &str, meridiem: Option<&str>) -> Timestamp {
    Timestamp::new(parse_date(date_str), parse_clock(clock, meridiem))
}

/// Maps an optional captured sender name onto [`Sender`].
pub fn sender_from_capture(name: Option<&str>) -> Sender {
    match name {
        Some(name) => Sender::user(name),
        None => Sender::System,
    }
}

/// Strips one trailing line terminator (`\n` or `\r\n`).
pub fn trim_line_ending(text: &str) -> &str {
    let text = text.strip_suffix('\n').unwrap_or(text);
    text.strip_suffix('\r').unwrap_or(text)
}
