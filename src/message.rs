//! Typed record model for parsed transcripts.
//!
//! A [`MessageRecord`] is created once by a parser (timestamp, sender, body),
//! enriched once by [`derive`](crate::features::derive) with calendar and
//! clock fields, and is read-only afterwards.
//!
//! # Examples
//!
//! ```
//! use chatstat::{MessageRecord, Sender, Timestamp};
//! use chrono::{NaiveDate, NaiveTime};
//!
//! let ts = Timestamp::new(
//!     NaiveDate::from_ymd_opt(2023, 1, 2),
//!     NaiveTime::from_hms_opt(15, 4, 0),
//! );
//! let record = MessageRecord::new(ts, Sender::user("Alice"), "hello");
//!
//! assert_eq!(record.sender().as_str(), "Alice");
//! assert_eq!(record.body(), "hello");
//! // Derived fields are not populated until the feature deriver runs
//! assert_eq!(record.period(), "unknown");
//! ```

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Sentinel sender name for chat events that carry no `name: ` prefix.
pub const SYSTEM_SENDER: &str = "SYSTEM";

/// Placeholder rendered for derived fields that could not be computed.
pub const UNKNOWN: &str = "unknown";

/// Author of a record.
///
/// Serializes as a plain string; [`Sender::System`] renders as `"SYSTEM"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Sender {
    /// A chat participant identified by display name.
    User(String),
    /// Non-user notification (joins, leaves, encryption notices).
    System,
}

impl Sender {
    /// Creates a user sender.
    pub fn user(name: impl Into<String>) -> Self {
        Sender::User(name.into())
    }

    /// Returns the display name, or `"SYSTEM"` for system notifications.
    pub fn as_str(&self) -> &str {
        match self {
            Sender::User(name) => name,
            Sender::System => SYSTEM_SENDER,
        }
    }

    /// Returns `true` for the system sentinel.
    pub fn is_system(&self) -> bool {
        matches!(self, Sender::System)
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Sender {
    fn from(name: String) -> Self {
        if name == SYSTEM_SENDER {
            Sender::System
        } else {
            Sender::User(name)
        }
    }
}

impl From<Sender> for String {
    fn from(sender: Sender) -> Self {
        match sender {
            Sender::User(name) => name,
            Sender::System => SYSTEM_SENDER.to_string(),
        }
    }
}

/// Date and time-of-day as written in the transcript.
///
/// The two halves parse independently: a malformed clock leaves `time`
/// empty while the calendar date stays usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Timestamp {
    /// Calendar date, if it parsed.
    pub date: Option<NaiveDate>,
    /// Time of day, if it parsed.
    pub time: Option<NaiveTime>,
}

impl Timestamp {
    /// Creates a timestamp from independently parsed halves.
    pub fn new(date: Option<NaiveDate>, time: Option<NaiveTime>) -> Self {
        Self { date, time }
    }

    /// A timestamp where neither half parsed.
    pub fn invalid() -> Self {
        Self::default()
    }

    /// Returns `true` if both date and time parsed.
    pub fn is_valid(&self) -> bool {
        self.date.is_some() && self.time.is_some()
    }

    /// Combined date-time, when both halves are present.
    pub fn datetime(&self) -> Option<NaiveDateTime> {
        Some(self.date?.and_time(self.time?))
    }
}

/// Calendar fields derived from a record's date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarFields {
    pub date: NaiveDate,
    pub year: i32,
    /// English month name, e.g. `"January"`.
    pub month: String,
    /// 1-12
    pub month_num: u32,
    pub day: u32,
    /// English weekday name, e.g. `"Monday"`.
    pub day_name: String,
}

/// Clock fields derived from a record's time of day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockFields {
    /// 0-23
    pub hour: u32,
    pub minute: u32,
    /// Hour-long activity window, e.g. `"15-16"`.
    pub period: String,
}

/// Everything the feature deriver attaches to a record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimeFeatures {
    pub calendar: Option<CalendarFields>,
    pub clock: Option<ClockFields>,
}

/// One parsed message or system notification.
///
/// | Field | Populated by | Notes |
/// |-------|--------------|-------|
/// | `timestamp` | parser | halves may be missing |
/// | `sender` | parser | [`Sender::System`] iff no `name: ` prefix |
/// | `body` | parser | one logical message |
/// | `features` | deriver | `None` until derived |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    pub timestamp: Timestamp,
    pub sender: Sender,
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<TimeFeatures>,
}

impl MessageRecord {
    /// Creates an un-enriched record.
    pub fn new(timestamp: Timestamp, sender: Sender, body: impl Into<String>) -> Self {
        Self {
            timestamp,
            sender,
            body: body.into(),
            features: None,
        }
    }

    // =========================================================================
    // Accessor methods
    // =========================================================================

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    pub fn sender(&self) -> &Sender {
        &self.sender
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns `true` once the feature deriver has run on this record.
    pub fn is_derived(&self) -> bool {
        self.features.is_some()
    }

    pub fn calendar(&self) -> Option<&CalendarFields> {
        self.features.as_ref()?.calendar.as_ref()
    }

    pub fn clock(&self) -> Option<&ClockFields> {
        self.features.as_ref()?.clock.as_ref()
    }

    /// Calendar date without time.
    pub fn only_date(&self) -> Option<NaiveDate> {
        self.calendar().map(|c| c.date)
    }

    pub fn year(&self) -> Option<i32> {
        self.calendar().map(|c| c.year)
    }

    pub fn month_num(&self) -> Option<u32> {
        self.calendar().map(|c| c.month_num)
    }

    /// Month name, or `"unknown"`.
    pub fn month_name(&self) -> &str {
        self.calendar().map_or(UNKNOWN, |c| c.month.as_str())
    }

    pub fn day(&self) -> Option<u32> {
        self.calendar().map(|c| c.day)
    }

    /// Weekday name, or `"unknown"`.
    pub fn day_name(&self) -> &str {
        self.calendar().map_or(UNKNOWN, |c| c.day_name.as_str())
    }

    pub fn hour(&self) -> Option<u32> {
        self.clock().map(|c| c.hour)
    }

    pub fn minute(&self) -> Option<u32> {
        self.clock().map(|c| c.minute)
    }

    /// Activity window label, or `"unknown"`.
    pub fn period(&self) -> &str {
        self.clock().map_or(UNKNOWN, |c| c.period.as_str())
    }

    // =========================================================================
    // Utility methods
    // =========================================================================

    /// Number of whitespace-separated tokens in the body.
    pub fn word_count(&self) -> usize {
        self.body.split_whitespace().count()
    }

    /// Returns `true` if the body is exactly the given media placeholder.
    pub fn is_media(&self, placeholder: &str) -> bool {
        self.body == placeholder
    }
}
