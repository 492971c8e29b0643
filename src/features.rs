//! Feature deriver: attaches calendar and clock fields to parsed records.
//!
//! Derivation is a pure function of each record's [`Timestamp`], so running
//! it twice yields the same fields. Records with a missing date or clock are
//! kept; the missing half is left as `None` and the record's accessors report
//! `"unknown"` for the names that depend on it.
//!
//! # Example
//!
//! ```rust
//! use chatstat::features::derive;
//! use chatstat::parser::{Grammar, create_parser};
//!
//! let records = create_parser(Grammar::Line).parse_str("1/2/23, 3:04 PM - Alice: hello");
//! let records = derive(records);
//!
//! assert_eq!(records[0].hour(), Some(15));
//! assert_eq!(records[0].period(), "15-16");
//! assert_eq!(records[0].day_name(), "Monday");
//! ```

use chrono::{Datelike, Month, NaiveDate, NaiveTime, Timelike};

use crate::MessageRecord;
use crate::message::{CalendarFields, ClockFields, TimeFeatures, Timestamp};

/// Enriches every record, preserving order.
pub fn derive(records: Vec<MessageRecord>) -> Vec<MessageRecord> {
    let mut records = records;
    derive_in_place(&mut records);
    records
}

/// Enriches records without moving them.
pub fn derive_in_place(records: &mut [MessageRecord]) {
    let mut unknown = 0usize;
    for record in records.iter_mut() {
        let features = time_features(record.timestamp);
        if features.calendar.is_none() || features.clock.is_none() {
            unknown += 1;
        }
        record.features = Some(features);
    }
    tracing::debug!(records = records.len(), unknown, "derived time features");
}

/// Computes the derived fields for one timestamp.
pub fn time_features(timestamp: Timestamp) -> TimeFeatures {
    TimeFeatures {
        calendar: timestamp.date.map(calendar_fields),
        clock: timestamp.time.map(clock_fields),
    }
}

fn calendar_fields(date: NaiveDate) -> CalendarFields {
    CalendarFields {
        date,
        year: date.year(),
        month: month_name(date.month()).to_string(),
        month_num: date.month(),
        day: date.day(),
        day_name: weekday_name(date),
    }
}

fn clock_fields(time: NaiveTime) -> ClockFields {
    ClockFields {
        hour: time.hour(),
        minute: time.minute(),
        period: period_label(time.hour()),
    }
}

/// Hour-long activity window containing `hour`.
///
/// Midnight and the last hour keep the two-digit `00` form:
///
/// ```rust
/// use chatstat::features::period_label;
///
/// assert_eq!(period_label(0), "00-1");
/// assert_eq!(period_label(15), "15-16");
/// assert_eq!(period_label(23), "23-00");
/// ```
pub fn period_label(hour: u32) -> String {
    match hour {
        23 => "23-00".to_string(),
        0 => "00-1".to_string(),
        h => format!("{}-{}", h, h + 1),
    }
}

/// English name for a 1-based month number, `"unknown"` out of range.
pub fn month_name(month: u32) -> &'static str {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map_or(crate::message::UNKNOWN, |m| m.name())
}

/// Full English weekday name of `date`.
pub fn weekday_name(date: NaiveDate) -> String {
    date.format("%A").to_string()
}
