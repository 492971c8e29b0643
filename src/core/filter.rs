//! Filter records by sender and date range.
//!
//! This module provides [`FilterConfig`] for defining filter criteria and
//! [`apply_filters`] for narrowing a record table.
//!
//! # Filter Types
//!
//! | Filter | Method | Description |
//! |--------|--------|-------------|
//! | Date from | [`with_date_from`](FilterConfig::with_date_from) | Records on or after date |
//! | Date to | [`with_date_to`](FilterConfig::with_date_to) | Records on or before date |
//! | Sender | [`with_sender`](FilterConfig::with_sender) | Records from one sender |
//!
//! # Examples
//!
//! ```
//! use chatstat::core::filter::{FilterConfig, apply_filters};
//! use chatstat::parser::{Grammar, create_parser};
//!
//! # fn main() -> chatstat::Result<()> {
//! let text = "1/2/23, 3:04 PM - Alice: old\n6/15/24, 9:00 AM - Alice: new\n6/15/24, 9:01 AM - Bob: hi";
//! let records = create_parser(Grammar::Line).parse_str(text);
//!
//! let config = FilterConfig::new()
//!     .with_sender("Alice")
//!     .with_date_from("2024-06-01")?;
//!
//! let filtered = apply_filters(&records, &config);
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered[0].body(), "new");
//! # Ok(())
//! # }
//! ```
//!
//! # Behavior Notes
//!
//! - Sender matching is exact; `SYSTEM` can be selected like any sender
//! - Date bounds are inclusive and compared by calendar date only
//! - Records without a date are **excluded** when date filters are active
//! - Multiple filters are combined with AND logic

use chrono::NaiveDate;

use crate::MessageRecord;
use crate::error::ChatstatError;

/// Configuration for filtering records by date and sender.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterConfig {
    /// Include only records on or after this date.
    pub date_from: Option<NaiveDate>,

    /// Include only records on or before this date.
    pub date_to: Option<NaiveDate>,

    /// Include only records from this sender (exact match).
    pub sender: Option<String>,
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    ///
    /// No filters are active by default; all records pass through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start date filter (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self, ChatstatError> {
        self.date_from = Some(parse_filter_date(date_str)?);
        Ok(self)
    }

    /// Sets the end date filter (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self, ChatstatError> {
        self.date_to = Some(parse_filter_date(date_str)?);
        Ok(self)
    }

    /// Sets both date bounds from already parsed dates.
    #[must_use]
    pub fn with_dates(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.date_from = Some(from);
        self.date_to = Some(to);
        self
    }

    /// Sets the sender filter.
    ///
    /// ```
    /// use chatstat::core::filter::FilterConfig;
    ///
    /// // Matches "SYSTEM" records only
    /// let config = FilterConfig::new().with_sender("SYSTEM");
    /// assert!(config.has_sender_filter());
    /// ```
    #[must_use]
    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = Some(sender.into());
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.has_date_filter() || self.has_sender_filter()
    }

    /// Returns `true` if date filters are active.
    pub fn has_date_filter(&self) -> bool {
        self.date_from.is_some() || self.date_to.is_some()
    }

    /// Returns `true` if sender filter is active.
    pub fn has_sender_filter(&self) -> bool {
        self.sender.is_some()
    }

    /// Returns `true` if the record passes every active filter.
    pub fn matches(&self, record: &MessageRecord) -> bool {
        if let Some(ref sender) = self.sender {
            if record.sender().as_str() != sender {
                return false;
            }
        }

        if self.has_date_filter() {
            let Some(date) = record.timestamp().date else {
                return false;
            };
            if self.date_from.is_some_and(|from| date < from) {
                return false;
            }
            if self.date_to.is_some_and(|to| date > to) {
                return false;
            }
        }

        true
    }
}

/// Parses a `YYYY-MM-DD` bound.
pub fn parse_filter_date(date_str: &str) -> Result<NaiveDate, ChatstatError> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| ChatstatError::invalid_date(date_str))
}

/// Borrows the records that pass every active filter, in table order.
pub fn filter_records<'a>(
    records: &'a [MessageRecord],
    config: &'a FilterConfig,
) -> impl Iterator<Item = &'a MessageRecord> + 'a {
    records.iter().filter(move |record| config.matches(record))
}

/// Copies the records that pass every active filter.
///
/// The source table is left untouched. An unknown sender or an empty date
/// range yields an empty table, not an error.
pub fn apply_filters(records: &[MessageRecord], config: &FilterConfig) -> Vec<MessageRecord> {
    let filtered: Vec<MessageRecord> = filter_records(records, config).cloned().collect();
    tracing::debug!(
        before = records.len(),
        after = filtered.len(),
        "applied record filters"
    );
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{Sender, Timestamp};

    fn make_record(sender: Sender, body: &str, date: Option<&str>) -> MessageRecord {
        let date = date.map(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").unwrap());
        MessageRecord::new(Timestamp::new(date, None), sender, body)
    }

    #[test]
    fn test_filter_by_sender_is_exact() {
        let records = vec![
            make_record(Sender::user("Alice"), "Hello", None),
            make_record(Sender::user("Bob"), "Hi", None),
            make_record(Sender::user("alice"), "Bye", None),
        ];

        let config = FilterConfig::new().with_sender("Alice");
        let filtered = apply_filters(&records, &config);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].body(), "Hello");
    }

    #[test]
    fn test_filter_system_sender() {
        let records = vec![
            make_record(Sender::System, "Alice joined", None),
            make_record(Sender::user("Alice"), "Hello", None),
        ];

        let filtered = apply_filters(&records, &FilterConfig::new().with_sender("SYSTEM"));
        assert_eq!(filtered.len(), 1);
        assert!(filtered[0].sender().is_system());
    }

    #[test]
    fn test_filter_date_bounds_are_inclusive() {
        let records = vec![
            make_record(Sender::user("A"), "before", Some("2024-05-31")),
            make_record(Sender::user("A"), "first", Some("2024-06-01")),
            make_record(Sender::user("A"), "last", Some("2024-06-30")),
            make_record(Sender::user("A"), "after", Some("2024-07-01")),
        ];

        let config = FilterConfig::new()
            .with_date_from("2024-06-01")
            .unwrap()
            .with_date_to("2024-06-30")
            .unwrap();
        let filtered = apply_filters(&records, &config);

        let bodies: Vec<&str> = filtered.iter().map(MessageRecord::body).collect();
        assert_eq!(bodies, vec!["first", "last"]);
    }

    #[test]
    fn test_no_date_excluded_when_date_filter() {
        let records = vec![
            make_record(Sender::user("Alice"), "With date", Some("2024-06-15")),
            make_record(Sender::user("Alice"), "No date", None),
        ];

        let config = FilterConfig::new().with_date_from("2024-01-01").unwrap();
        let filtered = apply_filters(&records, &config);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].body(), "With date");
    }

    #[test]
    fn test_unknown_sender_and_empty_range_yield_empty() {
        let records = vec![make_record(Sender::user("Alice"), "Hi", Some("2024-06-15"))];

        assert!(apply_filters(&records, &FilterConfig::new().with_sender("Zed")).is_empty());

        let inverted = FilterConfig::new()
            .with_date_from("2024-12-31")
            .unwrap()
            .with_date_to("2024-01-01")
            .unwrap();
        assert!(apply_filters(&records, &inverted).is_empty());
    }

    #[test]
    fn test_invalid_date_format() {
        let result = FilterConfig::new().with_date_from("01-01-2024");
        assert!(matches!(result, Err(ChatstatError::InvalidDate { .. })));
    }

    #[test]
    fn test_source_table_is_untouched() {
        let records = vec![
            make_record(Sender::user("Alice"), "Hello", None),
            make_record(Sender::user("Bob"), "Hi", None),
        ];
        let snapshot = records.clone();

        let _ = apply_filters(&records, &FilterConfig::new().with_sender("Bob"));
        assert_eq!(records, snapshot);
    }

    #[test]
    fn test_is_active() {
        assert!(!FilterConfig::new().is_active());
        assert!(FilterConfig::new().with_sender("Alice").is_active());
        assert!(
            FilterConfig::new()
                .with_date_to("2024-01-01")
                .unwrap()
                .is_active()
        );
    }
}
