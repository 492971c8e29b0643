//! Export writers for the enriched record table.
//!
//! This module provides writers for different output formats:
//! - [`write_csv`] / [`to_csv`] - comma-separated, one column per field - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - JSON array of rows - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - JSON Lines, one row per line - requires `json-output` feature
//!
//! Every format writes the same flat [`ExportRow`]: the parsed fields plus
//! every derived calendar and clock field. Unknown values are empty cells in
//! CSV and `null` in JSON.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatstat::Result<()> {
//! use chatstat::core::output::{to_csv, write_json};
//! use chatstat::features::derive;
//! use chatstat::parser::{Grammar, create_parser};
//!
//! let records = derive(create_parser(Grammar::Line).parse_str("1/2/23, 3:04 PM - Alice: hi"));
//!
//! write_json(&records, "chat.json")?;
//! let csv_string = to_csv(&records)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};

use chrono::NaiveDate;
use serde::Serialize;

use crate::MessageRecord;

/// Column names of [`ExportRow`], in field order.
pub const EXPORT_COLUMNS: [&str; 12] = [
    "date", "time", "sender", "body", "year", "month", "month_num", "day", "day_name", "hour", "minute", "period",
];

/// One flat output row.
///
/// Field order is the CSV column order; keep [`EXPORT_COLUMNS`] in step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRow<'a> {
    pub date: Option<NaiveDate>,
    /// `HH:MM`, 24-hour.
    pub time: Option<String>,
    pub sender: &'a str,
    pub body: &'a str,
    pub year: Option<i32>,
    pub month: Option<&'a str>,
    pub month_num: Option<u32>,
    pub day: Option<u32>,
    pub day_name: Option<&'a str>,
    pub hour: Option<u32>,
    pub minute: Option<u32>,
    pub period: Option<&'a str>,
}

impl<'a> From<&'a MessageRecord> for ExportRow<'a> {
    fn from(record: &'a MessageRecord) -> Self {
        let calendar = record.calendar();
        let clock = record.clock();
        Self {
            date: record.timestamp().date,
            time: record.timestamp().time.map(|t| t.format("%H:%M").to_string()),
            sender: record.sender().as_str(),
            body: record.body(),
            year: calendar.map(|c| c.year),
            month: calendar.map(|c| c.month.as_str()),
            month_num: calendar.map(|c| c.month_num),
            day: calendar.map(|c| c.day),
            day_name: calendar.map(|c| c.day_name.as_str()),
            hour: clock.map(|c| c.hour),
            minute: clock.map(|c| c.minute),
            period: clock.map(|c| c.period.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::derive;
    use crate::parser::{Grammar, create_parser};

    #[test]
    fn test_row_from_derived_record() {
        let records = derive(create_parser(Grammar::Line).parse_str("1/2/23, 3:04 PM - Alice: hi"));
        let row = ExportRow::from(&records[0]);

        assert_eq!(row.date, NaiveDate::from_ymd_opt(2023, 1, 2));
        assert_eq!(row.time.as_deref(), Some("15:04"));
        assert_eq!(row.sender, "Alice");
        assert_eq!(row.day_name, Some("Monday"));
        assert_eq!(row.period, Some("15-16"));
    }

    #[test]
    fn test_row_from_raw_record_has_no_derived_fields() {
        let records = create_parser(Grammar::Line).parse_str("1/2/23, 3:04 PM - Alice: hi");
        let row = ExportRow::from(&records[0]);

        assert!(row.date.is_some());
        assert!(row.year.is_none());
        assert!(row.period.is_none());
    }
}
