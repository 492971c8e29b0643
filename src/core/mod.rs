//! Core processing logic for chatstat.
//!
//! This module contains:
//! - [`filter`] - Record filtering by sender and date
//! - [`stopwords`] - Stop-word set for the vocabulary queries
//! - [`analytics`] - Read-only statistics over the record table
//! - [`report`] - All statistics for one selection, bundled
//! - [`output`] - Export writers (CSV, JSON, JSONL)
//!
//! # Quick Start
//!
//! ```rust
//! use chatstat::core::{FilterConfig, Report, Selection, StopWords, apply_filters};
//! use chatstat::config::AnalysisConfig;
//! use chatstat::features::derive;
//! use chatstat::parser::{Grammar, create_parser};
//!
//! let text = "1/2/23, 3:04 PM - Alice: hello there\n1/3/23, 9:00 AM - Bob: hi";
//! let records = derive(create_parser(Grammar::Line).parse_str(text));
//! let records = apply_filters(&records, &FilterConfig::new().with_sender("Alice"));
//!
//! let report = Report::build(&records, &Selection::Overall, &AnalysisConfig::default(), &StopWords::bundled());
//! assert_eq!(report.summary.messages, 1);
//! ```

pub mod analytics;
pub mod filter;
pub mod output;
pub mod report;
pub mod stopwords;

// Re-export main types for convenience
pub use analytics::Selection;
pub use filter::{FilterConfig, apply_filters};
pub use report::Report;
pub use stopwords::StopWords;

// Conditionally re-export output writers
#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, write_json, write_jsonl};
