//! Shared parsing utilities.
//!
//! This module contains the patterns and timestamp helpers used by both
//! transcript grammars to avoid code duplication.

pub mod transcript;

// Re-export commonly used items
pub use transcript::{
    DEFAULT_MERIDIEM, LINE_PATTERN, SPAN_HEADER_PATTERN, parse_clock, parse_date,
    parse_timestamp,
};
