//! Export format selection and dispatch.
//!
//! The CLI picks a format from the `--export` path's extension; library
//! callers can name one directly.
//!
//! ```rust
//! # #[cfg(feature = "json-output")]
//! # fn example() -> chatstat::Result<()> {
//! use chatstat::format::{OutputFormat, to_format_string};
//! use chatstat::parser::{Grammar, create_parser};
//!
//! let records = create_parser(Grammar::Line).parse_str("1/2/23, 3:04 PM - Alice: hi");
//!
//! let format = OutputFormat::from_path("chat.jsonl")?;
//! assert_eq!(format, OutputFormat::Jsonl);
//! let jsonl = to_format_string(&records, format)?;
//! assert_eq!(jsonl.lines().count(), 1);
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::MessageRecord;
use crate::error::ChatstatError;

/// Export format for the enriched record table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// One row per record, one column per field.
    #[default]
    Csv,
    /// A single pretty-printed array.
    Json,
    /// One object per line (`.jsonl` or `.ndjson`).
    Jsonl,
}

impl OutputFormat {
    const ACCEPTED: &'static str = "csv, json, jsonl, ndjson";

    /// Canonical file extension, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }

    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Csv, OutputFormat::Json, OutputFormat::Jsonl]
    }

    /// Picks the format from a path's extension, case-insensitively.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ChatstatError> {
        let path = path.as_ref();
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
        ext.parse().map_err(|_| {
            ChatstatError::invalid_format(
                "export path",
                format!("'{}' (extension must be one of: {})", path.display(), Self::ACCEPTED),
            )
        })
    }

    fn feature(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv-output",
            OutputFormat::Json | OutputFormat::Jsonl => "json-output",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = ChatstatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(ChatstatError::invalid_format(
                "export format",
                format!("'{s}' (expected one of: {})", Self::ACCEPTED),
            )),
        }
    }
}

fn feature_disabled(format: OutputFormat) -> ChatstatError {
    ChatstatError::invalid_format(
        "export format",
        format!("{format} needs the '{}' feature", format.feature()),
    )
}

/// Writes `records` to `path` as `format`.
#[allow(unused_variables)]
pub fn write_to_format(
    records: &[MessageRecord],
    path: impl AsRef<Path>,
    format: OutputFormat,
) -> Result<(), ChatstatError> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), %format, records = records.len(), "writing export");
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(records, path),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(records, path),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::write_jsonl(records, path),
        #[allow(unreachable_patterns)]
        _ => Err(feature_disabled(format)),
    }
}

/// Renders `records` as `format` in memory.
#[allow(unused_variables)]
pub fn to_format_string(records: &[MessageRecord], format: OutputFormat) -> Result<String, ChatstatError> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_csv(records),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(records),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::to_jsonl(records),
        #[allow(unreachable_patterns)]
        _ => Err(feature_disabled(format)),
    }
}
