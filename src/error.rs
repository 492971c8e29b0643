//! Error type for chatstat.
//!
//! Malformed transcript *content* is never an error: lines outside the
//! grammar are dropped and unparsable timestamps become unknown fields.
//! What remains is reading and writing files, user-supplied values the CLI
//! cannot interpret, and a stop-word list that cannot be loaded.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the crate.
///
/// ```rust
/// use chatstat::Result;
/// use chatstat::core::StopWords;
///
/// fn load(path: &str) -> Result<StopWords> {
///     StopWords::from_path(path)
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatstatError>;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatstatError {
    /// Reading a transcript or writing an export failed.
    #[error("I/O failure: {0}")]
    Io(#[from] io::Error),

    /// A filter date that is not `YYYY-MM-DD`.
    #[error("invalid date '{input}', expected {expected}")]
    InvalidDate { input: String, expected: &'static str },

    /// A grammar name, export extension or similar value nothing handles.
    #[error("unsupported {kind}: {message}")]
    InvalidFormat { kind: &'static str, message: String },

    /// The stop-word list could not be read.
    ///
    /// Only vocabulary queries depend on it.
    #[error("stop-word list unavailable at {}: {source}", path.display())]
    StopWords {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[cfg(feature = "csv-output")]
    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    #[cfg(feature = "json-output")]
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl ChatstatError {
    pub fn invalid_format(kind: &'static str, message: impl Into<String>) -> Self {
        ChatstatError::InvalidFormat {
            kind,
            message: message.into(),
        }
    }

    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatstatError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    pub fn stop_words(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ChatstatError::StopWords {
            path: path.into(),
            source,
        }
    }

    pub fn is_io(&self) -> bool {
        matches!(self, ChatstatError::Io(_))
    }

    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatstatError::InvalidFormat { .. })
    }

    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatstatError::InvalidDate { .. })
    }

    pub fn is_stop_words(&self) -> bool {
        matches!(self, ChatstatError::StopWords { .. })
    }
}
