//! Stop-word set used by the vocabulary queries.
//!
//! The set is loaded once and passed explicitly into
//! [`most_common_words`](crate::core::analytics::most_common_words), so
//! tests can use an in-memory list and never touch the file system.
//!
//! # Example
//!
//! ```rust
//! use chatstat::core::StopWords;
//!
//! let stop_words = StopWords::parse("the\nand\n");
//! assert!(stop_words.contains("the"));
//! assert!(!stop_words.contains("chat"));
//!
//! let bundled = StopWords::bundled();
//! assert!(bundled.contains("hai"));
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::ChatstatError;

/// English and Hinglish list compiled into the binary.
const BUNDLED: &str = include_str!("../../resources/stop_words.txt");

/// Read-only set of tokens ignored by the vocabulary queries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a newline-delimited list, one token per line.
    ///
    /// Entries are trimmed and lower-cased; blank lines are skipped.
    pub fn parse(text: &str) -> Self {
        text.lines().collect()
    }

    /// Loads a newline-delimited list from disk.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatError::StopWords`] if the file cannot be read.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ChatstatError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| ChatstatError::stop_words(path, e))?;
        let stop_words = Self::parse(&text);
        tracing::debug!(path = %path.display(), words = stop_words.len(), "loaded stop words");
        Ok(stop_words)
    }

    /// The compiled-in default list.
    pub fn bundled() -> Self {
        Self::parse(BUNDLED)
    }

    /// Returns `true` if `token` is a stop word.
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for StopWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let words = iter
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_skips_blank_lines_and_normalises() {
        let stop_words = StopWords::parse("The\r\n\n  and \nhai\n");
        assert_eq!(stop_words.len(), 3);
        assert!(stop_words.contains("the"));
        assert!(stop_words.contains("and"));
        assert!(stop_words.contains("hai"));
    }

    #[test]
    fn test_from_iterator() {
        let stop_words: StopWords = ["a", "b"].into_iter().collect();
        assert!(stop_words.contains("a"));
        assert!(!stop_words.contains("c"));
    }

    #[test]
    fn test_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "foo\nbar").unwrap();

        let stop_words = StopWords::from_path(file.path()).unwrap();
        assert!(stop_words.contains("foo"));
        assert!(stop_words.contains("bar"));
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let err = StopWords::from_path("/nonexistent/stop_words.txt").unwrap_err();
        assert!(err.is_stop_words());
        assert!(err.to_string().contains("stop_words.txt"));
    }

    #[test]
    fn test_bundled_list() {
        let bundled = StopWords::bundled();
        assert!(!bundled.is_empty());
        assert!(bundled.contains("the"));
        assert!(bundled.contains("nahi"));
    }
}
