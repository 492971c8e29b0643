//! Unified parser trait for chat transcripts.
//!
//! Two transcript grammars are supported, each as its own [`Parser`]
//! implementation. They are selected explicitly through [`Grammar`] rather
//! than auto-detected, because they disagree on multi-line bodies:
//!
//! | Grammar | Parser | AM/PM | Multi-line bodies |
//! |---------|--------|-------|-------------------|
//! | [`Grammar::Line`] | [`LineParser`](crate::parsers::LineParser) | optional, defaults to AM | truncated to first line |
//! | [`Grammar::Span`] | [`SpanParser`](crate::parsers::SpanParser) | mandatory | preserved |
//!
//! # Example
//!
//! ```rust
//! use chatstat::parser::{Grammar, create_parser};
//!
//! let parser = create_parser(Grammar::Line);
//! let records = parser.parse_str("1/2/23, 3:04 PM - Alice: hello");
//!
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].sender().as_str(), "Alice");
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::MessageRecord;
use crate::decode::decode_transcript;
use crate::error::ChatstatError;

/// Supported transcript grammars.
///
/// # Example
///
/// ```rust
/// use chatstat::parser::Grammar;
/// use std::str::FromStr;
///
/// assert_eq!(Grammar::from_str("span").unwrap(), Grammar::Span);
/// // Aliases are supported
/// assert_eq!(Grammar::from_str("a").unwrap(), Grammar::Line);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grammar {
    /// Grammar A: every physical line is matched on its own.
    #[default]
    #[serde(alias = "a")]
    Line,

    /// Grammar B: the transcript is split on timestamp headers.
    #[serde(alias = "b")]
    Span,
}

impl Grammar {
    /// Returns all grammar names including aliases.
    pub fn all_names() -> &'static [&'static str] {
        &["line", "a", "span", "b"]
    }

    /// Returns all available grammars.
    pub fn all() -> &'static [Grammar] {
        &[Grammar::Line, Grammar::Span]
    }
}

impl std::fmt::Display for Grammar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Grammar::Line => write!(f, "line"),
            Grammar::Span => write!(f, "span"),
        }
    }
}

impl std::str::FromStr for Grammar {
    type Err = ChatstatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "line" | "a" => Ok(Grammar::Line),
            "span" | "b" => Ok(Grammar::Span),
            _ => Err(ChatstatError::invalid_format(
                "grammar",
                format!("'{s}' (expected one of: {})", Grammar::all_names().join(", ")),
            )),
        }
    }
}

/// Lazy, restartable sequence of parsed records.
///
/// Calling [`Parser::records`] again on the same text starts over.
pub type RecordIter<'a> = Box<dyn Iterator<Item = MessageRecord> + 'a>;

/// Unified trait for parsing transcripts.
///
/// Parsing never fails on content: lines or spans that do not fit the
/// grammar are dropped, and unparsable dates or clocks become empty
/// timestamp halves. Only [`parse`](Parser::parse) can fail, and only on I/O.
///
/// Parsers must implement:
/// - [`name`](Parser::name) - Parser identifier
/// - [`grammar`](Parser::grammar) - Grammar this parser handles
/// - [`records`](Parser::records) - Lazy record sequence over in-memory text
pub trait Parser: Send + Sync {
    /// Returns the human-readable name of this parser.
    fn name(&self) -> &'static str;

    /// Returns the grammar this parser implements.
    fn grammar(&self) -> Grammar;

    /// Yields records lazily, in transcript order.
    fn records<'a>(&'a self, text: &'a str) -> RecordIter<'a>;

    /// Parses transcript text into records (derived fields not populated).
    fn parse_str(&self, text: &str) -> Vec<MessageRecord> {
        let records: Vec<MessageRecord> = self.records(text).collect();
        tracing::debug!(
            parser = self.name(),
            records = records.len(),
            "parsed transcript"
        );
        records
    }

    /// Reads and parses a transcript file.
    ///
    /// Bytes are decoded as UTF-8, falling back to Latin-1.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatError::Io`] if the file cannot be read.
    fn parse(&self, path: &Path) -> Result<Vec<MessageRecord>, ChatstatError> {
        let bytes = fs::read(path)?;
        let text = decode_transcript(bytes);
        Ok(self.parse_str(&text))
    }

    /// Convenience method accepting a `&str` path.
    fn parse_file(&self, path: &str) -> Result<Vec<MessageRecord>, ChatstatError> {
        self.parse(Path::new(path))
    }
}

/// Creates a parser for the specified grammar.
///
/// # Example
///
/// ```rust
/// use chatstat::parser::{Grammar, create_parser};
///
/// let parser = create_parser(Grammar::Span);
/// assert_eq!(parser.grammar(), Grammar::Span);
/// ```
pub fn create_parser(grammar: Grammar) -> Box<dyn Parser> {
    match grammar {
        Grammar::Line => Box::new(crate::parsers::LineParser::new()),
        Grammar::Span => Box::new(crate::parsers::SpanParser::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_grammar_from_str() {
        assert_eq!(Grammar::from_str("line").unwrap(), Grammar::Line);
        assert_eq!(Grammar::from_str("A").unwrap(), Grammar::Line);
        assert_eq!(Grammar::from_str("SPAN").unwrap(), Grammar::Span);
        assert_eq!(Grammar::from_str("b").unwrap(), Grammar::Span);
    }

    #[test]
    fn test_grammar_from_str_error() {
        let err = Grammar::from_str("xml").unwrap_err();
        assert!(err.is_invalid_format());
        assert!(err.to_string().contains("xml"));
    }

    #[test]
    fn test_grammar_display_round_trips() {
        for grammar in Grammar::all() {
            assert_eq!(Grammar::from_str(&grammar.to_string()).unwrap(), *grammar);
        }
    }

    #[test]
    fn test_grammar_serde() {
        let json = serde_json::to_string(&Grammar::Span).unwrap();
        assert_eq!(json, "\"span\"");
        let parsed: Grammar = serde_json::from_str("\"a\"").unwrap();
        assert_eq!(parsed, Grammar::Line);
    }

    #[test]
    fn test_create_parser() {
        let parser = create_parser(Grammar::Line);
        assert_eq!(parser.grammar(), Grammar::Line);
        let parser = create_parser(Grammar::Span);
        assert_eq!(parser.grammar(), Grammar::Span);
    }

    #[test]
    fn test_records_is_restartable() {
        let parser = create_parser(Grammar::Line);
        let text = "1/2/23, 3:04 PM - Alice: hello\n1/2/23, 3:05 PM - Bob: hi";
        assert_eq!(parser.records(text).count(), 2);
        assert_eq!(parser.records(text).count(), 2);
    }
}
