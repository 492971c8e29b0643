//! # Chatstat
//!
//! A Rust library for turning exported chat transcripts into a typed record
//! table and a battery of statistics over it.
//!
//! ## Overview
//!
//! The pipeline has four stages, each a plain function over the previous
//! stage's output:
//!
//! 1. **Parse** raw text into [`MessageRecord`]s with a [`Parser`](parser::Parser)
//!    chosen by [`Grammar`](parser::Grammar)
//! 2. **Derive** calendar and clock fields with [`features::derive`]
//! 3. **Filter** by sender or date range with [`core::apply_filters`] (optional)
//! 4. **Aggregate** with the queries in [`core::analytics`], or all at once
//!    with [`core::Report`]
//!
//! Malformed content never produces an error: unmatched lines are dropped
//! and unparsable timestamps become unknown fields. Only file I/O, bad filter
//! dates and a missing stop-word file are reported as [`ChatstatError`].
//!
//! ## Quick Start
//!
//! ```rust
//! use chatstat::prelude::*;
//!
//! let text = "\
//! 1/2/23, 3:04 PM - Alice: hello 😀
//! 1/2/23, 3:05 PM - Bob joined using this group's invite link
//! 1/2/23, 3:06 PM - Bob: <Media omitted>";
//!
//! let records = derive(create_parser(Grammar::Line).parse_str(text));
//! assert_eq!(records[0].period(), "15-16");
//! assert!(records[1].sender().is_system());
//!
//! let stats = summary(&records, &Selection::Overall, MEDIA_PLACEHOLDER, &LinkifyDetector);
//! assert_eq!(stats.messages, 3);
//! assert_eq!(stats.media, 1);
//!
//! let top = most_active_users(&records, 5);
//! assert_eq!(top, vec![("Alice".to_string(), 1), ("Bob".to_string(), 1)]);
//! ```
//!
//! ## Reading Files
//!
//! ```rust,no_run
//! use chatstat::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let records = derive(create_parser(Grammar::Span).parse("chat.txt".as_ref())?);
//!     let report = Report::build(
//!         &records,
//!         &Selection::Overall,
//!         &AnalysisConfig::default(),
//!         &StopWords::bundled(),
//!     );
//!     println!("{report}");
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`Parser`](parser::Parser) trait, [`Grammar`](parser::Grammar), [`create_parser`](parser::create_parser)
//! - [`parsers`] - [`LineParser`](parsers::LineParser), [`SpanParser`](parsers::SpanParser)
//! - [`parsing`] - Shared timestamp grammar
//! - [`features`] - Feature deriver
//! - [`core`] - Filtering, stop words, analytics, reports and export writers
//! - [`config`] - [`AnalysisConfig`](config::AnalysisConfig)
//! - [`format`] - [`OutputFormat`](format::OutputFormat) and format dispatch
//! - [`decode`] - UTF-8 / Latin-1 byte decoding
//! - [`cli`] - CLI argument types (feature `cli`)
//! - [`error`] - [`ChatstatError`], [`Result`]
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod decode;
pub mod error;
pub mod features;
pub mod format;
pub mod message;
pub mod parser;
pub mod parsers;
pub mod parsing;

// Re-export the main types at the crate root for convenience
pub use error::{ChatstatError, Result};
pub use message::{MessageRecord, Sender, Timestamp};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatstat::prelude::*;
/// ```
pub mod prelude {
    // Records
    pub use crate::message::{MessageRecord, SYSTEM_SENDER, Sender, Timestamp};

    // Error types
    pub use crate::error::{ChatstatError, Result};

    // Parsing and enrichment
    pub use crate::features::derive;
    pub use crate::parser::{Grammar, Parser, create_parser};
    pub use crate::parsers::{LineParser, SpanParser};

    // Configuration
    pub use crate::config::{AnalysisConfig, MEDIA_PLACEHOLDER};

    // Filtering
    pub use crate::core::filter::{FilterConfig, apply_filters};

    // Analytics
    pub use crate::core::analytics::{
        EmojiTable, LinkDetector, LinkifyDetector, Selection, UnicodeEmojiTable,
        activity_heatmap, cleaned_corpus, daily_timeline, emoji_frequency, month_activity_map,
        monthly_timeline, most_active_users, most_common_words, senders, summary, user_shares,
        week_activity_map,
    };
    pub use crate::core::{Report, StopWords};

    // Output
    pub use crate::format::OutputFormat;
    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, to_jsonl, write_json, write_jsonl};
}
