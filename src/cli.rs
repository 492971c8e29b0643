//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`GrammarArg`] - Transcript grammar choice
//! - [`ReportFormat`] - How the report is printed

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_TOP_USERS;
use crate::parser::Grammar;

/// Statistics for exported chat transcripts: message, word, media and link
/// counts, activity timelines, vocabulary and emoji usage.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatstat")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatstat chat.txt
    chatstat chat.txt --grammar span --user Alice
    chatstat chat.txt --after 2024-01-01 --before 2024-06-30 --report json
    chatstat chat.txt --export enriched.csv")]
pub struct Args {
    /// Path to the transcript file
    pub input: PathBuf,

    /// Transcript grammar: `line` drops continuation lines, `span` keeps them
    #[arg(short, long, value_enum, default_value = "line")]
    pub grammar: GrammarArg,

    /// Restrict statistics to one sender ("Overall" for everyone)
    #[arg(short, long, value_name = "NAME")]
    pub user: Option<String>,

    /// Keep messages on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Keep messages on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Newline-delimited stop-word list (default: bundled English + Hinglish list)
    #[arg(long, value_name = "PATH")]
    pub stop_words: Option<PathBuf>,

    /// Report format printed to stdout
    #[arg(short, long, value_enum, default_value = "text")]
    pub report: ReportFormat,

    /// Also write the filtered, enriched table (.csv, .json or .jsonl)
    #[arg(short, long, value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Number of senders in the most-active ranking
    #[arg(long, value_name = "N", default_value_t = DEFAULT_TOP_USERS)]
    pub top: usize,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Transcript grammar as a CLI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrammarArg {
    /// One message per matching line; AM/PM optional
    #[default]
    #[value(alias = "a")]
    Line,

    /// One message per timestamp span; AM/PM required
    #[value(alias = "b")]
    Span,
}

impl From<GrammarArg> for Grammar {
    fn from(arg: GrammarArg) -> Grammar {
        match arg {
            GrammarArg::Line => Grammar::Line,
            GrammarArg::Span => Grammar::Span,
        }
    }
}

/// How the report is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable summary
    #[default]
    Text,

    /// Pretty-printed JSON
    Json,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}
