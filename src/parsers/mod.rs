//! Transcript parsers, one per grammar.
//!
//! # Available Parsers
//!
//! - [`LineParser`] - grammar A, one record per matching physical line
//! - [`SpanParser`] - grammar B, one record per timestamp span
//!
//! Both implement [`Parser`](crate::parser::Parser); pick one with
//! [`create_parser`](crate::parser::create_parser).

mod line;
mod span;

pub use line::LineParser;
pub use span::SpanParser;
