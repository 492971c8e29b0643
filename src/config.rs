//! Configuration types for analysis.
//!
//! Plain structs for library usage, without any CLI framework dependencies.
//! Parser choice is a single [`Grammar`](crate::parser::Grammar) value and
//! needs no struct of its own.
//!
//! # Example
//!
//! ```rust
//! use chatstat::config::AnalysisConfig;
//!
//! let config = AnalysisConfig::new()
//!     .with_top_users(3)
//!     .with_include_system_emojis(false);
//!
//! assert_eq!(config.top_users, 3);
//! assert_eq!(config.media_placeholder, "<Media omitted>");
//! ```

use serde::{Deserialize, Serialize};

/// Body text an export writes in place of an attachment.
pub const MEDIA_PLACEHOLDER: &str = "<Media omitted>";

/// Default number of senders in the most-active ranking.
pub const DEFAULT_TOP_USERS: usize = 5;

/// Default number of words in the vocabulary ranking.
pub const DEFAULT_TOP_WORDS: usize = 20;

/// Settings shared by the aggregator queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Exact body marking a media message (default: `<Media omitted>`)
    pub media_placeholder: String,

    /// Senders returned by the most-active ranking (default: 5)
    pub top_users: usize,

    /// Words returned by the vocabulary ranking (default: 20)
    pub top_words: usize,

    /// Count emojis in SYSTEM notifications (default: true)
    pub include_system_emojis: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            media_placeholder: MEDIA_PLACEHOLDER.to_string(),
            top_users: DEFAULT_TOP_USERS,
            top_words: DEFAULT_TOP_WORDS,
            include_system_emojis: true,
        }
    }
}

impl AnalysisConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the media placeholder body.
    #[must_use]
    pub fn with_media_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.media_placeholder = placeholder.into();
        self
    }

    /// Sets how many senders the most-active ranking returns.
    #[must_use]
    pub fn with_top_users(mut self, n: usize) -> Self {
        self.top_users = n;
        self
    }

    /// Sets how many words the vocabulary ranking returns.
    #[must_use]
    pub fn with_top_words(mut self, n: usize) -> Self {
        self.top_words = n;
        self
    }

    /// Sets whether SYSTEM notifications count toward emoji frequency.
    #[must_use]
    pub fn with_include_system_emojis(mut self, include: bool) -> Self {
        self.include_system_emojis = include;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_config_default() {
        let config = AnalysisConfig::default();
        assert_eq!(config.media_placeholder, "<Media omitted>");
        assert_eq!(config.top_users, 5);
        assert_eq!(config.top_words, 20);
        assert!(config.include_system_emojis);
    }

    #[test]
    fn test_analysis_config_builder() {
        let config = AnalysisConfig::new()
            .with_media_placeholder("<attached>")
            .with_top_words(10);

        assert_eq!(config.media_placeholder, "<attached>");
        assert_eq!(config.top_words, 10);
        assert_eq!(config.top_users, 5);
    }

    #[test]
    fn test_analysis_config_partial_deserialize() {
        let config: AnalysisConfig = serde_json::from_str(r#"{"top_users": 2}"#).unwrap();
        assert_eq!(config.top_users, 2);
        assert_eq!(config.top_words, 20);
    }
}
