//! One-shot bundle of every aggregator query for a selection.
//!
//! [`Report`] is what the CLI prints, as text or JSON. Library users who only
//! need one statistic should call the query in
//! [`analytics`](crate::core::analytics) directly.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::MessageRecord;
use crate::config::AnalysisConfig;
use crate::core::StopWords;
use crate::core::analytics::{
    self, DailyCount, EmojiTable, Heatmap, LinkDetector, LinkifyDetector, MonthlyCount,
    Selection, Summary, UnicodeEmojiTable,
};

/// Results of every query for one selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub selection: Selection,
    pub summary: Summary,
    /// Only filled for [`Selection::Overall`].
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub most_active_users: Vec<(String, usize)>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub user_shares: Vec<(String, f64)>,
    pub monthly_timeline: Vec<MonthlyCount>,
    pub daily_timeline: Vec<DailyCount>,
    pub week_activity: Vec<(String, usize)>,
    pub month_activity: Vec<(String, usize)>,
    pub heatmap: Heatmap,
    pub common_words: Vec<(String, usize)>,
    pub emojis: Vec<(String, usize)>,
}

impl Report {
    /// Builds a report with the default link and emoji classifiers.
    pub fn build(
        records: &[MessageRecord],
        selection: &Selection,
        config: &AnalysisConfig,
        stop_words: &StopWords,
    ) -> Self {
        Self::build_with(
            records,
            selection,
            config,
            stop_words,
            &LinkifyDetector,
            &UnicodeEmojiTable,
        )
    }

    /// Builds a report with caller-supplied classifiers.
    pub fn build_with(
        records: &[MessageRecord],
        selection: &Selection,
        config: &AnalysisConfig,
        stop_words: &StopWords,
        links: &dyn LinkDetector,
        emojis: &dyn EmojiTable,
    ) -> Self {
        let placeholder = config.media_placeholder.as_str();
        let (most_active_users, user_shares) = if selection.is_overall() {
            (
                analytics::most_active_users(records, config.top_users),
                analytics::user_shares(records),
            )
        } else {
            (Vec::new(), Vec::new())
        };

        let report = Self {
            selection: selection.clone(),
            summary: analytics::summary(records, selection, placeholder, links),
            most_active_users,
            user_shares,
            monthly_timeline: analytics::monthly_timeline(records, selection),
            daily_timeline: analytics::daily_timeline(records, selection),
            week_activity: analytics::week_activity_map(records, selection),
            month_activity: analytics::month_activity_map(records, selection),
            heatmap: analytics::activity_heatmap(records, selection),
            common_words: analytics::most_common_words(
                records,
                selection,
                stop_words,
                placeholder,
                config.top_words,
            ),
            emojis: analytics::emoji_frequency(
                records,
                selection,
                emojis,
                config.include_system_emojis,
            ),
        };

        tracing::debug!(
            selection = %report.selection,
            messages = report.summary.messages,
            "built report"
        );
        report
    }
}

fn write_pairs<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    title: &str,
    pairs: &[(String, T)],
) -> fmt::Result {
    writeln!(f, "\n{title}")?;
    if pairs.is_empty() {
        return writeln!(f, "  (none)");
    }
    for (name, value) in pairs {
        writeln!(f, "  {name:<20} {value}")?;
    }
    Ok(())
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Chat statistics: {}", self.selection)?;
        writeln!(f, "  Messages: {}", self.summary.messages)?;
        writeln!(f, "  Words:    {}", self.summary.words)?;
        writeln!(f, "  Media:    {}", self.summary.media)?;
        writeln!(f, "  Links:    {}", self.summary.links)?;

        if self.selection.is_overall() {
            write_pairs(f, "Most active users", &self.most_active_users)?;
            let shares: Vec<(String, String)> = self
                .user_shares
                .iter()
                .map(|(name, share)| (name.clone(), format!("{share:.2}%")))
                .collect();
            write_pairs(f, "Share of messages", &shares)?;
        }

        let monthly: Vec<(String, usize)> = self
            .monthly_timeline
            .iter()
            .map(|m| (m.label.clone(), m.count))
            .collect();
        write_pairs(f, "Monthly timeline", &monthly)?;
        write_pairs(f, "Busiest days", &self.week_activity)?;
        write_pairs(f, "Busiest months", &self.month_activity)?;
        write_pairs(f, "Most common words", &self.common_words)?;
        write_pairs(f, "Emojis", &self.emojis)
    }
}
