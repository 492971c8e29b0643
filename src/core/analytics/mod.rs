//! Read-only statistics over an enriched record table.
//!
//! Every query is a pure function of the table and its parameters, so
//! queries may run in any order or concurrently over the same slice.
//! Most take a [`Selection`]: [`Selection::Overall`] keeps every record,
//! [`Selection::Sender`] narrows to one sender by exact match before
//! counting.
//!
//! | Query | Result |
//! |-------|--------|
//! | [`summary`] | message, word, media and link counts |
//! | [`most_active_users`] / [`user_shares`] | per-sender ranking and percentages |
//! | [`monthly_timeline`] / [`daily_timeline`] | counts in calendar order |
//! | [`week_activity_map`] / [`month_activity_map`] | counts by weekday / month name |
//! | [`activity_heatmap`] | weekday x period count matrix |
//! | [`most_common_words`] / [`cleaned_corpus`] | vocabulary after stop-word removal |
//! | [`emoji_frequency`] | per-emoji counts |
//!
//! # Example
//!
//! ```rust
//! use chatstat::core::analytics::{Selection, most_active_users, summary};
//! use chatstat::core::analytics::LinkifyDetector;
//! use chatstat::features::derive;
//! use chatstat::parser::{Grammar, create_parser};
//!
//! let text = "1/2/23, 3:04 PM - Alice: see example.com\n1/2/23, 3:05 PM - Bob: <Media omitted>";
//! let records = derive(create_parser(Grammar::Line).parse_str(text));
//!
//! let stats = summary(&records, &Selection::Overall, "<Media omitted>", &LinkifyDetector);
//! assert_eq!(stats.messages, 2);
//! assert_eq!(stats.media, 1);
//! assert_eq!(stats.links, 1);
//!
//! let top = most_active_users(&records, 5);
//! assert_eq!(top[0], ("Alice".to_string(), 1));
//! ```

mod activity;
mod classify;
mod emoji;
mod summary;
mod timeline;
mod users;
mod vocabulary;

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::MessageRecord;
use crate::message::Sender;

pub use activity::{Heatmap, activity_heatmap, month_activity_map, week_activity_map};
pub use classify::{EmojiTable, LinkDetector, LinkifyDetector, UnicodeEmojiTable};
pub use emoji::emoji_frequency;
pub use summary::{Summary, summary};
pub use timeline::{DailyCount, MonthlyCount, daily_timeline, monthly_timeline};
pub use users::{most_active_users, senders, user_shares};
pub use vocabulary::{cleaned_corpus, most_common_words};

/// Label that selects every record.
pub const OVERALL: &str = "Overall";

/// Which records a query counts.
///
/// ```rust
/// use chatstat::core::analytics::Selection;
///
/// assert_eq!(Selection::from("Overall"), Selection::Overall);
/// assert_eq!(Selection::from("Alice"), Selection::Sender("Alice".into()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Selection {
    /// No restriction.
    #[default]
    Overall,
    /// Only records whose sender equals this name.
    Sender(String),
}

impl Selection {
    pub fn sender(name: impl Into<String>) -> Self {
        Self::Sender(name.into())
    }

    pub fn is_overall(&self) -> bool {
        matches!(self, Self::Overall)
    }

    /// Returns `true` if the record belongs to this selection.
    pub fn matches(&self, record: &MessageRecord) -> bool {
        match self {
            Self::Overall => true,
            Self::Sender(name) => record.sender().as_str() == name,
        }
    }

    /// Borrows the selected records, in table order.
    pub fn select<'a>(
        &'a self,
        records: &'a [MessageRecord],
    ) -> impl Iterator<Item = &'a MessageRecord> + 'a {
        records.iter().filter(move |r| self.matches(r))
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overall => f.write_str(OVERALL),
            Self::Sender(name) => f.write_str(name),
        }
    }
}

impl From<&str> for Selection {
    fn from(s: &str) -> Self {
        if s == OVERALL {
            Self::Overall
        } else {
            Self::Sender(s.to_string())
        }
    }
}

impl From<String> for Selection {
    fn from(s: String) -> Self {
        if s == OVERALL { Self::Overall } else { Self::Sender(s) }
    }
}

impl From<Selection> for String {
    fn from(selection: Selection) -> Self {
        match selection {
            Selection::Overall => OVERALL.to_string(),
            Selection::Sender(name) => name,
        }
    }
}

impl From<&Sender> for Selection {
    fn from(sender: &Sender) -> Self {
        Self::Sender(sender.as_str().to_string())
    }
}

/// Counts keys, ordered by descending count.
///
/// Ties keep the order in which keys were first seen.
pub(crate) fn tally<K, I>(keys: I) -> Vec<(K, usize)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut counts: Vec<(K, usize)> = Vec::new();

    for key in keys {
        match index.get(&key) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(key.clone(), counts.len());
                counts.push((key, 1));
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Rounds to two decimal places.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
