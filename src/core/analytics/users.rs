use std::collections::BTreeSet;

use super::{round2, tally};
use crate::MessageRecord;

/// Top `top_n` senders by message count, `SYSTEM` excluded.
///
/// Ties keep the order in which senders first appear.
pub fn most_active_users(records: &[MessageRecord], top_n: usize) -> Vec<(String, usize)> {
    let mut counts = tally(
        records
            .iter()
            .filter(|r| !r.sender().is_system())
            .map(|r| r.sender().as_str()),
    );
    counts.truncate(top_n);
    counts
        .into_iter()
        .map(|(name, count)| (name.to_string(), count))
        .collect()
}

/// Share of all records per sender, in percent rounded to 2 places.
///
/// `SYSTEM` is included both as an entry and in the denominator, so the
/// shares sum to 100 up to rounding. Ordered like [`most_active_users`].
pub fn user_shares(records: &[MessageRecord]) -> Vec<(String, f64)> {
    if records.is_empty() {
        return Vec::new();
    }
    let total = records.len() as f64;

    tally(records.iter().map(|r| r.sender().as_str()))
        .into_iter()
        .map(|(name, count)| {
            let share = round2(count as f64 / total * 100.0);
            (name.to_string(), share)
        })
        .collect()
}

/// Distinct non-`SYSTEM` senders, sorted.
pub fn senders(records: &[MessageRecord]) -> Vec<String> {
    records
        .iter()
        .filter(|r| !r.sender().is_system())
        .map(|r| r.sender().as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
