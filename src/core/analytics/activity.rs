use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::Datelike;

use serde::{Deserialize, Serialize};

use super::{Selection, tally};
use crate::MessageRecord;
use crate::features::period_label;
use crate::message::UNKNOWN;

/// Message counts per weekday name, busiest first.
///
/// Records without a date are not counted.
pub fn week_activity_map(records: &[MessageRecord], selection: &Selection) -> Vec<(String, usize)> {
    named_counts(
        selection
            .select(records)
            .filter_map(|r| r.calendar().map(|c| c.day_name.as_str())),
    )
}

/// Message counts per month name, busiest first.
///
/// Records without a date are not counted.
pub fn month_activity_map(records: &[MessageRecord], selection: &Selection) -> Vec<(String, usize)> {
    named_counts(
        selection
            .select(records)
            .filter_map(|r| r.calendar().map(|c| c.month.as_str())),
    )
}

fn named_counts<'a>(names: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    tally(names)
        .into_iter()
        .map(|(name, count)| (name.to_string(), count))
        .collect()
}

/// Weekday x period count matrix.
///
/// Rows are the weekdays present, Monday first. Columns are the periods
/// present in hour order, with `"unknown"` last for records that have a
/// date but no clock. Missing cells are zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heatmap {
    pub days: Vec<String>,
    pub periods: Vec<String>,
    /// `counts[row][column]`, indexed like `days` and `periods`.
    pub counts: Vec<Vec<usize>>,
}

impl Heatmap {
    /// Count for one cell, zero if either label is absent.
    pub fn get(&self, day: &str, period: &str) -> usize {
        let row = self.days.iter().position(|d| d == day);
        let col = self.periods.iter().position(|p| p == period);
        match (row, col) {
            (Some(r), Some(c)) => self.counts[r][c],
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Sum over every cell.
    pub fn total(&self) -> usize {
        self.counts.iter().flatten().sum()
    }
}

/// Builds the weekday x period matrix.
pub fn activity_heatmap(records: &[MessageRecord], selection: &Selection) -> Heatmap {
    // Rows keyed by days from Monday; hour `None` sorts first, so it is moved last below.
    let mut cells: HashMap<(u32, Option<u32>), usize> = HashMap::new();
    let mut rows: BTreeMap<u32, &str> = BTreeMap::new();
    let mut cols: BTreeSet<Option<u32>> = BTreeSet::new();

    for record in selection.select(records) {
        let Some(calendar) = record.calendar() else {
            continue;
        };
        let row = calendar.date.weekday().num_days_from_monday();
        let hour = record.hour();
        rows.insert(row, calendar.day_name.as_str());
        cols.insert(hour);
        *cells.entry((row, hour)).or_insert(0) += 1;
    }

    let mut hours: Vec<Option<u32>> = cols.into_iter().collect();
    if hours.first() == Some(&None) {
        hours.rotate_left(1);
    }

    let counts: Vec<Vec<usize>> = rows
        .keys()
        .map(|&row| {
            hours
                .iter()
                .map(|&hour| cells.get(&(row, hour)).copied().unwrap_or(0))
                .collect()
        })
        .collect();

    Heatmap {
        days: rows.values().map(|&name| name.to_string()).collect(),
        periods: hours
            .iter()
            .map(|h| h.map_or_else(|| UNKNOWN.to_string(), period_label))
            .collect(),
        counts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::analytics::test_support::record;

    // 2024-01-01 is a Monday.
    fn sample() -> Vec<MessageRecord> {
        vec![
            record("Alice", "a", "2024-01-03", "15:10"),
            record("Bob", "b", "2024-01-01", "15:20"),
            record("Alice", "c", "2024-01-03", "15:30"),
            record("Alice", "d", "2024-01-07", "23:00"),
            record("Bob", "e", "2024-02-05", "00:05"),
            record("Bob", "f", "2024-01-01", "bad"),
            record("Bob", "g", "bad", "10:00"),
        ]
    }

    #[test]
    fn test_week_activity_map() {
        let map = week_activity_map(&sample(), &Selection::Overall);
        assert_eq!(
            map,
            vec![
                ("Monday".to_string(), 3),
                ("Wednesday".to_string(), 2),
                ("Sunday".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_month_activity_map() {
        let map = month_activity_map(&sample(), &Selection::sender("Bob"));
        assert_eq!(map, vec![("January".to_string(), 2), ("February".to_string(), 1)]);
    }

    #[test]
    fn test_heatmap_layout() {
        let heatmap = activity_heatmap(&sample(), &Selection::Overall);
        assert_eq!(heatmap.days, vec!["Monday", "Wednesday", "Sunday"]);
        assert_eq!(heatmap.periods, vec!["00-1", "15-16", "23-00", "unknown"]);
        assert_eq!(heatmap.counts.len(), 3);
        assert!(heatmap.counts.iter().all(|row| row.len() == 4));
    }

    #[test]
    fn test_heatmap_cells() {
        let heatmap = activity_heatmap(&sample(), &Selection::Overall);
        assert_eq!(heatmap.get("Wednesday", "15-16"), 2);
        assert_eq!(heatmap.get("Monday", "15-16"), 1);
        assert_eq!(heatmap.get("Monday", "00-1"), 1);
        assert_eq!(heatmap.get("Monday", "unknown"), 1);
        assert_eq!(heatmap.get("Sunday", "23-00"), 1);
        assert_eq!(heatmap.get("Sunday", "15-16"), 0);
        assert_eq!(heatmap.get("Friday", "15-16"), 0);
        // The dateless record has no row.
        assert_eq!(heatmap.total(), 6);
    }

    #[test]
    fn test_empty_heatmap() {
        let heatmap = activity_heatmap(&[], &Selection::Overall);
        assert!(heatmap.is_empty());
        assert_eq!(heatmap.total(), 0);
    }
}
