use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Selection;
use crate::MessageRecord;

/// Messages in one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyCount {
    pub year: i32,
    pub month_num: u32,
    pub month: String,
    pub count: usize,
    /// Display label, `"<Month>-<year>"`.
    pub label: String,
}

/// Messages on one calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: usize,
}

/// Message counts per month, oldest first.
///
/// Records without a date are not counted.
pub fn monthly_timeline(records: &[MessageRecord], selection: &Selection) -> Vec<MonthlyCount> {
    let mut months: BTreeMap<(i32, u32), (&str, usize)> = BTreeMap::new();
    for calendar in selection.select(records).filter_map(MessageRecord::calendar) {
        months
            .entry((calendar.year, calendar.month_num))
            .or_insert((calendar.month.as_str(), 0))
            .1 += 1;
    }

    months
        .into_iter()
        .map(|((year, month_num), (month, count))| MonthlyCount {
            year,
            month_num,
            month: month.to_string(),
            count,
            label: format!("{month}-{year}"),
        })
        .collect()
}

/// Message counts per calendar date, oldest first.
///
/// Records without a date are not counted.
pub fn daily_timeline(records: &[MessageRecord], selection: &Selection) -> Vec<DailyCount> {
    let mut days: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for date in selection.select(records).filter_map(MessageRecord::only_date) {
        *days.entry(date).or_insert(0) += 1;
    }

    days.into_iter()
        .map(|(date, count)| DailyCount { date, count })
        .collect()
}
