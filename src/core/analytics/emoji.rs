use super::{EmojiTable, Selection, tally};
use crate::MessageRecord;

/// Every emoji character in the selection with its count, highest first.
///
/// Each character is classified on its own, so a multi-codepoint sequence
/// contributes its emoji components separately. Ties keep the order in which
/// emojis were first seen.
pub fn emoji_frequency(
    records: &[MessageRecord],
    selection: &Selection,
    table: &dyn EmojiTable,
    include_system: bool,
) -> Vec<(String, usize)> {
    tally(
        selection
            .select(records)
            .filter(|r| include_system || !r.sender().is_system())
            .flat_map(|r| r.body().chars())
            .filter(|&c| table.is_emoji(c)),
    )
    .into_iter()
    .map(|(c, count)| (c.to_string(), count))
    .collect()
}
