use serde::{Deserialize, Serialize};

use super::{LinkDetector, Selection};
use crate::MessageRecord;

/// Headline counts for one selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Records in the selection.
    pub messages: usize,
    /// Whitespace-separated tokens over all bodies.
    pub words: usize,
    /// Bodies exactly equal to the media placeholder.
    pub media: usize,
    /// URL-shaped substrings over all bodies.
    pub links: usize,
}

/// Computes message, word, media and link counts.
pub fn summary(
    records: &[MessageRecord],
    selection: &Selection,
    media_placeholder: &str,
    links: &dyn LinkDetector,
) -> Summary {
    selection
        .select(records)
        .fold(Summary::default(), |mut acc, record| {
            acc.messages += 1;
            acc.words += record.word_count();
            if record.is_media(media_placeholder) {
                acc.media += 1;
            }
            acc.links += links.count_links(record.body());
            acc
        })
}
