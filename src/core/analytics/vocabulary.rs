use super::{Selection, tally};
use crate::MessageRecord;
use crate::core::StopWords;

/// Records whose words count: no `SYSTEM` notices, no media placeholders.
fn eligible<'a>(
    records: &'a [MessageRecord],
    selection: &'a Selection,
    media_placeholder: &'a str,
) -> impl Iterator<Item = &'a MessageRecord> + 'a {
    selection
        .select(records)
        .filter(move |r| !r.sender().is_system() && !r.is_media(media_placeholder))
}

/// Lower-cased tokens of one body with stop words removed.
fn content_words(body: &str, stop_words: &StopWords) -> Vec<String> {
    body.to_lowercase()
        .split_whitespace()
        .filter(|w| !stop_words.contains(w))
        .map(str::to_string)
        .collect()
}

/// The `top_n` most frequent words, highest count first.
///
/// Ties keep the order in which words were first seen.
pub fn most_common_words(
    records: &[MessageRecord],
    selection: &Selection,
    stop_words: &StopWords,
    media_placeholder: &str,
    top_n: usize,
) -> Vec<(String, usize)> {
    let mut counts = tally(
        eligible(records, selection, media_placeholder)
            .flat_map(|r| content_words(r.body(), stop_words)),
    );
    counts.truncate(top_n);
    counts
}

/// Stop-word-filtered text of every eligible body, joined by spaces.
///
/// This is the input a word cloud renderer expects.
pub fn cleaned_corpus(
    records: &[MessageRecord],
    selection: &Selection,
    stop_words: &StopWords,
    media_placeholder: &str,
) -> String {
    eligible(records, selection, media_placeholder)
        .map(|r| content_words(r.body(), stop_words).join(" "))
        .collect::<Vec<_>>()
        .join(" ")
}
