//! Pluggable classifiers for links and emoji characters.
//!
//! Both are table- or heuristic-driven and backed by external crates by
//! default; queries take them as trait objects so callers can swap in their
//! own rules.

use linkify::{LinkFinder, LinkKind};

/// Finds URL-shaped substrings in message text.
pub trait LinkDetector: Send + Sync {
    /// Returns the URL-shaped substrings of `text`, in order.
    fn find_links<'t>(&self, text: &'t str) -> Vec<&'t str>;

    fn count_links(&self, text: &str) -> usize {
        self.find_links(text).len()
    }
}

/// [`LinkDetector`] backed by `linkify`.
///
/// Scheme-prefixed URLs and bare domains (`example.com/page`) both count.
/// Email addresses do not.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkifyDetector;

impl LinkifyDetector {
    fn finder() -> LinkFinder {
        let mut finder = LinkFinder::new();
        finder.kinds(&[LinkKind::Url]);
        finder.url_must_have_scheme(false);
        finder
    }
}

impl LinkDetector for LinkifyDetector {
    fn find_links<'t>(&self, text: &'t str) -> Vec<&'t str> {
        Self::finder().links(text).map(|link| link.as_str()).collect()
    }
}

/// Emoji membership table.
pub trait EmojiTable: Send + Sync {
    /// Returns `true` if `c` on its own is an emoji.
    fn is_emoji(&self, c: char) -> bool;
}

/// Fitzpatrick skin-tone modifiers, U+1F3FB to U+1F3FF.
const SKIN_TONES: std::ops::RangeInclusive<char> = '\u{1F3FB}'..='\u{1F3FF}';

/// [`EmojiTable`] backed by the Unicode emoji list in the `emojis` crate.
///
/// Skin-tone modifiers count as emojis of their own, so `👍🏽` yields both
/// `👍` and `🏽`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeEmojiTable;

impl EmojiTable for UnicodeEmojiTable {
    fn is_emoji(&self, c: char) -> bool {
        // Plain ASCII digits and symbols are keycap bases, not emojis.
        if c.is_ascii() {
            return false;
        }
        if SKIN_TONES.contains(&c) {
            return true;
        }
        let mut buf = [0u8; 4];
        emojis::get(c.encode_utf8(&mut buf)).is_some()
    }
}
