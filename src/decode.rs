//! Byte decoding for transcript files.
//!
//! Exports are usually UTF-8, but older phones and some desktop tools write
//! Latin-1. Decoding never fails: bytes that are not valid UTF-8 are read as
//! Latin-1, where every byte maps to the code point of the same value.

/// Decodes transcript bytes as UTF-8, falling back to Latin-1.
///
/// A leading UTF-8 byte order mark is removed.
///
/// # Example
///
/// ```rust
/// use chatstat::decode::decode_transcript;
///
/// assert_eq!(decode_transcript("café".as_bytes().to_vec()), "café");
/// assert_eq!(decode_transcript(vec![b'c', b'a', b'f', 0xE9]), "café");
/// ```
pub fn decode_transcript(bytes: Vec<u8>) -> String {
    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            tracing::debug!(
                valid_up_to = err.utf8_error().valid_up_to(),
                "input is not UTF-8, decoding as Latin-1"
            );
            latin1_to_string(err.as_bytes())
        }
    };

    match text.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => text,
    }
}

/// Maps each byte to the Unicode code point with the same value.
pub fn latin1_to_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}
