//! Byte-oriented strings with ISO-8859-1 text semantics
//!
//! A [`ByteString`] is an owned byte buffer that can be rendered as text
//! and reconstructed from text without loss, because ISO-8859-1 maps each
//! byte 0-255 to exactly one char U+0000-U+00FF.
//!
//! ## Conversion rules
//!
//! - `to_text` (bytes -> chars) is total: every byte has a char.
//! - `from_text` (chars -> bytes) is partial: a char above U+00FF has no
//!   byte and fails with [`NonLatin1Error`].
//!
//! Documents produced by a tapedeck codec only ever contain chars in the
//! U+0000-U+00FF range, so `from_text` cannot fail on them. It can fail
//! on hand-edited or foreign documents.

use thiserror::Error;

/// A scalar contained a char outside ISO-8859-1.
///
/// Raised by [`ByteString::from_text`] when a document scalar cannot be
/// byte-normalized. The offending char and its position are reported so
/// the bad scalar can be located in the source document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("char U+{codepoint:04X} at position {index} is outside ISO-8859-1")]
pub struct NonLatin1Error {
    /// Unicode code point of the offending char
    pub codepoint: u32,
    /// Char index within the scalar
    pub index: usize,
}

/// An owned byte buffer with ISO-8859-1 text semantics.
///
/// Equality and hashing are over the raw bytes. Display renders the
/// ISO-8859-1 text form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ByteString(Vec<u8>);

impl ByteString {
    /// Create an empty byte string
    pub fn new() -> Self {
        ByteString(Vec::new())
    }

    /// Borrow the raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consume into the raw bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Number of bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the byte string is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render as ISO-8859-1 text (byte -> char, total).
    ///
    /// The result contains only chars in U+0000-U+00FF and round-trips
    /// through [`ByteString::from_text`].
    pub fn to_text(&self) -> String {
        self.0.iter().map(|&b| b as char).collect()
    }

    /// Reconstruct from ISO-8859-1 text (char -> byte, partial).
    ///
    /// Fails with [`NonLatin1Error`] on the first char above U+00FF.
    pub fn from_text(text: &str) -> Result<Self, NonLatin1Error> {
        let mut bytes = Vec::with_capacity(text.len());
        for (index, c) in text.chars().enumerate() {
            let codepoint = c as u32;
            if codepoint > 0xFF {
                return Err(NonLatin1Error { codepoint, index });
            }
            bytes.push(codepoint as u8);
        }
        Ok(ByteString(bytes))
    }
}

impl From<Vec<u8>> for ByteString {
    fn from(bytes: Vec<u8>) -> Self {
        ByteString(bytes)
    }
}

impl From<&[u8]> for ByteString {
    fn from(bytes: &[u8]) -> Self {
        ByteString(bytes.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for ByteString {
    fn from(bytes: &[u8; N]) -> Self {
        ByteString(bytes.to_vec())
    }
}

impl std::fmt::Display for ByteString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // === Round trips ===

    #[test]
    fn test_ascii_round_trip() {
        let s = ByteString::from(b"hello world");
        let text = s.to_text();
        assert_eq!(text, "hello world");
        assert_eq!(ByteString::from_text(&text).unwrap(), s);
    }

    #[test]
    fn test_all_byte_values_round_trip() {
        let bytes: Vec<u8> = (0..=255).collect();
        let s = ByteString::from(bytes.clone());
        let text = s.to_text();
        let back = ByteString::from_text(&text).unwrap();
        assert_eq!(back.as_bytes(), &bytes[..]);
    }

    #[test]
    fn test_empty_round_trip() {
        let s = ByteString::new();
        assert!(s.is_empty());
        assert_eq!(ByteString::from_text(&s.to_text()).unwrap(), s);
    }

    // === to_text ===

    #[test]
    fn test_high_byte_maps_to_latin1_char() {
        // 0xE9 is 'é' in ISO-8859-1
        let s = ByteString::from(b"caf\xe9");
        assert_eq!(s.to_text(), "café");
    }

    #[test]
    fn test_text_length_counts_chars_not_utf8_bytes() {
        let s = ByteString::from(b"caf\xe9");
        assert_eq!(s.len(), 4);
        // UTF-8 spells 'é' with two bytes; char count stays 4
        assert_eq!(s.to_text().chars().count(), 4);
        assert_eq!(s.to_text().len(), 5);
    }

    // === from_text ===

    #[test]
    fn test_from_text_latin1_char() {
        let s = ByteString::from_text("café").unwrap();
        assert_eq!(s.as_bytes(), b"caf\xe9");
    }

    #[test]
    fn test_from_text_rejects_char_above_latin1() {
        let err = ByteString::from_text("ab\u{0100}c").unwrap_err();
        assert_eq!(
            err,
            NonLatin1Error {
                codepoint: 0x100,
                index: 2
            }
        );
    }

    #[test]
    fn test_from_text_rejects_cjk() {
        let err = ByteString::from_text("日本語").unwrap_err();
        assert_eq!(err.index, 0);
        assert_eq!(err.codepoint, '日' as u32);
    }

    // === Equality ===

    #[test]
    fn test_equality_is_over_bytes() {
        assert_eq!(ByteString::from(b"abc"), ByteString::from(vec![97, 98, 99]));
        assert_ne!(ByteString::from(b"abc"), ByteString::from(b"abd"));
    }

    // === Properties ===

    proptest::proptest! {
        #[test]
        fn prop_any_bytes_round_trip_through_text(
            bytes in proptest::collection::vec(proptest::prelude::any::<u8>(), 0..512)
        ) {
            let s = ByteString::from(bytes.clone());
            let back = ByteString::from_text(&s.to_text()).unwrap();
            proptest::prop_assert_eq!(back.into_bytes(), bytes);
        }
    }
}
