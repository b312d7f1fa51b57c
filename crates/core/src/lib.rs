//! Core value model for tapedeck
//!
//! This crate defines the decoded shape of a recorded HTTP interaction
//! ([`Value`]) and the byte-oriented string type it is built from
//! ([`ByteString`]). Everything a cassette codec reads or writes passes
//! through these two types.
//!
//! ## Why byte-oriented strings
//!
//! HTTP bodies and headers are byte sequences, not Unicode text, but
//! cassettes are stored in text formats (JSON, YAML). The bridge is
//! ISO-8859-1: every byte value 0-255 maps uniquely to one char
//! U+0000-U+00FF, so arbitrary payload bytes survive a trip through a
//! text document with no loss. [`ByteString`] owns that mapping;
//! [`TEXT_ENCODING`] names it.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod bytestr;
mod value;

pub use bytestr::{ByteString, NonLatin1Error};
pub use value::Value;

/// The fixed text normalization encoding.
///
/// Part of the on-disk format contract: cassette codecs always map bytes
/// to document text and back through this single-byte encoding. It must
/// not vary per call.
pub const TEXT_ENCODING: &str = "ISO-8859-1";
