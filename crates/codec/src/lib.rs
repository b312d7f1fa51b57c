//! Cassette document codecs for tapedeck
//!
//! This crate converts a recorded interaction ([`Value`]) to its on-disk
//! text form and back. Two formats are supported:
//!
//! | Format | Codec | Extension |
//! |--------|------------|-----------|
//! | JSON | [`JsonCodec`] | `.json` |
//! | YAML | [`YamlCodec`] | `.yaml` |
//!
//! A codec is picked dynamically, either from a declared format name or
//! from a cassette file extension (see [`from_format`] / [`from_extension`]).
//! Unrecognized inputs fall back to YAML; that fallback is a compatibility
//! contract inherited from older cassette files and is kept deliberately.
//! The `*_strict` resolvers error instead, for callers that would rather
//! catch a typo than silently write YAML.
//!
//! ## Byte normalization
//!
//! Document parsers yield Unicode text, but cassette consumers need the
//! raw payload bytes. After parsing, every text scalar (keys and values)
//! is normalized into a [`ByteString`](tapedeck_core::ByteString) through
//! the fixed ISO-8859-1 mapping. Documents written by [`Codec::encode`]
//! only contain chars that map back to single bytes, so normalization
//! never fails on our own output.
//!
//! ## Example
//!
//! ```
//! use tapedeck_codec::{from_extension, Codec};
//! use tapedeck_core::Value;
//!
//! let codec = from_extension(".json");
//! let text = codec.encode(&Value::str("café")).unwrap();
//! let back = codec.decode(&text).unwrap();
//! assert_eq!(back, Value::str("café"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod json;
mod resolve;
mod yaml;

pub use error::CodecError;
pub use json::{JsonCodec, JSON};
pub use resolve::{
    from_extension, from_extension_strict, from_format, from_format_strict, is_supported_format,
    SUPPORTED_FORMATS,
};
pub use yaml::{YamlCodec, YAML};

use tapedeck_core::Value;

/// A format-specific encoder/decoder pair.
///
/// Implementations are stateless: every call re-serializes from scratch
/// and no state is shared between codecs. `encode` and `decode` are the
/// only data-plane operations; a failed `decode` leaves nothing mutated.
pub trait Codec: Send + Sync {
    /// Declared format name (`"json"` / `"yaml"`)
    fn format_name(&self) -> &'static str;

    /// Canonical cassette file extension (`".json"` / `".yaml"`)
    fn file_ext(&self) -> &'static str;

    /// Serialize a value to document text
    fn encode(&self, value: &Value) -> Result<String, CodecError>;

    /// Parse document text back to a byte-normalized value
    fn decode(&self, text: &str) -> Result<Value, CodecError>;
}

impl std::fmt::Debug for dyn Codec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Codec")
            .field("format", &self.format_name())
            .finish()
    }
}
