//! Codec error types
//!
//! Decode errors propagate to the caller unmodified; the codecs are pure
//! functions, so a failed call leaves no partial state behind.

use tapedeck_core::NonLatin1Error;
use thiserror::Error;

/// Errors raised while encoding or decoding a cassette document.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Malformed JSON input
    #[error("malformed JSON document: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed YAML input
    #[error("malformed YAML document: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A document scalar could not be byte-normalized.
    ///
    /// Only reachable on foreign or hand-edited documents; text written
    /// by `encode` stays inside ISO-8859-1 by construction.
    #[error("text normalization failed: {0}")]
    NonLatin1(#[from] NonLatin1Error),

    /// NaN and infinities have no JSON number representation
    #[error("non-finite float {0} has no JSON representation")]
    NonFiniteFloat(f64),

    /// A document mapping used a non-string key
    #[error("mapping key has type {0}, cassette keys must be strings")]
    NonStringKey(&'static str),

    /// A YAML document carried a `!tag` directive.
    ///
    /// Tags are how unrestricted YAML loaders get talked into arbitrary
    /// object construction; cassette documents never need them, so they
    /// are rejected outright.
    #[error("YAML tag {0} is not allowed in cassette documents")]
    YamlTag(String),

    /// Strict resolution was asked for an unknown format or extension
    #[error("unknown cassette format: {0:?}")]
    UnknownFormat(String),
}
