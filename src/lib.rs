//! # Tapedeck
//!
//! Serialization core for an HTTP interaction recorder.
//!
//! Tapedeck converts captured request/response data into a stable on-disk
//! text representation and back, and provides a scoped mechanism for
//! temporarily disabling HTTP interception so a real network call can be
//! made from code that otherwise talks to a patched client.
//!
//! ## Quick Start
//!
//! ```
//! use tapedeck::prelude::*;
//!
//! // Pick a codec from the cassette file extension
//! let codec = tapedeck::codec::from_extension(".json");
//!
//! // Encode an interaction and read it back, byte-for-byte
//! let interaction = Value::str("café");
//! let text = codec.encode(&interaction)?;
//! assert_eq!(codec.decode(&text)?, interaction);
//! # Ok::<(), tapedeck::CodecError>(())
//! ```
//!
//! ## Subsystems
//!
//! - [`codec`] - the [`Codec`] trait, [`JsonCodec`] / [`YamlCodec`], and
//!   the format/extension resolver with its legacy fallback-to-YAML
//!   contract
//! - [`intercept`] - [`UnpatchedScope`], the guaranteed-restore toggle
//!   around the external patching engine
//!
//! The interception engine, cassette file storage, and record/replay
//! policy are collaborators, not part of this crate.

#![warn(missing_docs)]

pub mod prelude;

pub use tapedeck_codec as codec;
pub use tapedeck_core as core;
pub use tapedeck_intercept as intercept;

// Re-export the main types
pub use tapedeck_codec::{Codec, CodecError, JsonCodec, YamlCodec};
pub use tapedeck_core::{ByteString, NonLatin1Error, Value, TEXT_ENCODING};
pub use tapedeck_intercept::{
    without_interception, InterceptError, InterceptionFlag, InterceptionState, PatchError,
    Patcher, UnpatchedScope,
};
