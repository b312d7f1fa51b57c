//! Convenient imports for tapedeck.
//!
//! Re-exports the most commonly used types so you can get started with a
//! single import:
//!
//! ```
//! use tapedeck::prelude::*;
//!
//! let codec = tapedeck::codec::from_format("json");
//! let text = codec.encode(&Value::Int(200)).unwrap();
//! assert_eq!(text, "200");
//! ```

// Value model
pub use crate::{ByteString, Value, TEXT_ENCODING};

// Codecs
pub use crate::codec::{
    from_extension, from_format, is_supported_format, Codec, CodecError, JsonCodec, YamlCodec,
};

// Interception toggle
pub use crate::intercept::{
    without_interception, InterceptError, InterceptionFlag, InterceptionState, PatchError,
    Patcher, UnpatchedScope,
};
