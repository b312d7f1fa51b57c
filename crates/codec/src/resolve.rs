//! Codec resolution
//!
//! A codec is picked either from a declared format name (when a cassette
//! is being constructed) or from a file extension (when one is being read
//! or written). Resolution never fails: anything unrecognized falls back
//! to YAML, because old cassette files predate the format field and were
//! always YAML. The fallback is logged so a typo does not degrade fully
//! silently; callers that want a hard error use the `*_strict` variants.

use crate::{Codec, CodecError, JSON, YAML};

/// Format names the resolver recognizes.
///
/// The empty string is the "no declared format" case and resolves to
/// YAML like any other non-JSON input.
pub const SUPPORTED_FORMATS: [&str; 3] = ["json", "yaml", ""];

/// Return whether the format name is supported.
///
/// Purely informational: resolution succeeds for unsupported names too.
pub fn is_supported_format(format: &str) -> bool {
    SUPPORTED_FORMATS.contains(&format)
}

/// Return the codec that corresponds to the declared format name.
pub fn from_format(format: &str) -> &'static dyn Codec {
    match format {
        "json" => &JSON,
        "yaml" | "" => &YAML,
        other => {
            // Default to YAML for legacy cassettes
            tracing::warn!(format = other, "unrecognized cassette format, falling back to YAML");
            &YAML
        }
    }
}

/// Return the codec that corresponds to the file extension.
///
/// Matching is case-insensitive and expects the leading dot (`".json"`,
/// `".YAML"`, ...).
pub fn from_extension(extension: &str) -> &'static dyn Codec {
    let ext = extension.to_ascii_lowercase();
    if ext == JSON.file_ext() {
        &JSON
    } else if ext == YAML.file_ext() {
        &YAML
    } else {
        // Default to YAML for legacy cassettes
        tracing::warn!(
            extension,
            "unrecognized cassette extension, falling back to YAML"
        );
        &YAML
    }
}

/// Strict variant of [`from_format`]: unknown names error instead of
/// falling back.
pub fn from_format_strict(format: &str) -> Result<&'static dyn Codec, CodecError> {
    match format {
        "json" => Ok(&JSON),
        "yaml" | "" => Ok(&YAML),
        other => Err(CodecError::UnknownFormat(other.to_string())),
    }
}

/// Strict variant of [`from_extension`]: unknown extensions error
/// instead of falling back.
pub fn from_extension_strict(extension: &str) -> Result<&'static dyn Codec, CodecError> {
    let ext = extension.to_ascii_lowercase();
    if ext == JSON.file_ext() {
        Ok(&JSON)
    } else if ext == YAML.file_ext() {
        Ok(&YAML)
    } else {
        Err(CodecError::UnknownFormat(extension.to_string()))
    }
}
