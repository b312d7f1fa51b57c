//! JSON codec
//!
//! Encoding maps each [`ByteString`] scalar to its ISO-8859-1 text form
//! and serializes with serde_json, which writes non-ASCII chars literally
//! rather than as `\uXXXX` escapes. Decoding parses with serde_json and
//! then runs the byte-normalization walk: every string in the parsed tree
//! (keys and values) is converted back into a [`ByteString`], recursing
//! into arrays element-by-element and objects key-then-value per entry.

use crate::{Codec, CodecError};
use std::collections::HashMap;
use tapedeck_core::{ByteString, Value};

/// Shared JSON codec instance
pub static JSON: JsonCodec = JsonCodec;

/// JSON codec for storing HTTP interactions in plain text.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn format_name(&self) -> &'static str {
        "json"
    }

    fn file_ext(&self) -> &'static str {
        ".json"
    }

    fn encode(&self, value: &Value) -> Result<String, CodecError> {
        let doc = to_document(value)?;
        Ok(serde_json::to_string(&doc)?)
    }

    fn decode(&self, text: &str) -> Result<Value, CodecError> {
        let doc: serde_json::Value = serde_json::from_str(text)?;
        normalize(doc)
    }
}

/// Lift a value into the serde_json document model
fn to_document(value: &Value) -> Result<serde_json::Value, CodecError> {
    Ok(match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Int(i) => serde_json::Value::Number((*i).into()),
        Value::Float(f) => serde_json::Number::from_f64(*f)
            .map(serde_json::Value::Number)
            .ok_or(CodecError::NonFiniteFloat(*f))?,
        Value::Str(s) => serde_json::Value::String(s.to_text()),
        Value::Seq(seq) => serde_json::Value::Array(
            seq.iter().map(to_document).collect::<Result<_, _>>()?,
        ),
        Value::Map(map) => {
            let mut obj = serde_json::Map::new();
            for (key, val) in map {
                obj.insert(key.to_text(), to_document(val)?);
            }
            serde_json::Value::Object(obj)
        }
    })
}

/// Byte-normalize a parsed JSON tree.
///
/// serde_json hands back abstract Unicode strings; cassette consumers
/// need the raw bytes of the recorded payload, so every string scalar is
/// folded back through the ISO-8859-1 mapping.
fn normalize(doc: serde_json::Value) -> Result<Value, CodecError> {
    Ok(match doc {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => number_to_value(&n),
        serde_json::Value::String(s) => Value::Str(ByteString::from_text(&s)?),
        serde_json::Value::Array(items) => Value::Seq(
            items.into_iter().map(normalize).collect::<Result<_, _>>()?,
        ),
        serde_json::Value::Object(obj) => {
            let mut map = HashMap::with_capacity(obj.len());
            for (key, val) in obj {
                // Key first, then value, per entry
                let key = ByteString::from_text(&key)?;
                let val = normalize(val)?;
                map.insert(key, val);
            }
            Value::Map(map)
        }
    })
}

fn number_to_value(n: &serde_json::Number) -> Value {
    if let Some(i) = n.as_i64() {
        Value::Int(i)
    } else if let Some(f) = n.as_f64() {
        Value::Float(f)
    } else {
        // u64 beyond i64::MAX with no f64 rendering does not occur in
        // practice; keep the arm total anyway
        Value::Null
    }
}
