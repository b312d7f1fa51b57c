//! YAML codec
//!
//! The fallback format: anything that does not resolve to another codec
//! is read and written as YAML. Encoding uses serde_yaml's standard block
//! representation; decoding parses and then runs the same
//! byte-normalization walk as the JSON codec, since serde_yaml also hands
//! back abstract Unicode strings.
//!
//! serde_yaml never executes construction directives the way permissive
//! YAML loaders can, and `!tag`-bearing documents are rejected outright,
//! so parsing untrusted cassette files is safe here.

use crate::{Codec, CodecError};
use std::collections::HashMap;
use tapedeck_core::{ByteString, Value};

/// Shared YAML codec instance
pub static YAML: YamlCodec = YamlCodec;

/// YAML codec for storing HTTP interactions in plain text.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlCodec;

impl Codec for YamlCodec {
    fn format_name(&self) -> &'static str {
        "yaml"
    }

    fn file_ext(&self) -> &'static str {
        ".yaml"
    }

    fn encode(&self, value: &Value) -> Result<String, CodecError> {
        let doc = to_document(value);
        Ok(serde_yaml::to_string(&doc)?)
    }

    fn decode(&self, text: &str) -> Result<Value, CodecError> {
        let doc: serde_yaml::Value = serde_yaml::from_str(text)?;
        normalize(doc)
    }
}

/// Lift a value into the serde_yaml document model.
///
/// Total, unlike the JSON side: YAML has spellings for NaN and the
/// infinities (`.nan`, `.inf`, `-.inf`).
fn to_document(value: &Value) -> serde_yaml::Value {
    match value {
        Value::Null => serde_yaml::Value::Null,
        Value::Bool(b) => serde_yaml::Value::Bool(*b),
        Value::Int(i) => serde_yaml::Value::Number((*i).into()),
        Value::Float(f) => serde_yaml::Value::Number((*f).into()),
        Value::Str(s) => serde_yaml::Value::String(s.to_text()),
        Value::Seq(seq) => serde_yaml::Value::Sequence(seq.iter().map(to_document).collect()),
        Value::Map(map) => {
            let mut mapping = serde_yaml::Mapping::new();
            for (key, val) in map {
                mapping.insert(
                    serde_yaml::Value::String(key.to_text()),
                    to_document(val),
                );
            }
            serde_yaml::Value::Mapping(mapping)
        }
    }
}

/// Byte-normalize a parsed YAML tree (same walk as the JSON codec).
fn normalize(doc: serde_yaml::Value) -> Result<Value, CodecError> {
    Ok(match doc {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(b) => Value::Bool(b),
        serde_yaml::Value::Number(n) => number_to_value(&n),
        serde_yaml::Value::String(s) => Value::Str(ByteString::from_text(&s)?),
        serde_yaml::Value::Sequence(items) => Value::Seq(
            items.into_iter().map(normalize).collect::<Result<_, _>>()?,
        ),
        serde_yaml::Value::Mapping(mapping) => {
            let mut map = HashMap::with_capacity(mapping.len());
            for (key, val) in mapping {
                let key = match key {
                    serde_yaml::Value::String(s) => ByteString::from_text(&s)?,
                    other => return Err(CodecError::NonStringKey(yaml_type_name(&other))),
                };
                let val = normalize(val)?;
                map.insert(key, val);
            }
            Value::Map(map)
        }
        serde_yaml::Value::Tagged(tagged) => {
            return Err(CodecError::YamlTag(tagged.tag.to_string()))
        }
    })
}

fn number_to_value(n: &serde_yaml::Number) -> Value {
    if let Some(i) = n.as_i64() {
        Value::Int(i)
    } else if let Some(f) = n.as_f64() {
        Value::Float(f)
    } else {
        Value::Null
    }
}

fn yaml_type_name(v: &serde_yaml::Value) -> &'static str {
    match v {
        serde_yaml::Value::Null => "null",
        serde_yaml::Value::Bool(_) => "bool",
        serde_yaml::Value::Number(_) => "number",
        serde_yaml::Value::String(_) => "string",
        serde_yaml::Value::Sequence(_) => "sequence",
        serde_yaml::Value::Mapping(_) => "mapping",
        serde_yaml::Value::Tagged(_) => "tagged",
    }
}
