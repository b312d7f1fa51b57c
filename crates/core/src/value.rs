//! Value types for tapedeck
//!
//! This module defines the canonical [`Value`] type: the decoded shape of
//! a recorded request/response pair. Cassette codecs encode a `Value` to
//! document text and decode document text back to a `Value`.
//!
//! Text scalars are always [`ByteString`]s. The codecs normalize every
//! document string (keys and values alike) into byte form on decode, so a
//! `Value` read back from disk carries the exact payload bytes that were
//! recorded, not an abstract Unicode rendering of them.

use crate::ByteString;
use std::collections::HashMap;

/// Canonical tapedeck value type
///
/// ## The Seven Types
///
/// 1. `Null` - absence of value
/// 2. `Bool` - boolean true or false
/// 3. `Int` - 64-bit signed integer
/// 4. `Float` - 64-bit IEEE-754 floating point
/// 5. `Str` - byte-oriented string (ISO-8859-1 text semantics)
/// 6. `Seq` - ordered sequence of values
/// 7. `Map` - byte-string-keyed map of values
///
/// ## Equality Rules
///
/// - Different types are never equal (no type coercion)
/// - `Int(1)` != `Float(1.0)`
/// - Float uses IEEE-754 equality: `NaN != NaN`
/// - `Str` equality is over raw bytes
/// - `Map` key order is irrelevant; keys are unique
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absence of value
    Null,

    /// Boolean true or false
    Bool(bool),

    /// 64-bit signed integer
    Int(i64),

    /// 64-bit IEEE-754 floating point
    Float(f64),

    /// Byte-oriented string
    Str(ByteString),

    /// Ordered sequence of values
    Seq(Vec<Value>),

    /// Byte-string-keyed map of values
    Map(HashMap<ByteString, Value>),
}

impl Value {
    /// Returns the type name as a string (for error messages)
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Bool(_) => "Bool",
            Value::Int(_) => "Int",
            Value::Float(_) => "Float",
            Value::Str(_) => "Str",
            Value::Seq(_) => "Seq",
            Value::Map(_) => "Map",
        }
    }

    /// Build a `Str` value from ISO-8859-1 text.
    ///
    /// Panics on chars above U+00FF, so this is a literal/test helper;
    /// decode paths go through [`ByteString::from_text`] instead.
    pub fn str(text: &str) -> Value {
        match ByteString::from_text(text) {
            Ok(s) => Value::Str(s),
            Err(e) => panic!("Value::str: {e}"),
        }
    }

    /// Check if this value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Try to get as bool
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as i64
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get as f64
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get as a byte string
    pub fn as_str(&self) -> Option<&ByteString> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as sequence slice
    pub fn as_seq(&self) -> Option<&[Value]> {
        match self {
            Value::Seq(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as map reference
    pub fn as_map(&self) -> Option<&HashMap<ByteString, Value>> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Look up a map entry by ISO-8859-1 key text
    pub fn get(&self, key: &str) -> Option<&Value> {
        let key = ByteString::from_text(key).ok()?;
        self.as_map()?.get(&key)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<ByteString> for Value {
    fn from(s: ByteString) -> Self {
        Value::Str(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(seq: Vec<Value>) -> Self {
        Value::Seq(seq)
    }
}

impl From<HashMap<ByteString, Value>> for Value {
    fn from(map: HashMap<ByteString, Value>) -> Self {
        Value::Map(map)
    }
}
