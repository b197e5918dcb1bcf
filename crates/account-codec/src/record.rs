//! In-memory counterpart of a binary account blob.

use std::collections::BTreeMap;

/// A single typed field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    U8(u8),
    U64(u64),
    Bytes(Vec<u8>),
    Str(String),
    Bool(bool),
}

impl Value {
    /// Variant tag name, used in error context.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::U8(_) => "u8",
            Value::U64(_) => "u64",
            Value::Bytes(_) => "bytes",
            Value::Str(_) => "string",
            Value::Bool(_) => "bool",
        }
    }
}

/// A named field-to-value mapping conforming to exactly one schema.
///
/// Records are plain owned data: encode/decode produce and consume them,
/// the caller owns them exclusively in between.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: BTreeMap<&'static str, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, for literal record construction.
    pub fn with(mut self, name: &'static str, value: Value) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: &'static str, value: Value) {
        self.fields.insert(name, value);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    // Typed accessors. Each returns None if the field is absent or holds
    // a different variant.

    pub fn get_u8(&self, name: &str) -> Option<u8> {
        match self.get(name) {
            Some(&Value::U8(v)) => Some(v),
            _ => None,
        }
    }

    pub fn get_u64(&self, name: &str) -> Option<u64> {
        match self.get(name) {
            Some(&Value::U64(v)) => Some(v),
            _ => None,
        }
    }

    pub fn get_bytes(&self, name: &str) -> Option<&[u8]> {
        match self.get(name) {
            Some(Value::Bytes(v)) => Some(v),
            _ => None,
        }
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            Some(Value::Str(v)) => Some(v),
            _ => None,
        }
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        match self.get(name) {
            Some(&Value::Bool(v)) => Some(v),
            _ => None,
        }
    }
}
