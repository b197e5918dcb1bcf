//! Record-type layout descriptors.
//!
//! A [`Schema`] is an ordered sequence of fixed-width fields; its total
//! width is computed from the field list and is the only valid buffer
//! length for decoding. Layouts are declared explicitly: there is no
//! runtime type registry keyed on constructors, no reflection. A layout
//! change requires a new record-type name.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::error::CodecError;

/// Type tag of a single field. The payload of `Bytes` and `Str` is the
/// fixed byte width of the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    U8,
    U64,
    Bytes(usize),
    Str(usize),
    Bool,
}

impl FieldType {
    /// Encoded width of this field, in bytes.
    pub fn width(&self) -> usize {
        match *self {
            FieldType::U8 | FieldType::Bool => 1,
            FieldType::U64 => 8,
            FieldType::Bytes(n) | FieldType::Str(n) => n,
        }
    }

    /// Human-readable tag name, used in error context.
    pub fn name(&self) -> &'static str {
        match self {
            FieldType::U8 => "u8",
            FieldType::U64 => "u64",
            FieldType::Bytes(_) => "bytes",
            FieldType::Str(_) => "string",
            FieldType::Bool => "bool",
        }
    }
}

/// One named, fixed-width field. Immutable once part of a schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub ty: FieldType,
}

impl FieldSpec {
    pub fn new(name: &'static str, ty: FieldType) -> Self {
        FieldSpec { name, ty }
    }

    pub fn u8(name: &'static str) -> Self {
        Self::new(name, FieldType::U8)
    }

    pub fn u64(name: &'static str) -> Self {
        Self::new(name, FieldType::U64)
    }

    pub fn bytes(name: &'static str, width: usize) -> Self {
        Self::new(name, FieldType::Bytes(width))
    }

    pub fn str(name: &'static str, width: usize) -> Self {
        Self::new(name, FieldType::Str(width))
    }

    pub fn bool(name: &'static str) -> Self {
        Self::new(name, FieldType::Bool)
    }
}

/// Ordered field layout for one record type.
///
/// Field order and widths are fixed for the lifetime of the record type.
/// Offsets are implicit: each field starts where the previous one ends,
/// with no delimiters and no length prefixes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    name: &'static str,
    fields: Vec<FieldSpec>,
    width: usize,
}

impl Schema {
    pub fn new(name: &'static str, fields: Vec<FieldSpec>) -> Self {
        let width = fields.iter().map(|f| f.ty.width()).sum();
        Schema {
            name,
            fields,
            width,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Total encoded width: the sum of all field widths, and the only
    /// buffer length [`crate::decode`] accepts.
    pub fn width(&self) -> usize {
        self.width
    }
}

/// Append-only table of record-type layouts.
///
/// Populate the registry fully at startup, then share it read-only; all
/// lookups after that point are safe from any number of threads.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, Schema>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new record-type layout.
    ///
    /// Fails with [`CodecError::SchemaAlreadyDefined`] if `name` is taken;
    /// existing entries are never replaced.
    pub fn define(
        &mut self,
        name: &'static str,
        fields: Vec<FieldSpec>,
    ) -> Result<&Schema, CodecError> {
        match self.schemas.entry(name) {
            Entry::Occupied(_) => Err(CodecError::SchemaAlreadyDefined(name)),
            Entry::Vacant(slot) => Ok(slot.insert(Schema::new(name, fields))),
        }
    }

    /// Look up a previously defined layout by record-type name.
    pub fn lookup(&self, name: &str) -> Result<&Schema, CodecError> {
        self.schemas
            .get(name)
            .ok_or_else(|| CodecError::UnknownSchema(name.to_owned()))
    }
}
