use thiserror::Error;

/// Schema and codec errors.
///
/// All variants are deterministic validation failures carrying enough
/// context (field name, expected vs. actual) to diagnose without
/// re-running. Encode and decode never partially succeed: on error no
/// output is produced.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    /// Buffer length does not equal the schema's total width.
    #[error("buffer does not match schema '{schema}': expected {expected} bytes, got {actual}")]
    SchemaMismatch {
        schema: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A fixed-bytes value has the wrong length for its field.
    #[error("field '{field}' expects exactly {expected} bytes, got {actual}")]
    FieldWidthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A string's UTF-8 encoding exceeds its field width.
    #[error("string for field '{field}' is {actual} bytes, maximum is {max}")]
    StringTooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    /// A numeric value does not fit the field's integer width.
    #[error("value {value} for field '{field}' exceeds maximum {max}")]
    NumericOverflow {
        field: &'static str,
        value: u64,
        max: u64,
    },

    /// A boolean byte was neither 0 nor 1.
    #[error("field '{field}' holds invalid boolean byte {value:#04x}")]
    InvalidBoolean { field: &'static str, value: u8 },

    /// Lookup of a record-type name that was never defined.
    #[error("unknown schema '{0}'")]
    UnknownSchema(String),

    /// Attempt to re-define an existing record-type name. Schemas are
    /// append-only; a layout change requires a new type name.
    #[error("schema '{0}' is already defined")]
    SchemaAlreadyDefined(&'static str),

    /// The record lacks a field the schema requires.
    #[error("record is missing field '{field}'")]
    MissingField { field: &'static str },

    /// The record value's variant does not match the field's type.
    #[error("field '{field}' expects a {expected} value, got {actual}")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
        actual: &'static str,
    },

    /// String field bytes are not valid UTF-8.
    #[error("field '{field}' does not hold valid UTF-8")]
    InvalidUtf8 { field: &'static str },
}
