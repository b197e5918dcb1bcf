//! Schema-driven encode/decode of fixed-layout binary records.
//!
//! Both directions walk the schema's field list in order. Integers are
//! little-endian, strings are left-aligned UTF-8 with zero-fill, bools
//! are a single strict 0/1 byte. A buffer decodes only if its length
//! equals the schema width exactly.

use crate::error::CodecError;
use crate::record::{Record, Value};
use crate::schema::{FieldType, Schema};

/// Encode a record into its fixed binary layout.
///
/// Fields are written strictly in schema order, each occupying exactly
/// its declared width. A record field the schema does not mention is
/// ignored; a schema field the record lacks fails with
/// [`CodecError::MissingField`]. On any error no bytes are returned.
///
/// A `U64` value is accepted for a `u8` field and range-checked; any
/// other variant mismatch is a [`CodecError::TypeMismatch`].
pub fn encode(schema: &Schema, record: &Record) -> Result<Vec<u8>, CodecError> {
    let mut buf = Vec::with_capacity(schema.width());

    for field in schema.fields() {
        let value = record
            .get(field.name)
            .ok_or(CodecError::MissingField { field: field.name })?;

        match (field.ty, value) {
            (FieldType::U8, &Value::U8(v)) => buf.push(v),
            (FieldType::U8, &Value::U64(v)) => {
                let narrow = u8::try_from(v).map_err(|_| CodecError::NumericOverflow {
                    field: field.name,
                    value: v,
                    max: u8::MAX as u64,
                })?;
                buf.push(narrow);
            }
            (FieldType::U64, &Value::U64(v)) => buf.extend_from_slice(&v.to_le_bytes()),
            (FieldType::Bytes(width), Value::Bytes(bytes)) => {
                if bytes.len() != width {
                    return Err(CodecError::FieldWidthMismatch {
                        field: field.name,
                        expected: width,
                        actual: bytes.len(),
                    });
                }
                buf.extend_from_slice(bytes);
            }
            (FieldType::Str(width), Value::Str(s)) => {
                let utf8 = s.as_bytes();
                if utf8.len() > width {
                    return Err(CodecError::StringTooLong {
                        field: field.name,
                        max: width,
                        actual: utf8.len(),
                    });
                }
                // Left-aligned content, zero-filled tail.
                buf.extend_from_slice(utf8);
                buf.resize(buf.len() + (width - utf8.len()), 0);
            }
            (FieldType::Bool, &Value::Bool(v)) => buf.push(v as u8),
            (ty, other) => {
                return Err(CodecError::TypeMismatch {
                    field: field.name,
                    expected: ty.name(),
                    actual: other.type_name(),
                });
            }
        }
    }

    Ok(buf)
}

/// Decode a binary buffer into a record.
///
/// The buffer length must equal the schema's total width exactly; fields
/// are read at fixed offsets in schema order.
///
/// String fields stop at the first zero byte, matching encode's
/// zero-fill convention. Precondition: encoded strings never contain
/// embedded zero bytes; `encode` cannot produce one, but a foreign
/// writer that embeds a NUL will see the remainder of that field
/// silently dropped here rather than filtered around.
pub fn decode(schema: &Schema, bytes: &[u8]) -> Result<Record, CodecError> {
    if bytes.len() != schema.width() {
        return Err(CodecError::SchemaMismatch {
            schema: schema.name(),
            expected: schema.width(),
            actual: bytes.len(),
        });
    }

    let mut record = Record::new();
    let mut offset = 0;

    for field in schema.fields() {
        let width = field.ty.width();
        let raw = &bytes[offset..offset + width];
        offset += width;

        let value = match field.ty {
            FieldType::U8 => Value::U8(raw[0]),
            FieldType::U64 => {
                let mut le = [0u8; 8];
                le.copy_from_slice(raw);
                Value::U64(u64::from_le_bytes(le))
            }
            FieldType::Bytes(_) => Value::Bytes(raw.to_vec()),
            FieldType::Str(_) => {
                let end = raw.iter().position(|&b| b == 0).unwrap_or(raw.len());
                let s = std::str::from_utf8(&raw[..end])
                    .map_err(|_| CodecError::InvalidUtf8 { field: field.name })?;
                Value::Str(s.to_owned())
            }
            FieldType::Bool => match raw[0] {
                0 => Value::Bool(false),
                1 => Value::Bool(true),
                value => {
                    return Err(CodecError::InvalidBoolean {
                        field: field.name,
                        value,
                    });
                }
            },
        };

        record.set(field.name, value);
    }

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldSpec;

    /// Layout exercising every field type:
    /// id(8) ‖ owner(32) ‖ label(12) ‖ live(1) ‖ bump(1) = 54 bytes.
    fn sample_schema() -> Schema {
        Schema::new(
            "sample",
            vec![
                FieldSpec::u64("id"),
                FieldSpec::bytes("owner", 32),
                FieldSpec::str("label", 12),
                FieldSpec::bool("live"),
                FieldSpec::u8("bump"),
            ],
        )
    }

    fn sample_record() -> Record {
        Record::new()
            .with("id", Value::U64(7_000_000_123))
            .with("owner", Value::Bytes(vec![0xCD; 32]))
            .with("label", Value::Str("payout".into()))
            .with("live", Value::Bool(true))
            .with("bump", Value::U8(254))
    }

    // -- encode --------------------------------------------------------------

    #[test]
    fn encode_produces_schema_width() {
        let buf = encode(&sample_schema(), &sample_record()).unwrap();
        assert_eq!(buf.len(), 54);
    }

    #[test]
    fn encode_writes_fields_at_fixed_offsets() {
        let buf = encode(&sample_schema(), &sample_record()).unwrap();

        assert_eq!(u64::from_le_bytes(buf[0..8].try_into().unwrap()), 7_000_000_123);
        assert_eq!(&buf[8..40], &[0xCD; 32]);
        // "payout" then zero-fill to 12.
        assert_eq!(&buf[40..46], b"payout");
        assert_eq!(&buf[46..52], &[0u8; 6]);
        assert_eq!(buf[52], 1);
        assert_eq!(buf[53], 254);
    }

    #[test]
    fn encode_string_at_exact_width_has_no_fill() {
        let schema = Schema::new("s", vec![FieldSpec::str("tag", 4)]);
        let record = Record::new().with("tag", Value::Str("full".into()));
        assert_eq!(encode(&schema, &record).unwrap(), b"full");
    }

    #[test]
    fn encode_oversized_string_fails() {
        let schema = Schema::new("s", vec![FieldSpec::str("tag", 4)]);
        let record = Record::new().with("tag", Value::Str("toolong".into()));
        assert_eq!(
            encode(&schema, &record).unwrap_err(),
            CodecError::StringTooLong {
                field: "tag",
                max: 4,
                actual: 7,
            }
        );
    }

    #[test]
    fn encode_string_limit_counts_utf8_bytes_not_chars() {
        // Four two-byte characters: 4 chars, 8 UTF-8 bytes.
        let schema = Schema::new("s", vec![FieldSpec::str("tag", 6)]);
        let record = Record::new().with("tag", Value::Str("éééé".into()));
        assert_eq!(
            encode(&schema, &record).unwrap_err(),
            CodecError::StringTooLong {
                field: "tag",
                max: 6,
                actual: 8,
            }
        );
    }

    #[test]
    fn encode_wrong_bytes_width_fails() {
        let record = sample_record().with("owner", Value::Bytes(vec![0xCD; 31]));
        assert_eq!(
            encode(&sample_schema(), &record).unwrap_err(),
            CodecError::FieldWidthMismatch {
                field: "owner",
                expected: 32,
                actual: 31,
            }
        );
    }

    #[test]
    fn encode_u64_into_u8_field_narrows_when_in_range() {
        let record = sample_record().with("bump", Value::U64(255));
        let buf = encode(&sample_schema(), &record).unwrap();
        assert_eq!(buf[53], 255);
    }

    #[test]
    fn encode_u64_into_u8_field_overflows() {
        let record = sample_record().with("bump", Value::U64(256));
        assert_eq!(
            encode(&sample_schema(), &record).unwrap_err(),
            CodecError::NumericOverflow {
                field: "bump",
                value: 256,
                max: 255,
            }
        );
    }

    #[test]
    fn encode_missing_field_fails() {
        let record = Record::new().with("id", Value::U64(1));
        assert_eq!(
            encode(&sample_schema(), &record).unwrap_err(),
            CodecError::MissingField { field: "owner" }
        );
    }

    #[test]
    fn encode_wrong_variant_fails() {
        let record = sample_record().with("id", Value::Str("7".into()));
        assert_eq!(
            encode(&sample_schema(), &record).unwrap_err(),
            CodecError::TypeMismatch {
                field: "id",
                expected: "u64",
                actual: "string",
            }
        );
    }

    #[test]
    fn encode_ignores_extra_record_fields() {
        let record = sample_record().with("unrelated", Value::U64(9));
        assert_eq!(encode(&sample_schema(), &record).unwrap().len(), 54);
    }

    // -- decode --------------------------------------------------------------

    #[test]
    fn decode_rejects_short_buffer_with_context() {
        let err = decode(&sample_schema(), &[0u8; 53]).unwrap_err();
        assert_eq!(
            err,
            CodecError::SchemaMismatch {
                schema: "sample",
                expected: 54,
                actual: 53,
            }
        );
    }

    #[test]
    fn decode_rejects_long_buffer() {
        assert!(decode(&sample_schema(), &[0u8; 55]).is_err());
    }

    #[test]
    fn decode_reads_little_endian_integers() {
        let schema = Schema::new("n", vec![FieldSpec::u64("v")]);
        let record = decode(&schema, &hex::decode("9001000000000000").unwrap()).unwrap();
        assert_eq!(record.get_u64("v"), Some(400));
    }

    #[test]
    fn decode_strips_trailing_zero_fill_from_strings() {
        let schema = Schema::new("s", vec![FieldSpec::str("tag", 8)]);
        let mut buf = b"cron".to_vec();
        buf.resize(8, 0);
        let record = decode(&schema, &buf).unwrap();
        assert_eq!(record.get_str("tag"), Some("cron"));
    }

    #[test]
    fn decode_string_stops_at_first_zero_byte() {
        // Embedded NUL: everything after it is dropped, not filtered out.
        let schema = Schema::new("s", vec![FieldSpec::str("tag", 8)]);
        let record = decode(&schema, b"ab\0cd\0\0\0").unwrap();
        assert_eq!(record.get_str("tag"), Some("ab"));
    }

    #[test]
    fn decode_all_zero_string_is_empty() {
        let schema = Schema::new("s", vec![FieldSpec::str("tag", 8)]);
        let record = decode(&schema, &[0u8; 8]).unwrap();
        assert_eq!(record.get_str("tag"), Some(""));
    }

    #[test]
    fn decode_invalid_utf8_fails() {
        let schema = Schema::new("s", vec![FieldSpec::str("tag", 4)]);
        let err = decode(&schema, &[0xff, 0xfe, 0x01, 0x02]).unwrap_err();
        assert_eq!(err, CodecError::InvalidUtf8 { field: "tag" });
    }

    #[test]
    fn decode_bool_must_be_zero_or_one() {
        let schema = Schema::new("b", vec![FieldSpec::bool("live")]);
        assert_eq!(decode(&schema, &[0]).unwrap().get_bool("live"), Some(false));
        assert_eq!(decode(&schema, &[1]).unwrap().get_bool("live"), Some(true));
        assert_eq!(
            decode(&schema, &[2]).unwrap_err(),
            CodecError::InvalidBoolean {
                field: "live",
                value: 2,
            }
        );
    }

    #[test]
    fn decode_bytes_returned_verbatim() {
        let schema = Schema::new("k", vec![FieldSpec::bytes("key", 4)]);
        let record = decode(&schema, &[0xDE, 0xAD, 0x00, 0xEF]).unwrap();
        assert_eq!(record.get_bytes("key"), Some(&[0xDE, 0xAD, 0x00, 0xEF][..]));
    }

    // -- round trips ---------------------------------------------------------

    #[test]
    fn decode_of_encode_reproduces_record() {
        let schema = sample_schema();
        let record = sample_record();
        let decoded = decode(&schema, &encode(&schema, &record).unwrap()).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn encode_of_decode_reproduces_buffer() {
        let schema = sample_schema();
        let mut buf = vec![0u8; schema.width()];
        buf[0] = 0x2A; // id = 42
        buf[8..40].fill(0x01); // owner
        buf[40..44].copy_from_slice(b"tick"); // label, rest zero-filled
        buf[52] = 1; // live
        buf[53] = 200; // bump

        let roundtripped = encode(&schema, &decode(&schema, &buf).unwrap()).unwrap();
        assert_eq!(roundtripped, buf);
    }

    #[test]
    fn empty_schema_roundtrip() {
        let schema = Schema::new("empty", vec![]);
        assert_eq!(encode(&schema, &Record::new()).unwrap(), Vec::<u8>::new());
        assert_eq!(decode(&schema, &[]).unwrap(), Record::new());
    }
}
