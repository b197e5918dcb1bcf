//! # account-codec
//!
//! Exact binary encode/decode of fixed-layout account-state records,
//! driven by explicitly declared schemas.
//!
//! Layouts mirror an on-chain binary format bit for bit, so correctness
//! here is security-relevant: an incorrectly encoded record corrupts
//! on-chain state. Every failure mode is a deterministic, contextual
//! error; there are no partial results and nothing is retried.

pub mod codec;
pub mod error;
pub mod record;
pub mod schema;

pub use codec::{decode, encode};
pub use error::CodecError;
pub use record::{Record, Value};
pub use schema::{FieldSpec, FieldType, Schema, SchemaRegistry};
