use thiserror::Error;

use crate::derive::MAX_SEED_LEN;

/// Program-derived-address errors.
///
/// Every variant is a deterministic validation failure: retrying with the
/// same inputs always fails the same way.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PdaError {
    /// No bump in [0, 255] produced an off-curve address for these seeds.
    /// Astronomically unlikely for honest inputs, but never swallowed.
    #[error("no valid bump seed found in [0, 255] for the given seeds and program id")]
    NoValidBumpFound,

    /// `create_program_address` was handed a bump that lands on the
    /// Ed25519 curve. A caller error, not a search failure.
    #[error("address derived with bump {bump} lies on the ed25519 curve")]
    OnCurveAddress { bump: u8 },

    /// A single seed exceeded the per-seed byte limit.
    #[error("seed at index {index} is {len} bytes, maximum is {MAX_SEED_LEN}")]
    SeedTooLong { index: usize, len: usize },

    /// A base58 string did not decode to a 32-byte address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}
