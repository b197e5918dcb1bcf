//! Base58 text form of 32-byte addresses.
//!
//! Derived addresses and program ids are raw `[u8; 32]` values; on the
//! wire and in logs they appear Base58-encoded (standard Bitcoin
//! alphabet, no checksum, no hashing).

use crate::error::PdaError;

/// Encode 32 address bytes as a Base58 string.
pub fn to_base58(bytes: &[u8; 32]) -> String {
    bs58::encode(bytes).into_string()
}

/// Parse a Base58 address string into its 32-byte form.
///
/// Fails with [`PdaError::InvalidAddress`] if the string is not valid
/// Base58 or does not decode to exactly 32 bytes.
pub fn parse_base58(address: &str) -> Result<[u8; 32], PdaError> {
    let bytes = bs58::decode(address)
        .into_vec()
        .map_err(|e| PdaError::InvalidAddress(format!("base58 decode failed: {e}")))?;

    bytes.try_into().map_err(|v: Vec<u8>| {
        PdaError::InvalidAddress(format!("expected 32 bytes, got {}", v.len()))
    })
}
