//! Program-derived-address (PDA) search and verification.
//!
//! A PDA is a 32-byte value that is deterministically computed from a set
//! of seeds and a program id, and that is guaranteed NOT to be a valid
//! Ed25519 curve point. Off-curve is the whole point of the scheme: an
//! address with no corresponding private key can never sign, so only the
//! owning program can authorize actions for it.
//!
//! Derivation hashes `seed_0 || .. || seed_n || [bump] || program_id ||
//! "ProgramDerivedAddress"` with SHA-256, searching bump values from 255
//! downward until the digest fails Edwards-point decompression. The loop
//! is explicit and bounded: it terminates in at most 256 iterations with
//! either a `(address, bump)` pair or [`PdaError::NoValidBumpFound`].

use sha2::{Digest, Sha256};

use crate::error::PdaError;

/// Maximum length of a single seed, in bytes.
pub const MAX_SEED_LEN: usize = 32;

/// Domain-separation suffix appended to every PDA preimage.
const PDA_MARKER: &[u8] = b"ProgramDerivedAddress";

/// Find the program-derived address and bump seed for `seeds` + `program_id`.
///
/// Searches bump values strictly descending from 255 and returns the first
/// off-curve result. The returned pair is a pure function of the inputs:
/// repeated calls always yield the identical `(address, bump)`.
///
/// Seed order is significant: reordering seeds derives a different
/// address.
pub fn find_program_address(
    seeds: &[&[u8]],
    program_id: &[u8; 32],
) -> Result<([u8; 32], u8), PdaError> {
    check_seed_lengths(seeds)?;

    for bump in (0u8..=255).rev() {
        let candidate = hash_candidate(seeds, bump, program_id);
        if !is_on_curve(&candidate) {
            return Ok((candidate, bump));
        }
    }

    Err(PdaError::NoValidBumpFound)
}

/// Recompute the program-derived address for a known bump, without searching.
///
/// Used to confirm a previously derived `(address, bump)` pair. Fails with
/// [`PdaError::OnCurveAddress`] if the supplied bump yields an on-curve
/// point; that bump was never a valid derivation result for these seeds.
pub fn create_program_address(
    seeds: &[&[u8]],
    bump: u8,
    program_id: &[u8; 32],
) -> Result<[u8; 32], PdaError> {
    check_seed_lengths(seeds)?;

    let candidate = hash_candidate(seeds, bump, program_id);
    if is_on_curve(&candidate) {
        return Err(PdaError::OnCurveAddress { bump });
    }

    Ok(candidate)
}

/// Check whether 32 bytes decompress to a valid Ed25519 curve point.
pub fn is_on_curve(bytes: &[u8; 32]) -> bool {
    curve25519_dalek::edwards::CompressedEdwardsY(*bytes)
        .decompress()
        .is_some()
}

fn check_seed_lengths(seeds: &[&[u8]]) -> Result<(), PdaError> {
    for (index, seed) in seeds.iter().enumerate() {
        if seed.len() > MAX_SEED_LEN {
            return Err(PdaError::SeedTooLong {
                index,
                len: seed.len(),
            });
        }
    }
    Ok(())
}

/// SHA-256 over the candidate preimage for one bump value.
fn hash_candidate(seeds: &[&[u8]], bump: u8, program_id: &[u8; 32]) -> [u8; 32] {
    let mut hasher = Sha256::new();

    for seed in seeds {
        hasher.update(seed);
    }
    hasher.update([bump]);
    hasher.update(program_id);
    hasher.update(PDA_MARKER);

    hasher.finalize().into()
}
