//! Program-derived-address (PDA) derivation for Solana-style programs.
//!
//! This crate implements the bounded bump-seed search and the
//! fixed-bump verification step by hand, without `solana-sdk` (which drags
//! in tokio and 200+ transitive dependencies). The only cryptographic
//! ingredients are `sha2` for the preimage hash and `curve25519-dalek`
//! for the Ed25519 point-membership test.
//!
//! Everything here is a pure function of its inputs: no I/O, no global
//! state, safe to call concurrently from any number of threads.

pub mod derive;
pub mod error;
pub mod pubkey;

// Re-export key public items for ergonomic imports.
pub use derive::{create_program_address, find_program_address, is_on_curve, MAX_SEED_LEN};
pub use error::PdaError;
pub use pubkey::{parse_base58, to_base58};
