//! Well-known seed layouts for the clockpay program's derived accounts.
//!
//! Every account the program owns lives at a PDA with a fixed seed
//! recipe; callers must reproduce seed order exactly to land on the same
//! address.

use sol_pda::{find_program_address, PdaError};

/// Seed prefix of the bursary accounting account.
pub const BURSARY_SEED: &[u8] = b"bursary";
/// Seed prefix of a payroll instance account.
pub const PAYROLL_SEED: &[u8] = b"pay";
/// Seed prefix of an automation thread account.
pub const THREAD_SEED: &[u8] = b"thread";

/// SPL Token Program: `TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA`
pub const TOKEN_PROGRAM_ID: [u8; 32] = [
    0x06, 0xdd, 0xf6, 0xe1, 0xd7, 0x65, 0xa1, 0x93, 0xd9, 0xcb, 0xe1, 0x46, 0xce, 0xeb, 0x79,
    0xac, 0x1c, 0xb4, 0x85, 0xed, 0x5f, 0x5b, 0x37, 0x91, 0x3a, 0x8c, 0xf5, 0x85, 0x7e, 0xff,
    0x00, 0xa9,
];

/// SPL Associated Token Account Program:
/// `ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL`
pub const ASSOCIATED_TOKEN_PROGRAM_ID: [u8; 32] = [
    0x8c, 0x97, 0x25, 0x8f, 0x4e, 0x24, 0x89, 0xf1, 0xbb, 0x3d, 0x10, 0x29, 0x14, 0x8e, 0x0d,
    0x83, 0x0b, 0x5a, 0x13, 0x99, 0xda, 0xff, 0x10, 0x84, 0x04, 0x8e, 0x7b, 0xd8, 0xdb, 0xe9,
    0xf8, 0x59,
];

/// Automation thread program:
/// `3XXuUFfweXBwFgFfYaejLvZE4cGZiHgKiGfMtdxNzYmv`
pub const THREAD_PROGRAM_ID: [u8; 32] = [
    0x25, 0x89, 0xbd, 0xfc, 0x12, 0xf5, 0xb9, 0xff, 0x44, 0x8e, 0xda, 0x50, 0x98, 0x62, 0x25,
    0x3d, 0x7a, 0x84, 0xf8, 0x7a, 0x58, 0x37, 0x51, 0xfe, 0x87, 0x27, 0xcd, 0xac, 0x01, 0xc7,
    0x18, 0xa1,
];

/// Derive the bursary accounting account for an initializer + vault pair.
///
/// Seeds: `["bursary", initializer, vault]`.
pub fn bursary_address(
    program_id: &[u8; 32],
    initializer: &[u8; 32],
    vault: &[u8; 32],
) -> Result<([u8; 32], u8), PdaError> {
    find_program_address(&[BURSARY_SEED, initializer, vault], program_id)
}

/// Derive the payroll instance account for a receiver wallet.
///
/// Seeds: `["pay", bursary, receiver_wallet]`.
pub fn payroll_address(
    program_id: &[u8; 32],
    bursary: &[u8; 32],
    receiver_wallet: &[u8; 32],
) -> Result<([u8; 32], u8), PdaError> {
    find_program_address(&[PAYROLL_SEED, bursary, receiver_wallet], program_id)
}

/// Derive the automation thread account driving a payroll instance.
///
/// Seeds: `["thread", payroll, thread_id]`, owned by the thread program.
/// The id must fit a single seed (at most 32 bytes).
pub fn thread_address(
    thread_program: &[u8; 32],
    payroll: &[u8; 32],
    thread_id: &str,
) -> Result<([u8; 32], u8), PdaError> {
    find_program_address(
        &[THREAD_SEED, payroll, thread_id.as_bytes()],
        thread_program,
    )
}

/// Derive the associated token account for a wallet + mint pair.
///
/// Seeds: `[wallet, token_program, mint]`, owned by the associated token
/// program.
pub fn associated_token_address(
    wallet: &[u8; 32],
    mint: &[u8; 32],
) -> Result<([u8; 32], u8), PdaError> {
    find_program_address(
        &[wallet, &TOKEN_PROGRAM_ID, mint],
        &ASSOCIATED_TOKEN_PROGRAM_ID,
    )
}
