//! AES-128 block cipher.
//!
//! This crate follows the FIPS-197 description of AES with a 128-bit key and
//! provides:
//! - Key expansion into eleven round keys.
//! - The four round transformations, each usable in both directions.
//! - Single-block encryption and decryption, plus the [`cipher`] entry point
//!   that expands a fresh schedule on every call.
//!
//! Chaining modes, padding and key management are left to callers, which
//! invoke the block operations once per 16-byte block.
//!
//! The implementation favors clarity and testability. Table lookups make it
//! unsuitable where cache-timing side channels matter.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod block;
mod cipher;
mod error;
pub mod gf;
mod key;
pub mod round;
mod sbox;
mod schedule;

pub use crate::block::{Block, BLOCK_SIZE};
pub use crate::cipher::{cipher, cipher_raw, decrypt_block, encrypt_block, Mode};
pub use crate::error::{Error, Result};
pub use crate::key::{Aes128Key, RoundKeySchedule, KEY_SIZE, ROUNDS, ROUND_KEY_SIZE};
pub use crate::round::Direction;
pub use crate::sbox::{inv_sbox, sbox, INV_SBOX, SBOX};
pub use crate::schedule::{expand_key, RCON};
