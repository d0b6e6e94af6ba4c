//! Key types for AES-128.

use core::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::block::{Block, BLOCK_SIZE};

/// Size of an AES-128 key in bytes.
pub const KEY_SIZE: usize = 16;

/// Number of rounds performed by AES-128.
pub const ROUNDS: usize = 10;

/// Size of the expanded key schedule in bytes.
pub const ROUND_KEY_SIZE: usize = (ROUNDS + 1) * BLOCK_SIZE;

/// AES-128 key wrapper. Wiped on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Aes128Key(pub [u8; KEY_SIZE]);

impl From<[u8; KEY_SIZE]> for Aes128Key {
    fn from(value: [u8; KEY_SIZE]) -> Self {
        Self(value)
    }
}

impl AsRef<[u8; KEY_SIZE]> for Aes128Key {
    fn as_ref(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }
}

impl fmt::Debug for Aes128Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Aes128Key(<redacted>)")
    }
}

/// Expanded round keys for AES-128: eleven 16-byte keys, 176 bytes in total.
///
/// Produced by [`expand_key`](crate::expand_key) and read-only afterwards.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct RoundKeySchedule(pub(crate) [Block; ROUNDS + 1]);

impl RoundKeySchedule {
    /// Returns the round key for `round` (0..=10).
    ///
    /// # Panics
    ///
    /// Panics if `round > 10`.
    #[inline]
    pub fn round_key(&self, round: usize) -> &Block {
        &self.0[round]
    }

    /// Returns the schedule as one contiguous byte array; round `r` occupies
    /// bytes `16 * r..16 * (r + 1)`.
    pub fn to_bytes(&self) -> [u8; ROUND_KEY_SIZE] {
        let mut out = [0u8; ROUND_KEY_SIZE];
        for (chunk, round_key) in out.chunks_exact_mut(BLOCK_SIZE).zip(self.0.iter()) {
            chunk.copy_from_slice(round_key);
        }
        out
    }
}

impl fmt::Debug for RoundKeySchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RoundKeySchedule(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_size_matches_rounds() {
        assert_eq!(ROUND_KEY_SIZE, 176);
    }

    #[test]
    fn debug_does_not_leak_key_bytes() {
        let key = Aes128Key::from([0xab; KEY_SIZE]);
        let rendered = format!("{key:?}");
        assert!(!rendered.contains("ab"));
        assert!(!rendered.contains("171"));
    }

    #[test]
    fn to_bytes_lays_out_rounds_in_order() {
        let schedule = RoundKeySchedule(core::array::from_fn(|r| [r as u8; BLOCK_SIZE]));
        let bytes = schedule.to_bytes();
        for round in 0..=ROUNDS {
            let start = round * BLOCK_SIZE;
            assert_eq!(&bytes[start..start + BLOCK_SIZE], schedule.round_key(round));
        }
    }

    #[test]
    fn zeroize_clears_schedule() {
        let mut schedule = RoundKeySchedule([[0x5a; BLOCK_SIZE]; ROUNDS + 1]);
        schedule.zeroize();
        assert_eq!(schedule.to_bytes(), [0u8; ROUND_KEY_SIZE]);
    }
}
