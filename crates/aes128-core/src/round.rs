//! AES round transformations.
//!
//! Each transform works in place on a column-major [`Block`]. SubBytes,
//! ShiftRows and MixColumns take a [`Direction`]; AddRoundKey is its own
//! inverse.

use crate::block::{column, index, set_column, xor_in_place, Block, WORD_SIZE};
use crate::gf::{mul11, mul13, mul14, mul2, mul3, mul9};
use crate::sbox::{inv_sbox, sbox};

/// Direction of a round transform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// The transform used during encryption.
    Forward,
    /// The inverse transform used during decryption.
    Inverse,
}

/// Applies SubBytes (or its inverse) to the state in place.
#[inline]
pub fn sub_bytes(state: &mut Block, direction: Direction) {
    let lookup = match direction {
        Direction::Forward => sbox,
        Direction::Inverse => inv_sbox,
    };
    for byte in state.iter_mut() {
        *byte = lookup(*byte);
    }
}

/// Performs ShiftRows in place: row `r` rotates left by `r` positions when
/// going forward and right by `r` positions when inverting.
#[inline]
pub fn shift_rows(state: &mut Block, direction: Direction) {
    for row in 1..WORD_SIZE {
        let mut line = [0u8; WORD_SIZE];
        for (col, slot) in line.iter_mut().enumerate() {
            *slot = state[index(col, row)];
        }
        match direction {
            Direction::Forward => line.rotate_left(row),
            Direction::Inverse => line.rotate_right(row),
        }
        for (col, value) in line.iter().enumerate() {
            state[index(col, row)] = *value;
        }
    }
}

fn mix_single_column(col: [u8; WORD_SIZE]) -> [u8; WORD_SIZE] {
    let [a0, a1, a2, a3] = col;
    [
        mul2(a0) ^ mul3(a1) ^ a2 ^ a3,
        a0 ^ mul2(a1) ^ mul3(a2) ^ a3,
        a0 ^ a1 ^ mul2(a2) ^ mul3(a3),
        mul3(a0) ^ a1 ^ a2 ^ mul2(a3),
    ]
}

fn inv_mix_single_column(col: [u8; WORD_SIZE]) -> [u8; WORD_SIZE] {
    let [a0, a1, a2, a3] = col;
    [
        mul14(a0) ^ mul11(a1) ^ mul13(a2) ^ mul9(a3),
        mul9(a0) ^ mul14(a1) ^ mul11(a2) ^ mul13(a3),
        mul13(a0) ^ mul9(a1) ^ mul14(a2) ^ mul11(a3),
        mul11(a0) ^ mul13(a1) ^ mul9(a2) ^ mul14(a3),
    ]
}

/// Mixes a single 4-byte column in the given direction.
#[inline]
pub fn mix_column(col: [u8; WORD_SIZE], direction: Direction) -> [u8; WORD_SIZE] {
    match direction {
        Direction::Forward => mix_single_column(col),
        Direction::Inverse => inv_mix_single_column(col),
    }
}

/// MixColumns (or its inverse) over all four columns.
#[inline]
pub fn mix_columns(state: &mut Block, direction: Direction) {
    for col in 0..WORD_SIZE {
        let mixed = mix_column(column(state, col), direction);
        set_column(state, col, mixed);
    }
}

/// Adds (XORs) a round key into the state.
#[inline]
pub fn add_round_key(state: &mut Block, round_key: &Block) {
    xor_in_place(state, round_key);
}
