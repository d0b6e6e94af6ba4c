//! AES-128 block encryption and decryption.

use core::str::FromStr;

use log::warn;
use zeroize::Zeroizing;

use crate::block::Block;
use crate::error::{Error, Result};
use crate::key::{Aes128Key, RoundKeySchedule, ROUNDS};
use crate::round::{add_round_key, mix_columns, shift_rows, sub_bytes, Direction};
use crate::schedule::expand_key;

/// Which pipeline [`cipher`] runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Plaintext to ciphertext.
    Encrypt,
    /// Ciphertext to plaintext.
    Decrypt,
}

impl Mode {
    /// Raw value selecting encryption.
    pub const ENC: i32 = 0;
    /// Raw value selecting decryption.
    pub const DEC: i32 = 1;
}

impl TryFrom<i32> for Mode {
    type Error = Error;

    fn try_from(raw: i32) -> Result<Self> {
        match raw {
            Mode::ENC => Ok(Mode::Encrypt),
            Mode::DEC => Ok(Mode::Decrypt),
            other => {
                warn!("rejecting cipher mode {other}");
                Err(Error::InvalidMode {
                    raw: other.to_string(),
                })
            }
        }
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "enc" | "encrypt" => Ok(Mode::Encrypt),
            "dec" | "decrypt" => Ok(Mode::Decrypt),
            _ => {
                warn!("rejecting cipher mode {s:?}");
                Err(Error::InvalidMode { raw: s.to_owned() })
            }
        }
    }
}

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_block(block: &Block, round_keys: &RoundKeySchedule) -> Block {
    let mut state = *block;

    add_round_key(&mut state, round_keys.round_key(0));

    for round in 1..ROUNDS {
        sub_bytes(&mut state, Direction::Forward);
        shift_rows(&mut state, Direction::Forward);
        mix_columns(&mut state, Direction::Forward);
        add_round_key(&mut state, round_keys.round_key(round));
    }

    sub_bytes(&mut state, Direction::Forward);
    shift_rows(&mut state, Direction::Forward);
    add_round_key(&mut state, round_keys.round_key(ROUNDS));

    state
}

/// Decrypts a single 16-byte block with pre-expanded round keys.
///
/// Middle rounds apply inverse MixColumns to the state and to a transient
/// copy of the round key before adding it, which equals adding the key first
/// and mixing afterwards. The schedule itself is left untouched.
pub fn decrypt_block(block: &Block, round_keys: &RoundKeySchedule) -> Block {
    let mut state = *block;

    add_round_key(&mut state, round_keys.round_key(ROUNDS));

    for round in (1..ROUNDS).rev() {
        sub_bytes(&mut state, Direction::Inverse);
        shift_rows(&mut state, Direction::Inverse);
        mix_columns(&mut state, Direction::Inverse);
        let mut round_key = Zeroizing::new(*round_keys.round_key(round));
        mix_columns(&mut round_key, Direction::Inverse);
        add_round_key(&mut state, &round_key);
    }

    sub_bytes(&mut state, Direction::Inverse);
    shift_rows(&mut state, Direction::Inverse);
    add_round_key(&mut state, round_keys.round_key(0));

    state
}

/// Encrypts or decrypts `input` under `key`, writing the result to `output`.
///
/// A fresh schedule is expanded on every call and wiped before returning;
/// nothing is cached between calls.
pub fn cipher(input: &Block, output: &mut Block, key: &Aes128Key, mode: Mode) {
    *output = *input;
    let round_keys = expand_key(key);
    *output = match mode {
        Mode::Encrypt => encrypt_block(output, &round_keys),
        Mode::Decrypt => decrypt_block(output, &round_keys),
    };
}

/// Like [`cipher`], but takes the mode as a raw integer ([`Mode::ENC`] or
/// [`Mode::DEC`]). Any other value is rejected and `output` is not written.
pub fn cipher_raw(
    input: &Block,
    output: &mut Block,
    key: &Aes128Key,
    raw_mode: i32,
) -> Result<()> {
    let mode = Mode::try_from(raw_mode)?;
    cipher(input, output, key, mode);
    Ok(())
}
