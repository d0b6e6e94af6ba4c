//! AES-128 key expansion.

use zeroize::Zeroizing;

use crate::block::{Block, BLOCK_SIZE, WORD_SIZE};
use crate::key::{Aes128Key, RoundKeySchedule, KEY_SIZE, ROUNDS, ROUND_KEY_SIZE};
use crate::sbox::sbox;

/// Round constants. Entry 0 is a placeholder and is never read; entry `r`
/// is `x^(r-1)` in GF(2^8) and feeds the first word of round key `r`.
pub const RCON: [u8; ROUNDS + 1] = [
    0x8d, 0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36,
];

const KEY_WORDS: usize = KEY_SIZE / WORD_SIZE;
const SCHEDULE_WORDS: usize = ROUND_KEY_SIZE / WORD_SIZE;

type Word = [u8; WORD_SIZE];

fn rot_word(word: Word) -> Word {
    let [a, b, c, d] = word;
    [b, c, d, a]
}

fn sub_word(word: Word) -> Word {
    word.map(sbox)
}

fn xor_word(lhs: Word, rhs: Word) -> Word {
    let [a0, a1, a2, a3] = lhs;
    let [b0, b1, b2, b3] = rhs;
    [a0 ^ b0, a1 ^ b1, a2 ^ b2, a3 ^ b3]
}

/// Expands a 128-bit key into 11 round keys.
///
/// Word `i` of the schedule is `w[i - 4] ^ temp`, where `temp` is `w[i - 1]`
/// passed through RotWord, SubWord and the round constant whenever `i` starts
/// a new round key.
pub fn expand_key(key: &Aes128Key) -> RoundKeySchedule {
    let mut words = Zeroizing::new([[0u8; WORD_SIZE]; SCHEDULE_WORDS]);
    for (word, chunk) in words.iter_mut().zip(key.0.chunks_exact(WORD_SIZE)) {
        word.copy_from_slice(chunk);
    }

    for i in KEY_WORDS..SCHEDULE_WORDS {
        let mut temp = words[i - 1];
        if i % KEY_WORDS == 0 {
            temp = sub_word(rot_word(temp));
            temp[0] ^= RCON[i / KEY_WORDS];
        }
        words[i] = xor_word(words[i - KEY_WORDS], temp);
    }

    let mut schedule = RoundKeySchedule([[0u8; BLOCK_SIZE]; ROUNDS + 1]);
    for (round, round_key) in schedule.0.iter_mut().enumerate() {
        fill_round_key(round_key, &words[round * KEY_WORDS..(round + 1) * KEY_WORDS]);
    }
    schedule
}

fn fill_round_key(round_key: &mut Block, words: &[Word]) {
    for (chunk, word) in round_key.chunks_exact_mut(WORD_SIZE).zip(words) {
        chunk.copy_from_slice(word);
    }
}
