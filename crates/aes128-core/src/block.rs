//! Block representation helpers.
//!
//! The state is a 4x4 byte matrix stored column-major: byte `4 * col + row`.

/// Size of an AES block in bytes.
pub const BLOCK_SIZE: usize = 16;

/// Number of bytes in one state column (and one key-schedule word).
pub const WORD_SIZE: usize = 4;

/// AES block of 16 bytes.
pub type Block = [u8; BLOCK_SIZE];

/// Returns the byte offset of `(col, row)` in a column-major block.
#[inline]
pub const fn index(col: usize, row: usize) -> usize {
    WORD_SIZE * col + row
}

/// Copies column `col` out of the block.
#[inline]
pub fn column(block: &Block, col: usize) -> [u8; WORD_SIZE] {
    let start = index(col, 0);
    [
        block[start],
        block[start + 1],
        block[start + 2],
        block[start + 3],
    ]
}

/// Overwrites column `col` of the block.
#[inline]
pub fn set_column(block: &mut Block, col: usize, value: [u8; WORD_SIZE]) {
    let start = index(col, 0);
    block[start..start + WORD_SIZE].copy_from_slice(&value);
}

/// XORs two blocks, writing the result into `dst`.
#[inline]
pub fn xor_in_place(dst: &mut Block, rhs: &Block) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}
