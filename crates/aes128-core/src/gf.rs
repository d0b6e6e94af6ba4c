//! Arithmetic in GF(2^8) modulo `x^8 + x^4 + x^3 + x + 1` (0x11b).
//!
//! Every multiplier used by MixColumns is built from [`xtime`], so each
//! doubling step performs exactly one reduction.

/// Low byte of the reduction polynomial 0x11b.
const REDUCTION: u8 = 0x1b;

/// Multiplies by 2 (the polynomial `x`), reducing when the high bit carries out.
#[inline]
pub const fn xtime(byte: u8) -> u8 {
    let shifted = byte << 1;
    if byte & 0x80 != 0 {
        shifted ^ REDUCTION
    } else {
        shifted
    }
}

/// Multiplies by 2.
#[inline]
pub const fn mul2(byte: u8) -> u8 {
    xtime(byte)
}

/// Multiplies by 3 = 2 + 1.
#[inline]
pub const fn mul3(byte: u8) -> u8 {
    xtime(byte) ^ byte
}

/// Multiplies by 4.
#[inline]
const fn mul4(byte: u8) -> u8 {
    xtime(xtime(byte))
}

/// Multiplies by 8.
#[inline]
const fn mul8(byte: u8) -> u8 {
    xtime(mul4(byte))
}

/// Multiplies by 9 = 8 + 1.
#[inline]
pub const fn mul9(byte: u8) -> u8 {
    mul8(byte) ^ byte
}

/// Multiplies by 11 = 8 + 2 + 1.
#[inline]
pub const fn mul11(byte: u8) -> u8 {
    mul8(byte) ^ xtime(byte) ^ byte
}

/// Multiplies by 13 = 8 + 4 + 1.
#[inline]
pub const fn mul13(byte: u8) -> u8 {
    mul8(byte) ^ mul4(byte) ^ byte
}

/// Multiplies by 14 = 8 + 4 + 2.
#[inline]
pub const fn mul14(byte: u8) -> u8 {
    mul8(byte) ^ mul4(byte) ^ xtime(byte)
}

/// General multiplication by shift-and-add over [`xtime`].
pub fn mul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    while b != 0 {
        if b & 1 != 0 {
            product ^= a;
        }
        a = xtime(a);
        b >>= 1;
    }
    product
}
