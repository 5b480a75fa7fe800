//! Converters without capacity checks.
//!
//! These are the digit engines behind the checked API. They skip the up-front
//! validation: a buffer shorter than the output panics on slice indexing, and
//! a zero nibble or bit count trips a debug assertion (release builds write
//! nothing and return 0). Reach for them only where the buffer is sized from
//! [`crate::consts`] or [`crate::size`] anyway.

use crate::consts::F32_FRACTION_DIGITS;
use crate::float;
use crate::size::{
    u32_bin_size, u32_hex_size, u32_str_size, u64_bin_size, u64_hex_size, u64_str_size,
};

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Writes `num` in decimal. Returns the number of bytes written.
pub fn u32_to_str(out: &mut [u8], num: u32) -> usize {
    let size = u32_str_size(num);
    let mut n = num;
    // Fill from the last digit backward so nothing needs reversing.
    for slot in out[..size].iter_mut().rev() {
        *slot = b'0' + (n % 10) as u8;
        n /= 10;
    }
    size
}

/// Writes `num` in decimal. Returns the number of bytes written.
///
/// Values that fit in 32 bits take the narrower division loop.
pub fn u64_to_str(out: &mut [u8], num: u64) -> usize {
    if let Ok(narrow) = u32::try_from(num) {
        return u32_to_str(out, narrow);
    }
    let size = u64_str_size(num);
    let mut n = num;
    for slot in out[..size].iter_mut().rev() {
        *slot = b'0' + (n % 10) as u8;
        n /= 10;
    }
    size
}

/// Writes `num` in decimal with a leading `-` when negative.
pub fn s32_to_str(out: &mut [u8], num: i32) -> usize {
    if num < 0 {
        out[0] = b'-';
        // unsigned_abs covers i32::MIN without overflowing.
        1 + u32_to_str(&mut out[1..], num.unsigned_abs())
    } else {
        u32_to_str(out, num.unsigned_abs())
    }
}

/// Writes `num` in decimal with a leading `-` when negative.
pub fn s64_to_str(out: &mut [u8], num: i64) -> usize {
    if num < 0 {
        out[0] = b'-';
        1 + u64_to_str(&mut out[1..], num.unsigned_abs())
    } else {
        u64_to_str(out, num.unsigned_abs())
    }
}

/// Writes `num` with six rounded fractional digits, saturating at
/// ±2147483648. See [`crate::float`] for the rounding and sign rules.
pub fn f32_to_str(out: &mut [u8], num: f32) -> usize {
    let parts = float::decompose(num);
    let mut pos = 0;
    if parts.negative {
        out[pos] = b'-';
        pos += 1;
    }
    pos += u32_to_str(&mut out[pos..], parts.int);
    out[pos] = b'.';
    pos += 1;

    let mut frac = parts.frac;
    for slot in out[pos..pos + F32_FRACTION_DIGITS].iter_mut().rev() {
        *slot = b'0' + (frac % 10) as u8;
        frac /= 10;
    }
    pos + F32_FRACTION_DIGITS
}

/// Writes the low `nibble_count` nibbles of `num`, most significant first.
pub fn u32_to_sized_hex_str(out: &mut [u8], num: u32, nibble_count: usize) -> usize {
    write_radix(out, u64::from(num), nibble_count, 4)
}

/// Writes the low `nibble_count` nibbles of `num`, most significant first.
pub fn u64_to_sized_hex_str(out: &mut [u8], num: u64, nibble_count: usize) -> usize {
    write_radix(out, num, nibble_count, 4)
}

/// Writes the low `bit_count` bits of `num`, most significant first.
pub fn u32_to_sized_bin_str(out: &mut [u8], num: u32, bit_count: usize) -> usize {
    write_radix(out, u64::from(num), bit_count, 1)
}

/// Writes the low `bit_count` bits of `num`, most significant first.
pub fn u64_to_sized_bin_str(out: &mut [u8], num: u64, bit_count: usize) -> usize {
    write_radix(out, num, bit_count, 1)
}

/// Writes the significant nibbles of `num`; `"0"` for zero.
pub fn u32_to_min_hex_str(out: &mut [u8], num: u32) -> usize {
    u32_to_sized_hex_str(out, num, u32_hex_size(num))
}

/// Writes the significant nibbles of `num`; `"0"` for zero.
pub fn u64_to_min_hex_str(out: &mut [u8], num: u64) -> usize {
    u64_to_sized_hex_str(out, num, u64_hex_size(num))
}

/// Writes the significant bits of `num`; `"0"` for zero.
pub fn u32_to_min_bin_str(out: &mut [u8], num: u32) -> usize {
    u32_to_sized_bin_str(out, num, u32_bin_size(num))
}

/// Writes the significant bits of `num`; `"0"` for zero.
pub fn u64_to_min_bin_str(out: &mut [u8], num: u64) -> usize {
    u64_to_sized_bin_str(out, num, u64_bin_size(num))
}

/// Shared engine for the power-of-two bases. Digits past the value's natural
/// width come out as `0` since the shifted value reaches zero.
fn write_radix(out: &mut [u8], num: u64, count: usize, bits_per_digit: u32) -> usize {
    debug_assert!(count >= 1, "digit count must be 1 or greater");
    let mask = (1u64 << bits_per_digit) - 1;
    let mut n = num;
    for slot in out[..count].iter_mut().rev() {
        *slot = HEX_DIGITS[(n & mask) as usize];
        n >>= bits_per_digit;
    }
    count
}
