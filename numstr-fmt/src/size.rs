//! Exact output lengths, for sizing buffers and for the converters themselves.

use crate::float;

/// Number of decimal digits in `num`. Zero takes one digit.
#[must_use]
pub const fn u32_str_size(num: u32) -> usize {
    match num.checked_ilog10() {
        Some(log) => log as usize + 1,
        None => 1,
    }
}

/// Number of decimal digits in `num`. Zero takes one digit.
#[must_use]
pub const fn u64_str_size(num: u64) -> usize {
    match num.checked_ilog10() {
        Some(log) => log as usize + 1,
        None => 1,
    }
}

/// Length of `num` in decimal, including the minus sign.
#[must_use]
pub const fn s32_str_size(num: i32) -> usize {
    u32_str_size(num.unsigned_abs()) + (num < 0) as usize
}

/// Length of `num` in decimal, including the minus sign.
#[must_use]
pub const fn s64_str_size(num: i64) -> usize {
    u64_str_size(num.unsigned_abs()) + (num < 0) as usize
}

/// Number of significant nibbles in `num`, at least 1.
#[must_use]
pub const fn u32_hex_size(num: u32) -> usize {
    nibbles_for_bits(u32::BITS - num.leading_zeros())
}

/// Number of significant nibbles in `num`, at least 1.
#[must_use]
pub const fn u64_hex_size(num: u64) -> usize {
    nibbles_for_bits(u64::BITS - num.leading_zeros())
}

/// Number of significant bits in `num`, at least 1.
#[must_use]
pub const fn u32_bin_size(num: u32) -> usize {
    bits_or_one(u32::BITS - num.leading_zeros())
}

/// Number of significant bits in `num`, at least 1.
#[must_use]
pub const fn u64_bin_size(num: u64) -> usize {
    bits_or_one(u64::BITS - num.leading_zeros())
}

/// Length of the text `f32_to_str` writes for `num`.
#[must_use]
pub fn f32_str_size(num: f32) -> usize {
    float::decompose(num).str_size()
}

const fn nibbles_for_bits(bits: u32) -> usize {
    if bits == 0 {
        1
    } else {
        bits.div_ceil(4) as usize
    }
}

const fn bits_or_one(bits: u32) -> usize {
    if bits == 0 { 1 } else { bits as usize }
}
