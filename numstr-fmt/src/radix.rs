//! Hexadecimal and binary digits, without a base prefix.
//!
//! Hex digits are lowercase. The sized forms write exactly the requested count,
//! dropping high digits or padding with `0`. The minimal forms are the sized
//! forms with the count taken from [`crate::size`].

use crate::error::{FormatError, ensure_capacity};
use crate::size::{u32_bin_size, u32_hex_size, u64_bin_size, u64_hex_size};
use crate::unchecked;

fn check_width(out: &[u8], count: usize) -> Result<(), FormatError> {
    if count == 0 {
        return Err(FormatError::invalid_width());
    }
    ensure_capacity(out, count)
}

/// Writes the low `nibble_count` nibbles of `num` as hex digits.
///
/// ```
/// let mut buf = [0u8; 8];
/// let n = numstr_fmt::u32_to_sized_hex_str(&mut buf, 0x1234, 2).unwrap();
/// assert_eq!(&buf[..n], b"34");
/// ```
pub fn u32_to_sized_hex_str(
    out: &mut [u8],
    num: u32,
    nibble_count: usize,
) -> Result<usize, FormatError> {
    check_width(out, nibble_count)?;
    Ok(unchecked::u32_to_sized_hex_str(out, num, nibble_count))
}

/// Writes the low `nibble_count` nibbles of `num` as hex digits.
pub fn u64_to_sized_hex_str(
    out: &mut [u8],
    num: u64,
    nibble_count: usize,
) -> Result<usize, FormatError> {
    check_width(out, nibble_count)?;
    Ok(unchecked::u64_to_sized_hex_str(out, num, nibble_count))
}

/// Writes the low `bit_count` bits of `num` as `0`/`1` characters.
pub fn u32_to_sized_bin_str(
    out: &mut [u8],
    num: u32,
    bit_count: usize,
) -> Result<usize, FormatError> {
    check_width(out, bit_count)?;
    Ok(unchecked::u32_to_sized_bin_str(out, num, bit_count))
}

/// Writes the low `bit_count` bits of `num` as `0`/`1` characters.
pub fn u64_to_sized_bin_str(
    out: &mut [u8],
    num: u64,
    bit_count: usize,
) -> Result<usize, FormatError> {
    check_width(out, bit_count)?;
    Ok(unchecked::u64_to_sized_bin_str(out, num, bit_count))
}

/// Writes only the significant nibbles of `num`. Zero is written as `"0"`.
pub fn u32_to_min_hex_str(out: &mut [u8], num: u32) -> Result<usize, FormatError> {
    u32_to_sized_hex_str(out, num, u32_hex_size(num))
}

/// Writes only the significant nibbles of `num`. Zero is written as `"0"`.
pub fn u64_to_min_hex_str(out: &mut [u8], num: u64) -> Result<usize, FormatError> {
    u64_to_sized_hex_str(out, num, u64_hex_size(num))
}

/// Writes only the significant bits of `num`. Zero is written as `"0"`.
pub fn u32_to_min_bin_str(out: &mut [u8], num: u32) -> Result<usize, FormatError> {
    u32_to_sized_bin_str(out, num, u32_bin_size(num))
}

/// Writes only the significant bits of `num`. Zero is written as `"0"`.
pub fn u64_to_min_bin_str(out: &mut [u8], num: u64) -> Result<usize, FormatError> {
    u64_to_sized_bin_str(out, num, u64_bin_size(num))
}
