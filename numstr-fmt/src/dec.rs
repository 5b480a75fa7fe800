use crate::error::{FormatError, ensure_capacity};
use crate::size::{s32_str_size, s64_str_size, u32_str_size, u64_str_size};
use crate::unchecked;

/// Format a `u32` as decimal into a byte buffer.
///
/// Returns the number of bytes written, or an error if the buffer is too small.
/// Maximum output is 10 digits for u32.
pub fn u32_to_str(out: &mut [u8], num: u32) -> Result<usize, FormatError> {
    ensure_capacity(out, u32_str_size(num))?;
    Ok(unchecked::u32_to_str(out, num))
}

/// Format a `u64` as decimal into a byte buffer.
///
/// Returns the number of bytes written, or an error if the buffer is too small.
/// Maximum output is 20 digits for u64. Prefer [`u32_to_str`] when the value is
/// known to fit in 32 bits; this one falls back to it for small values anyway.
pub fn u64_to_str(out: &mut [u8], num: u64) -> Result<usize, FormatError> {
    ensure_capacity(out, u64_str_size(num))?;
    Ok(unchecked::u64_to_str(out, num))
}

/// Format an `i32` as decimal into a byte buffer, with a leading `-` when negative.
///
/// Maximum output is 11 bytes, reached by `i32::MIN`.
pub fn s32_to_str(out: &mut [u8], num: i32) -> Result<usize, FormatError> {
    ensure_capacity(out, s32_str_size(num))?;
    Ok(unchecked::s32_to_str(out, num))
}

/// Format an `i64` as decimal into a byte buffer, with a leading `-` when negative.
///
/// Maximum output is 20 bytes, reached by `i64::MIN`.
pub fn s64_to_str(out: &mut [u8], num: i64) -> Result<usize, FormatError> {
    ensure_capacity(out, s64_str_size(num))?;
    Ok(unchecked::s64_to_str(out, num))
}
