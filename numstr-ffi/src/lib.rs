//! C ABI bridge for numstr-fmt.
//!
//! Every converter has the `(buffer, num[, width]) -> count` shape, with the
//! buffer length passed alongside the pointer so short buffers are rejected
//! instead of overrun.

use std::slice;

use numstr_fmt::{FormatError, FormatErrorKind, consts};

// ---------------------------------------------------------------------------
// Result codes (negative = error, zero or positive = bytes written)
// ---------------------------------------------------------------------------

pub const NUMSTR_ERR_BUFFER_TOO_SMALL: i32 = -1;
pub const NUMSTR_ERR_INVALID_WIDTH: i32 = -2;
pub const NUMSTR_ERR_NULL_POINTER: i32 = -3;

// ---------------------------------------------------------------------------
// Buffer sizes
// ---------------------------------------------------------------------------

pub const NUMSTR_U8_STR_MAX_SIZE: usize = consts::U8_STR_MAX_SIZE;
pub const NUMSTR_U16_STR_MAX_SIZE: usize = consts::U16_STR_MAX_SIZE;
pub const NUMSTR_U32_STR_MAX_SIZE: usize = consts::U32_STR_MAX_SIZE;
pub const NUMSTR_U64_STR_MAX_SIZE: usize = consts::U64_STR_MAX_SIZE;
pub const NUMSTR_S8_STR_MAX_SIZE: usize = consts::S8_STR_MAX_SIZE;
pub const NUMSTR_S16_STR_MAX_SIZE: usize = consts::S16_STR_MAX_SIZE;
pub const NUMSTR_S32_STR_MAX_SIZE: usize = consts::S32_STR_MAX_SIZE;
pub const NUMSTR_S64_STR_MAX_SIZE: usize = consts::S64_STR_MAX_SIZE;
pub const NUMSTR_F32_STR_MAX_SIZE: usize = consts::F32_STR_MAX_SIZE;
pub const NUMSTR_HEX_STR_MAX_SIZE: usize = consts::HEX_STR_MAX_SIZE;
pub const NUMSTR_BIN_STR_MAX_SIZE: usize = consts::BIN_STR_MAX_SIZE;

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

fn format_error_to_code(e: &FormatError) -> i32 {
    match e.kind {
        FormatErrorKind::BufferTooSmall => NUMSTR_ERR_BUFFER_TOO_SMALL,
        FormatErrorKind::InvalidWidth => NUMSTR_ERR_INVALID_WIDTH,
    }
}

/// Widths whose byte count would not fit the `i32` return value are rejected
/// before anything is written.
fn sized_width(count: u32) -> Option<usize> {
    i32::try_from(count).ok().map(|w| w as usize)
}

/// Run a checked converter over a raw buffer and map the result to a code.
///
/// # Safety
/// `buf_ptr` must be null or point to a writeable buffer of `buf_len` bytes.
unsafe fn convert_into(
    buf_ptr: *mut u8,
    buf_len: usize,
    convert: impl FnOnce(&mut [u8]) -> Result<usize, FormatError>,
) -> i32 {
    if buf_ptr.is_null() {
        return NUMSTR_ERR_NULL_POINTER;
    }
    let buf = unsafe { slice::from_raw_parts_mut(buf_ptr, buf_len) };
    match convert(buf) {
        Ok(n) => i32::try_from(n).unwrap_or(NUMSTR_ERR_INVALID_WIDTH),
        Err(e) => format_error_to_code(&e),
    }
}

// ---------------------------------------------------------------------------
// Size oracles
// ---------------------------------------------------------------------------

#[unsafe(no_mangle)]
pub extern "C" fn numstr_u32_str_size(num: u32) -> u32 {
    numstr_fmt::u32_str_size(num) as u32
}

#[unsafe(no_mangle)]
pub extern "C" fn numstr_u64_str_size(num: u64) -> u32 {
    numstr_fmt::u64_str_size(num) as u32
}

// ---------------------------------------------------------------------------
// FFI functions
// ---------------------------------------------------------------------------

/// Write a `u32` in decimal.
///
/// # Safety
/// - `buf_ptr` must point to a writeable buffer of at least `buf_len` bytes.
///
/// Returns bytes written on success, negative error code on failure.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn numstr_u32_to_str(buf_ptr: *mut u8, buf_len: usize, num: u32) -> i32 {
    unsafe { convert_into(buf_ptr, buf_len, |buf| numstr_fmt::u32_to_str(buf, num)) }
}

/// Write a `u64` in decimal.
///
/// # Safety
/// - `buf_ptr` must point to a writeable buffer of at least `buf_len` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn numstr_u64_to_str(buf_ptr: *mut u8, buf_len: usize, num: u64) -> i32 {
    unsafe { convert_into(buf_ptr, buf_len, |buf| numstr_fmt::u64_to_str(buf, num)) }
}

/// Write an `i32` in decimal.
///
/// # Safety
/// - `buf_ptr` must point to a writeable buffer of at least `buf_len` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn numstr_s32_to_str(buf_ptr: *mut u8, buf_len: usize, num: i32) -> i32 {
    unsafe { convert_into(buf_ptr, buf_len, |buf| numstr_fmt::s32_to_str(buf, num)) }
}

/// Write an `i64` in decimal.
///
/// # Safety
/// - `buf_ptr` must point to a writeable buffer of at least `buf_len` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn numstr_s64_to_str(buf_ptr: *mut u8, buf_len: usize, num: i64) -> i32 {
    unsafe { convert_into(buf_ptr, buf_len, |buf| numstr_fmt::s64_to_str(buf, num)) }
}

/// Write an `f32` with six fractional digits, saturating at ±2147483648.
///
/// # Safety
/// - `buf_ptr` must point to a writeable buffer of at least `buf_len` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn numstr_f32_to_str(buf_ptr: *mut u8, buf_len: usize, num: f32) -> i32 {
    unsafe { convert_into(buf_ptr, buf_len, |buf| numstr_fmt::f32_to_str(buf, num)) }
}

/// Write the low `nibble_count` nibbles of a `u32` in lowercase hex.
///
/// # Safety
/// - `buf_ptr` must point to a writeable buffer of at least `buf_len` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn numstr_u32_to_sized_hex_str(
    buf_ptr: *mut u8,
    buf_len: usize,
    num: u32,
    nibble_count: u32,
) -> i32 {
    let Some(width) = sized_width(nibble_count) else {
        return NUMSTR_ERR_INVALID_WIDTH;
    };
    unsafe { convert_into(buf_ptr, buf_len, |buf| numstr_fmt::u32_to_sized_hex_str(buf, num, width)) }
}

/// Write the low `nibble_count` nibbles of a `u64` in lowercase hex.
///
/// # Safety
/// - `buf_ptr` must point to a writeable buffer of at least `buf_len` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn numstr_u64_to_sized_hex_str(
    buf_ptr: *mut u8,
    buf_len: usize,
    num: u64,
    nibble_count: u32,
) -> i32 {
    let Some(width) = sized_width(nibble_count) else {
        return NUMSTR_ERR_INVALID_WIDTH;
    };
    unsafe { convert_into(buf_ptr, buf_len, |buf| numstr_fmt::u64_to_sized_hex_str(buf, num, width)) }
}

/// Write the low `bit_count` bits of a `u32`.
///
/// # Safety
/// - `buf_ptr` must point to a writeable buffer of at least `buf_len` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn numstr_u32_to_sized_bin_str(
    buf_ptr: *mut u8,
    buf_len: usize,
    num: u32,
    bit_count: u32,
) -> i32 {
    let Some(width) = sized_width(bit_count) else {
        return NUMSTR_ERR_INVALID_WIDTH;
    };
    unsafe { convert_into(buf_ptr, buf_len, |buf| numstr_fmt::u32_to_sized_bin_str(buf, num, width)) }
}

/// Write the low `bit_count` bits of a `u64`.
///
/// # Safety
/// - `buf_ptr` must point to a writeable buffer of at least `buf_len` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn numstr_u64_to_sized_bin_str(
    buf_ptr: *mut u8,
    buf_len: usize,
    num: u64,
    bit_count: u32,
) -> i32 {
    let Some(width) = sized_width(bit_count) else {
        return NUMSTR_ERR_INVALID_WIDTH;
    };
    unsafe { convert_into(buf_ptr, buf_len, |buf| numstr_fmt::u64_to_sized_bin_str(buf, num, width)) }
}

/// Write the significant nibbles of a `u32`.
///
/// # Safety
/// - `buf_ptr` must point to a writeable buffer of at least `buf_len` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn numstr_u32_to_min_hex_str(
    buf_ptr: *mut u8,
    buf_len: usize,
    num: u32,
) -> i32 {
    unsafe { convert_into(buf_ptr, buf_len, |buf| numstr_fmt::u32_to_min_hex_str(buf, num)) }
}

/// Write the significant nibbles of a `u64`.
///
/// # Safety
/// - `buf_ptr` must point to a writeable buffer of at least `buf_len` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn numstr_u64_to_min_hex_str(
    buf_ptr: *mut u8,
    buf_len: usize,
    num: u64,
) -> i32 {
    unsafe { convert_into(buf_ptr, buf_len, |buf| numstr_fmt::u64_to_min_hex_str(buf, num)) }
}

/// Write the significant bits of a `u32`.
///
/// # Safety
/// - `buf_ptr` must point to a writeable buffer of at least `buf_len` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn numstr_u32_to_min_bin_str(
    buf_ptr: *mut u8,
    buf_len: usize,
    num: u32,
) -> i32 {
    unsafe { convert_into(buf_ptr, buf_len, |buf| numstr_fmt::u32_to_min_bin_str(buf, num)) }
}

/// Write the significant bits of a `u64`.
///
/// # Safety
/// - `buf_ptr` must point to a writeable buffer of at least `buf_len` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn numstr_u64_to_min_bin_str(
    buf_ptr: *mut u8,
    buf_len: usize,
    num: u64,
) -> i32 {
    unsafe { convert_into(buf_ptr, buf_len, |buf| numstr_fmt::u64_to_min_bin_str(buf, num)) }
}
