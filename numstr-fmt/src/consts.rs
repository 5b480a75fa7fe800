//! Maximum output sizes, in bytes, of every converter.
//!
//! A buffer of the listed size always fits the output for the given type. A
//! caller who knows the value's range may pass a smaller buffer.

/// Largest `u8` (`255`).
pub const U8_STR_MAX_SIZE: usize = 3;

/// Largest `u16` (`65535`).
pub const U16_STR_MAX_SIZE: usize = 5;

/// Largest `u32` (`4294967295`).
pub const U32_STR_MAX_SIZE: usize = 10;

/// Largest `u64` (`18446744073709551615`).
pub const U64_STR_MAX_SIZE: usize = 20;

/// Smallest `i8` (`-128`).
pub const S8_STR_MAX_SIZE: usize = 4;

/// Smallest `i16` (`-32768`).
pub const S16_STR_MAX_SIZE: usize = 6;

/// Smallest `i32` (`-2147483648`).
pub const S32_STR_MAX_SIZE: usize = 11;

/// Smallest `i64` (`-9223372036854775808`).
pub const S64_STR_MAX_SIZE: usize = 20;

/// Clamped float extreme (`-2147483648.000000`).
pub const F32_STR_MAX_SIZE: usize = 18;

/// `0x` prefix plus 16 nibbles.
pub const HEX_STR_MAX_SIZE: usize = 18;

/// `0b` prefix plus 64 bits.
pub const BIN_STR_MAX_SIZE: usize = 66;

/// Digits written after the decimal point by `f32_to_str`.
pub const F32_FRACTION_DIGITS: usize = 6;

/// Magnitude at which float input saturates. NaN and infinities render as this
/// value too, signed by their sign bit.
pub const F32_CLAMP_MAGNITUDE: u32 = 2_147_483_648;

/// Prefix written by the `0x` hexadecimal forms.
pub const HEX_PREFIX: &str = "0x";

/// Prefix written by the `0b` binary forms.
pub const BIN_PREFIX: &str = "0b";
