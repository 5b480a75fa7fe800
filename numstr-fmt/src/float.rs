//! Fixed six-digit float formatting.
//!
//! Output is `[-]<integer>.<6 digits>`. The fraction is rounded from the exact
//! binary value, ties to even, the same as C's `%f` under the default rounding
//! mode. The sign comes from the sign bit for every input, so `-0.0` and small
//! negatives that round to zero print as `-0.000000`.
//!
//! Magnitudes above 2147483648, infinities and NaN saturate to
//! `±2147483648.000000`. NaN takes its sign from its sign bit too.

use crate::consts::{F32_CLAMP_MAGNITUDE, F32_FRACTION_DIGITS};
use crate::error::{FormatError, ensure_capacity};
use crate::size::u32_str_size;
use crate::unchecked;

const SIGN_MASK: u32 = 0x8000_0000;
const EXPONENT_SHIFT: u32 = 23;
const MANTISSA_MASK: u32 = 0x007F_FFFF;
const HIDDEN_BIT: u32 = 0x0080_0000;
/// Exponent bias plus mantissa width.
const EXPONENT_OFFSET: i32 = 150;
/// Bit pattern of 2147483648.0.
const CLAMP_BITS: u32 = 0x4F00_0000;
/// 10^6, one unit in the last printed place.
const FRACTION_SCALE: u64 = 1_000_000;

/// A float split into the pieces the text form prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Decomposed {
    pub negative: bool,
    /// Integer part after rounding carry, at most 2147483648.
    pub int: u32,
    /// Rounded fraction in millionths, below 1000000.
    pub frac: u32,
}

impl Decomposed {
    pub(crate) fn str_size(self) -> usize {
        usize::from(self.negative) + u32_str_size(self.int) + 1 + F32_FRACTION_DIGITS
    }
}

pub(crate) fn decompose(num: f32) -> Decomposed {
    let bits = num.to_bits();
    let negative = bits & SIGN_MASK != 0;
    let magnitude = bits & !SIGN_MASK;

    // Infinities and every NaN payload sort above the clamp pattern.
    if magnitude > CLAMP_BITS {
        return Decomposed {
            negative,
            int: F32_CLAMP_MAGNITUDE,
            frac: 0,
        };
    }

    let biased = (magnitude >> EXPONENT_SHIFT) as i32;
    let (mantissa, exponent) = if biased == 0 {
        (magnitude & MANTISSA_MASK, 1 - EXPONENT_OFFSET)
    } else {
        ((magnitude & MANTISSA_MASK) | HIDDEN_BIT, biased - EXPONENT_OFFSET)
    };

    if exponent >= 0 {
        // At most 2^31, the clamp value itself.
        return Decomposed {
            negative,
            int: mantissa << exponent,
            frac: 0,
        };
    }

    let shift = exponent.unsigned_abs();
    let (mut int, rem) = match mantissa.checked_shr(shift) {
        Some(int) => (int, mantissa & ((1u32 << shift) - 1)),
        None => (0, mantissa),
    };
    let mut frac = round_fraction(rem, shift);
    if u64::from(frac) == FRACTION_SCALE {
        int += 1;
        frac = 0;
    }
    Decomposed {
        negative,
        int,
        frac,
    }
}

/// Rounds `rem / 2^shift` to millionths, ties to even.
fn round_fraction(rem: u32, shift: u32) -> u32 {
    // rem < 2^24, so the scaled value stays below 2^44 and anything shifted
    // further than that is under half a millionth.
    if shift >= u64::BITS {
        return 0;
    }
    let scaled = u64::from(rem) * FRACTION_SCALE;
    let quotient = scaled >> shift;
    let remainder = scaled & ((1u64 << shift) - 1);
    let half = 1u64 << (shift - 1);
    let round_up = remainder > half || (remainder == half && quotient & 1 == 1);
    (quotient + u64::from(round_up)) as u32
}

/// Writes `num` as `[-]<integer>.<6 digits>` and returns the number of bytes
/// written.
///
/// ```
/// let mut buf = [0u8; numstr_fmt::consts::F32_STR_MAX_SIZE];
/// let n = numstr_fmt::f32_to_str(&mut buf, -12345.06789).unwrap();
/// assert_eq!(&buf[..n], b"-12345.068359");
/// ```
pub fn f32_to_str(out: &mut [u8], num: f32) -> Result<usize, FormatError> {
    ensure_capacity(out, decompose(num).str_size())?;
    Ok(unchecked::f32_to_str(out, num))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decompose_splits_integer_and_fraction() {
        let parts = decompose(2.25);
        assert_eq!(
            parts,
            Decomposed {
                negative: false,
                int: 2,
                frac: 250_000,
            }
        );
    }

    #[test]
    fn decompose_carries_into_integer() {
        let parts = decompose(0.999_999_9);
        assert_eq!(parts.int, 1);
        assert_eq!(parts.frac, 0);
    }

    #[test]
    fn round_fraction_ties_to_even() {
        // 1/128 = 0.0078125 -> 7812.5 millionths
        assert_eq!(round_fraction(1, 7), 7812);
        // 3/128 = 0.0234375 -> 23437.5 millionths
        assert_eq!(round_fraction(3, 7), 23438);
    }

    #[test]
    fn round_fraction_wide_shift_is_zero() {
        assert_eq!(round_fraction(0x7F_FFFF, 64), 0);
        assert_eq!(round_fraction(0x7F_FFFF, 149), 0);
    }
}
