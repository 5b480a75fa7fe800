//! Decimal conversion tests: size oracle, unsigned and signed converters.

use numstr_fmt::consts::{S32_STR_MAX_SIZE, S64_STR_MAX_SIZE, U32_STR_MAX_SIZE, U64_STR_MAX_SIZE};
use numstr_fmt::error::FormatErrorKind;
use numstr_fmt::{
    FormatError, s32_str_size, s32_to_str, s64_str_size, s64_to_str, u32_str_size, u32_to_str,
    u64_str_size, u64_to_str,
};

fn convert_to_string(f: impl FnOnce(&mut [u8]) -> Result<usize, FormatError>) -> String {
    let mut buf = [0u8; 64];
    let n = f(&mut buf).unwrap();
    core::str::from_utf8(&buf[..n]).unwrap().to_string()
}

/// Deterministic spread of 64-bit values: small, near powers of ten, and scrambled.
fn sample_u64() -> Vec<u64> {
    let mut values = vec![0, 1, 9, 10, 11, 99, 100, u64::from(u32::MAX), u64::from(u32::MAX) + 1];
    let mut p = 1u64;
    while let Some(next) = p.checked_mul(10) {
        values.extend([p - 1, p, p + 1]);
        p = next;
    }
    values.extend([p - 1, p, p + 1, u64::MAX - 1, u64::MAX]);

    let mut x = 0x9E37_79B9_7F4A_7C15u64;
    for _ in 0..2000 {
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        values.push(x >> (x % 64));
    }
    values
}

// =========================================================================
// Size oracle
// =========================================================================

#[test]
fn size_of_zero_is_one() {
    assert_eq!(u32_str_size(0), 1);
    assert_eq!(u64_str_size(0), 1);
}

#[test]
fn size_at_digit_boundaries() {
    assert_eq!(u32_str_size(9), 1);
    assert_eq!(u32_str_size(10), 2);
    assert_eq!(u32_str_size(99), 2);
    assert_eq!(u32_str_size(100), 3);
    assert_eq!(u32_str_size(999_999_999), 9);
    assert_eq!(u32_str_size(1_000_000_000), 10);
    assert_eq!(u32_str_size(u32::MAX), U32_STR_MAX_SIZE);
    assert_eq!(u64_str_size(9_999_999_999_999_999_999), 19);
    assert_eq!(u64_str_size(10_000_000_000_000_000_000), 20);
    assert_eq!(u64_str_size(u64::MAX), U64_STR_MAX_SIZE);
}

#[test]
fn signed_size_counts_minus() {
    assert_eq!(s32_str_size(0), 1);
    assert_eq!(s32_str_size(-1), 2);
    assert_eq!(s32_str_size(i32::MIN), S32_STR_MAX_SIZE);
    assert_eq!(s64_str_size(i64::MIN), S64_STR_MAX_SIZE);
    assert_eq!(s64_str_size(i64::MAX), 19);
}

#[test]
fn size_matches_output_length() {
    for n in sample_u64() {
        let text = convert_to_string(|buf| u64_to_str(buf, n));
        assert_eq!(text.len(), u64_str_size(n), "size mismatch for {n}");
        if let Ok(narrow) = u32::try_from(n) {
            assert_eq!(u32_str_size(narrow), text.len());
        }
    }
}

// =========================================================================
// Unsigned
// =========================================================================

#[test]
fn u32_zero() {
    let mut buf = [0u8; U32_STR_MAX_SIZE];
    let n = u32_to_str(&mut buf, 0).unwrap();
    assert_eq!(n, 1);
    assert_eq!(&buf[..n], b"0");
}

#[test]
fn u32_max() {
    let mut buf = [0u8; U32_STR_MAX_SIZE];
    let n = u32_to_str(&mut buf, 4_294_967_295).unwrap();
    assert_eq!(n, 10);
    assert_eq!(&buf[..n], b"4294967295");
}

#[test]
fn u64_max() {
    let output = convert_to_string(|buf| u64_to_str(buf, u64::MAX));
    assert_eq!(output, "18446744073709551615");
}

#[test]
fn u64_just_above_u32_range() {
    let output = convert_to_string(|buf| u64_to_str(buf, 4_294_967_296));
    assert_eq!(output, "4294967296");
}

#[test]
fn unsigned_has_no_leading_zero() {
    for n in sample_u64() {
        let text = convert_to_string(|buf| u64_to_str(buf, n));
        if n != 0 {
            assert!(!text.starts_with('0'), "leading zero in {text}");
        }
    }
}

#[test]
fn unsigned_roundtrips_through_parse() {
    for n in sample_u64() {
        let text = convert_to_string(|buf| u64_to_str(buf, n));
        assert_eq!(text.parse::<u64>().unwrap(), n);
        assert_eq!(text, n.to_string());
    }
    for n in [0, 1, 4_294_967_295u32, 1_000_000_000, 123_456_789] {
        let text = convert_to_string(|buf| u32_to_str(buf, n));
        assert_eq!(text.parse::<u32>().unwrap(), n);
    }
}

#[test]
fn u32_and_u64_agree() {
    for n in sample_u64().into_iter().filter_map(|n| u32::try_from(n).ok()) {
        let narrow = convert_to_string(|buf| u32_to_str(buf, n));
        let wide = convert_to_string(|buf| u64_to_str(buf, u64::from(n)));
        assert_eq!(narrow, wide);
    }
}

#[test]
fn exact_size_buffer_is_enough() {
    let mut buf = [0u8; 3];
    assert_eq!(u32_to_str(&mut buf, 999), Ok(3));
    assert_eq!(&buf, b"999");
}

#[test]
fn short_buffer_is_rejected_untouched() {
    let mut buf = [b'x'; 3];
    let err = u32_to_str(&mut buf, 1000).unwrap_err();
    assert_eq!(err.kind, FormatErrorKind::BufferTooSmall);
    assert_eq!(err.needed, 4);
    assert_eq!(&buf, b"xxx");
}

#[test]
fn empty_buffer_is_rejected() {
    let err = u64_to_str(&mut [], 0).unwrap_err();
    assert_eq!(err, FormatError::buffer_too_small(1));
}

#[test]
fn writes_only_within_returned_length() {
    let mut buf = [b'#'; 16];
    let n = u32_to_str(&mut buf, 42).unwrap();
    assert_eq!(&buf[..n], b"42");
    assert!(buf[n..].iter().all(|&b| b == b'#'));
}

// =========================================================================
// Signed
// =========================================================================

#[test]
fn s32_minus_one() {
    let mut buf = [0u8; S32_STR_MAX_SIZE];
    let n = s32_to_str(&mut buf, -1).unwrap();
    assert_eq!(&buf[..n], b"-1");
}

#[test]
fn s32_min_does_not_overflow() {
    let output = convert_to_string(|buf| s32_to_str(buf, i32::MIN));
    assert_eq!(output, "-2147483648");
}

#[test]
fn s64_min_does_not_overflow() {
    let output = convert_to_string(|buf| s64_to_str(buf, i64::MIN));
    assert_eq!(output, "-9223372036854775808");
    assert_eq!(output.len(), S64_STR_MAX_SIZE);
}

#[test]
fn signed_non_negative_matches_unsigned() {
    assert_eq!(convert_to_string(|buf| s32_to_str(buf, 0)), "0");
    assert_eq!(convert_to_string(|buf| s32_to_str(buf, i32::MAX)), "2147483647");
    assert_eq!(convert_to_string(|buf| s64_to_str(buf, i64::MAX)), "9223372036854775807");
}

#[test]
fn negative_is_minus_then_magnitude() {
    for n in sample_u64() {
        let Ok(positive) = i64::try_from(n) else {
            continue;
        };
        if positive == 0 {
            continue;
        }
        let negative = convert_to_string(|buf| s64_to_str(buf, -positive));
        let magnitude = convert_to_string(|buf| u64_to_str(buf, n));
        assert_eq!(negative, format!("-{magnitude}"));
    }
}

#[test]
fn signed_roundtrips_through_parse() {
    for n in [i32::MIN, i32::MIN + 1, -1, 0, 1, i32::MAX] {
        let text = convert_to_string(|buf| s32_to_str(buf, n));
        assert_eq!(text.parse::<i32>().unwrap(), n);
    }
    for n in [i64::MIN, i64::MIN + 1, -1_000_000_000_000, -1, 0, i64::MAX] {
        let text = convert_to_string(|buf| s64_to_str(buf, n));
        assert_eq!(text.parse::<i64>().unwrap(), n);
    }
}

#[test]
fn signed_short_buffer_counts_sign() {
    let mut buf = [0u8; 10];
    let err = s32_to_str(&mut buf, i32::MIN).unwrap_err();
    assert_eq!(err, FormatError::buffer_too_small(11));
}
