//! Number-to-text conversion into caller-provided buffers.
//!
//! Every converter takes a `&mut [u8]`, writes its text from index 0 and
//! returns the number of bytes written. Nothing is NUL-terminated; the
//! returned length is authoritative.
//!
//! ```
//! use numstr_fmt::consts::F32_STR_MAX_SIZE;
//!
//! let mut buf = [0u8; F32_STR_MAX_SIZE];
//! let n = numstr_fmt::f32_to_str(&mut buf, 1.5).unwrap();
//! assert_eq!(&buf[..n], b"1.500000");
//! ```

#![no_std]
#![forbid(unsafe_code)]

#[cfg(feature = "std")]
extern crate std;

pub mod buf;
pub mod consts;
pub mod dec;
pub mod error;
pub mod float;
pub mod radix;
pub mod size;
pub mod unchecked;
pub mod writer;

pub use buf::NumBuf;
pub use error::{FormatError, FormatErrorKind};
pub use writer::NumWriter;

pub use dec::{s32_to_str, s64_to_str, u32_to_str, u64_to_str};
pub use float::f32_to_str;
pub use radix::{
    u32_to_min_bin_str, u32_to_min_hex_str, u32_to_sized_bin_str, u32_to_sized_hex_str,
    u64_to_min_bin_str, u64_to_min_hex_str, u64_to_sized_bin_str, u64_to_sized_hex_str,
};
pub use size::{
    f32_str_size, s32_str_size, s64_str_size, u32_bin_size, u32_hex_size, u32_str_size,
    u64_bin_size, u64_hex_size, u64_str_size,
};
