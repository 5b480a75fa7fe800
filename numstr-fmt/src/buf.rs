use core::fmt;
use core::ops::Deref;

use crate::error::FormatError;
use crate::{dec, float, radix};

/// A fixed-capacity text buffer stored inline (on the stack). No heap allocation.
///
/// Size `N` from [`crate::consts`] to make the constructors infallible in
/// practice, or smaller when the value's range is known.
///
/// ```
/// use numstr_fmt::NumBuf;
/// use numstr_fmt::consts::S32_STR_MAX_SIZE;
///
/// let text = NumBuf::<S32_STR_MAX_SIZE>::s32(i32::MIN).unwrap();
/// assert_eq!(text.as_str(), "-2147483648");
/// ```
#[derive(Clone, Copy)]
pub struct NumBuf<const N: usize> {
    data: [u8; N],
    len: usize,
}

impl<const N: usize> NumBuf<N> {
    /// Creates an empty `NumBuf`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            data: [0; N],
            len: 0,
        }
    }

    /// Fills a new buffer with the output of a checked converter.
    pub fn from_fn(
        convert: impl FnOnce(&mut [u8]) -> Result<usize, FormatError>,
    ) -> Result<Self, FormatError> {
        let mut buf = Self::new();
        buf.len = convert(&mut buf.data)?;
        Ok(buf)
    }

    pub fn u32(num: u32) -> Result<Self, FormatError> {
        Self::from_fn(|out| dec::u32_to_str(out, num))
    }

    pub fn u64(num: u64) -> Result<Self, FormatError> {
        Self::from_fn(|out| dec::u64_to_str(out, num))
    }

    pub fn s32(num: i32) -> Result<Self, FormatError> {
        Self::from_fn(|out| dec::s32_to_str(out, num))
    }

    pub fn s64(num: i64) -> Result<Self, FormatError> {
        Self::from_fn(|out| dec::s64_to_str(out, num))
    }

    pub fn f32(num: f32) -> Result<Self, FormatError> {
        Self::from_fn(|out| float::f32_to_str(out, num))
    }

    pub fn min_hex32(num: u32) -> Result<Self, FormatError> {
        Self::from_fn(|out| radix::u32_to_min_hex_str(out, num))
    }

    pub fn min_hex64(num: u64) -> Result<Self, FormatError> {
        Self::from_fn(|out| radix::u64_to_min_hex_str(out, num))
    }

    pub fn sized_hex32(num: u32, nibble_count: usize) -> Result<Self, FormatError> {
        Self::from_fn(|out| radix::u32_to_sized_hex_str(out, num, nibble_count))
    }

    pub fn sized_hex64(num: u64, nibble_count: usize) -> Result<Self, FormatError> {
        Self::from_fn(|out| radix::u64_to_sized_hex_str(out, num, nibble_count))
    }

    pub fn min_bin32(num: u32) -> Result<Self, FormatError> {
        Self::from_fn(|out| radix::u32_to_min_bin_str(out, num))
    }

    pub fn min_bin64(num: u64) -> Result<Self, FormatError> {
        Self::from_fn(|out| radix::u64_to_min_bin_str(out, num))
    }

    pub fn sized_bin32(num: u32, bit_count: usize) -> Result<Self, FormatError> {
        Self::from_fn(|out| radix::u32_to_sized_bin_str(out, num, bit_count))
    }

    pub fn sized_bin64(num: u64, bit_count: usize) -> Result<Self, FormatError> {
        Self::from_fn(|out| radix::u64_to_sized_bin_str(out, num, bit_count))
    }

    /// Returns the number of bytes held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the maximum capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        N
    }

    /// Returns the written bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.len]
    }

    /// Returns the written text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Converters only emit ASCII.
        core::str::from_utf8(self.as_bytes()).unwrap_or("")
    }
}

impl<const N: usize> Default for NumBuf<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Deref for NumBuf<N> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<const N: usize> fmt::Display for NumBuf<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<const N: usize> fmt::Debug for NumBuf<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl<const N: usize> PartialEq for NumBuf<N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<const N: usize> Eq for NumBuf<N> {}

impl<const N: usize> PartialEq<str> for NumBuf<N> {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<const N: usize> PartialEq<&str> for NumBuf<N> {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}
