use crate::consts::{BIN_PREFIX, HEX_PREFIX};
use crate::error::{FormatError, ensure_capacity};
use crate::size::{u32_bin_size, u32_hex_size, u64_bin_size, u64_hex_size};
use crate::{dec, float, radix, unchecked};

/// A cursor-based writer that appends numbers and text to a caller-provided
/// byte buffer.
///
/// Every append either writes its whole output or fails with
/// [`FormatErrorKind::BufferTooSmall`](crate::FormatErrorKind::BufferTooSmall)
/// and leaves the cursor where it was.
pub struct NumWriter<'buf> {
    buf: &'buf mut [u8],
    pos: usize,
}

impl<'buf> NumWriter<'buf> {
    /// Create a new writer over the given buffer.
    pub fn new(buf: &'buf mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Returns the number of bytes written so far.
    #[must_use]
    pub fn written(&self) -> usize {
        self.pos
    }

    /// Returns the number of bytes still free.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Returns the bytes written so far.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.pos]
    }

    /// Moves the cursor back to the start of the buffer.
    pub fn clear(&mut self) {
        self.pos = 0;
    }

    /// Write raw bytes to the buffer.
    pub fn write_bytes(&mut self, data: &[u8]) -> Result<(), FormatError> {
        ensure_capacity(self.tail(), data.len())?;
        self.buf[self.pos..self.pos + data.len()].copy_from_slice(data);
        self.pos += data.len();
        Ok(())
    }

    /// Write a string as-is.
    pub fn write_str(&mut self, s: &str) -> Result<(), FormatError> {
        self.write_bytes(s.as_bytes())
    }

    /// Write a single byte.
    pub fn write_byte(&mut self, b: u8) -> Result<(), FormatError> {
        self.write_bytes(&[b])
    }

    pub fn write_u32(&mut self, num: u32) -> Result<(), FormatError> {
        self.put(|out| dec::u32_to_str(out, num))
    }

    pub fn write_u64(&mut self, num: u64) -> Result<(), FormatError> {
        self.put(|out| dec::u64_to_str(out, num))
    }

    pub fn write_s32(&mut self, num: i32) -> Result<(), FormatError> {
        self.put(|out| dec::s32_to_str(out, num))
    }

    pub fn write_s64(&mut self, num: i64) -> Result<(), FormatError> {
        self.put(|out| dec::s64_to_str(out, num))
    }

    pub fn write_f32(&mut self, num: f32) -> Result<(), FormatError> {
        self.put(|out| float::f32_to_str(out, num))
    }

    pub fn write_min_hex32(&mut self, num: u32) -> Result<(), FormatError> {
        self.put(|out| radix::u32_to_min_hex_str(out, num))
    }

    pub fn write_min_hex64(&mut self, num: u64) -> Result<(), FormatError> {
        self.put(|out| radix::u64_to_min_hex_str(out, num))
    }

    pub fn write_sized_hex32(&mut self, num: u32, nibble_count: usize) -> Result<(), FormatError> {
        self.put(|out| radix::u32_to_sized_hex_str(out, num, nibble_count))
    }

    pub fn write_sized_hex64(&mut self, num: u64, nibble_count: usize) -> Result<(), FormatError> {
        self.put(|out| radix::u64_to_sized_hex_str(out, num, nibble_count))
    }

    pub fn write_min_bin32(&mut self, num: u32) -> Result<(), FormatError> {
        self.put(|out| radix::u32_to_min_bin_str(out, num))
    }

    pub fn write_min_bin64(&mut self, num: u64) -> Result<(), FormatError> {
        self.put(|out| radix::u64_to_min_bin_str(out, num))
    }

    pub fn write_sized_bin32(&mut self, num: u32, bit_count: usize) -> Result<(), FormatError> {
        self.put(|out| radix::u32_to_sized_bin_str(out, num, bit_count))
    }

    pub fn write_sized_bin64(&mut self, num: u64, bit_count: usize) -> Result<(), FormatError> {
        self.put(|out| radix::u64_to_sized_bin_str(out, num, bit_count))
    }

    /// Write `num` as `0x` followed by its significant nibbles.
    pub fn write_prefixed_hex32(&mut self, num: u32) -> Result<(), FormatError> {
        self.put_prefixed(HEX_PREFIX, u32_hex_size(num), |out| {
            unchecked::u32_to_min_hex_str(out, num)
        })
    }

    /// Write `num` as `0x` followed by its significant nibbles.
    pub fn write_prefixed_hex64(&mut self, num: u64) -> Result<(), FormatError> {
        self.put_prefixed(HEX_PREFIX, u64_hex_size(num), |out| {
            unchecked::u64_to_min_hex_str(out, num)
        })
    }

    /// Write `num` as `0b` followed by its significant bits.
    pub fn write_prefixed_bin32(&mut self, num: u32) -> Result<(), FormatError> {
        self.put_prefixed(BIN_PREFIX, u32_bin_size(num), |out| {
            unchecked::u32_to_min_bin_str(out, num)
        })
    }

    /// Write `num` as `0b` followed by its significant bits.
    pub fn write_prefixed_bin64(&mut self, num: u64) -> Result<(), FormatError> {
        self.put_prefixed(BIN_PREFIX, u64_bin_size(num), |out| {
            unchecked::u64_to_min_bin_str(out, num)
        })
    }

    fn tail(&mut self) -> &mut [u8] {
        &mut self.buf[self.pos..]
    }

    /// Run a checked converter on the free tail and advance past its output.
    fn put(
        &mut self,
        convert: impl FnOnce(&mut [u8]) -> Result<usize, FormatError>,
    ) -> Result<(), FormatError> {
        let n = convert(self.tail())?;
        self.pos += n;
        Ok(())
    }

    fn put_prefixed(
        &mut self,
        prefix: &str,
        digits: usize,
        convert: impl FnOnce(&mut [u8]) -> usize,
    ) -> Result<(), FormatError> {
        ensure_capacity(self.tail(), prefix.len() + digits)?;
        let start = self.pos + prefix.len();
        self.buf[self.pos..start].copy_from_slice(prefix.as_bytes());
        let n = convert(&mut self.buf[start..]);
        self.pos = start + n;
        Ok(())
    }
}
