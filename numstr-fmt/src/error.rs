use core::fmt;

/// Specific kind of format error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatErrorKind {
    /// Output buffer is shorter than the text the converter would write.
    BufferTooSmall,
    /// Nibble or bit count is zero.
    InvalidWidth,
}

/// Error returned by the checked converters.
///
/// A converter that returns an error has not written to the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatError {
    pub kind: FormatErrorKind,
    /// Buffer length the call required. Zero for [`FormatErrorKind::InvalidWidth`].
    pub needed: usize,
}

impl FormatError {
    #[must_use]
    pub fn buffer_too_small(needed: usize) -> Self {
        Self {
            kind: FormatErrorKind::BufferTooSmall,
            needed,
        }
    }

    #[must_use]
    pub fn invalid_width() -> Self {
        Self {
            kind: FormatErrorKind::InvalidWidth,
            needed: 0,
        }
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            FormatErrorKind::BufferTooSmall => {
                write!(f, "output buffer too small, {} bytes needed", self.needed)
            }
            FormatErrorKind::InvalidWidth => write!(f, "digit count must be 1 or greater"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FormatError {}

/// Fails with [`FormatErrorKind::BufferTooSmall`] unless `out` holds `needed` bytes.
#[inline]
pub(crate) fn ensure_capacity(out: &[u8], needed: usize) -> Result<(), FormatError> {
    if out.len() < needed {
        return Err(FormatError::buffer_too_small(needed));
    }
    Ok(())
}
