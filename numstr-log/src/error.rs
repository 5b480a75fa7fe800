use std::fmt;
use std::io;

use numstr_fmt::FormatError;

/// Error returned by logger operations.
#[derive(Debug)]
pub enum LogError {
    /// Writing to or opening an output failed.
    Io(io::Error),
    /// A value could not be formatted into the log buffer.
    Format(FormatError),
}

impl fmt::Display for LogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogError::Io(e) => write!(f, "log output failed: {e}"),
            LogError::Format(e) => write!(f, "log formatting failed: {e}"),
        }
    }
}

impl std::error::Error for LogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LogError::Io(e) => Some(e),
            LogError::Format(e) => Some(e),
        }
    }
}

impl From<io::Error> for LogError {
    fn from(e: io::Error) -> Self {
        LogError::Io(e)
    }
}

impl From<FormatError> for LogError {
    fn from(e: FormatError) -> Self {
        LogError::Format(e)
    }
}
