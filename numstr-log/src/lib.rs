//! Buffered logger with console and file outputs.
//!
//! Text and numbers are appended to a fixed-size buffer through
//! [`numstr_fmt::NumWriter`] and written to every enabled output on
//! [`Logs::flush`], or earlier when the buffer runs out of room.
//!
//! ```no_run
//! use numstr_log::{Logs, Output};
//!
//! let mut logs = Logs::new();
//! logs.open_console_output();
//! logs.open_file_output("logs.txt")?;
//!
//! logs.append_literal("temperature ")?;
//! logs.append_f32(21.5)?;
//! logs.append_char('\n')?;
//! logs.flush()?;
//!
//! logs.disable_output(Output::Console);
//! logs.append_literal("file only\n")?;
//! logs.close_file_output()?;
//! # Ok::<(), numstr_log::LogError>(())
//! ```

pub mod error;
pub mod logs;

pub use error::LogError;
pub use logs::{DEFAULT_CAPACITY, Logs, LogsConfig, Output};
