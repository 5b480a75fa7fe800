use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use numstr_fmt::consts::BIN_STR_MAX_SIZE;
use numstr_fmt::{FormatError, FormatErrorKind, NumWriter};

use crate::error::LogError;

/// Buffer size used by [`Logs::new`].
pub const DEFAULT_CAPACITY: usize = 4096;

/// A log destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    Console,
    File,
}

/// Logger settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogsConfig {
    /// Size of the in-memory buffer in bytes. Raised to at least
    /// [`BIN_STR_MAX_SIZE`] so any single number fits after a flush.
    pub capacity: usize,
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

struct Sink {
    writer: Option<Box<dyn Write + Send>>,
    enabled: bool,
}

impl Sink {
    fn new() -> Self {
        Self {
            writer: None,
            enabled: true,
        }
    }

    fn emit(&mut self, bytes: &[u8]) -> io::Result<()> {
        if !self.enabled {
            return Ok(());
        }
        if let Some(w) = self.writer.as_mut() {
            w.write_all(bytes)?;
            w.flush()?;
        }
        Ok(())
    }
}

/// Buffered logger writing to an optional console and an optional file.
///
/// Outputs start enabled; an output receives text only while it is both open
/// and enabled. Flushing with no such output discards the buffered text.
pub struct Logs {
    buf: Box<[u8]>,
    len: usize,
    console: Sink,
    file: Sink,
}

impl Logs {
    /// Creates a logger with a [`DEFAULT_CAPACITY`] buffer and no outputs.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(LogsConfig::default())
    }

    #[must_use]
    pub fn with_config(config: LogsConfig) -> Self {
        Self {
            buf: vec![0; config.capacity.max(BIN_STR_MAX_SIZE)].into_boxed_slice(),
            len: 0,
            console: Sink::new(),
            file: Sink::new(),
        }
    }

    /// Returns the buffer size in bytes.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns the text appended since the last flush.
    #[must_use]
    pub fn buffered(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Routes console output to standard output.
    pub fn open_console_output(&mut self) {
        self.attach_output(Output::Console, io::stdout());
    }

    /// Opens `path` for appending and routes file output to it.
    pub fn open_file_output(&mut self, path: impl AsRef<Path>) -> Result<(), LogError> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        self.attach_output(Output::File, file);
        Ok(())
    }

    /// Routes `output` to an arbitrary writer, replacing any open one.
    pub fn attach_output(&mut self, output: Output, writer: impl Write + Send + 'static) {
        self.sink_mut(output).writer = Some(Box::new(writer));
    }

    /// Flushes buffered text, then closes the console output.
    pub fn close_console_output(&mut self) -> Result<(), LogError> {
        self.close(Output::Console)
    }

    /// Flushes buffered text, then closes the file output.
    pub fn close_file_output(&mut self) -> Result<(), LogError> {
        self.close(Output::File)
    }

    pub fn enable_output(&mut self, output: Output) {
        self.sink_mut(output).enabled = true;
    }

    pub fn disable_output(&mut self, output: Output) {
        self.sink_mut(output).enabled = false;
    }

    #[must_use]
    pub fn is_enabled(&self, output: Output) -> bool {
        self.sink(output).enabled
    }

    #[must_use]
    pub fn is_open(&self, output: Output) -> bool {
        self.sink(output).writer.is_some()
    }

    /// Appends compile-time text.
    pub fn append_literal(&mut self, text: &str) -> Result<(), LogError> {
        self.append_bytes(text.as_bytes())
    }

    /// Appends runtime text.
    pub fn append_cstr(&mut self, text: &str) -> Result<(), LogError> {
        self.append_bytes(text.as_bytes())
    }

    pub fn append_char(&mut self, c: char) -> Result<(), LogError> {
        let mut utf8 = [0u8; 4];
        self.append_bytes(c.encode_utf8(&mut utf8).as_bytes())
    }

    pub fn append_u32(&mut self, num: u32) -> Result<(), LogError> {
        self.append_with(|w| w.write_u32(num))
    }

    pub fn append_u64(&mut self, num: u64) -> Result<(), LogError> {
        self.append_with(|w| w.write_u64(num))
    }

    pub fn append_s32(&mut self, num: i32) -> Result<(), LogError> {
        self.append_with(|w| w.write_s32(num))
    }

    pub fn append_s64(&mut self, num: i64) -> Result<(), LogError> {
        self.append_with(|w| w.write_s64(num))
    }

    /// Appends `num` with six fractional digits.
    pub fn append_f32(&mut self, num: f32) -> Result<(), LogError> {
        self.append_with(|w| w.write_f32(num))
    }

    /// Appends `num` as `0x` and its significant nibbles.
    pub fn append_hex(&mut self, num: u32) -> Result<(), LogError> {
        self.append_with(|w| w.write_prefixed_hex32(num))
    }

    /// Appends `num` as `0x` and its significant nibbles.
    pub fn append_hex64(&mut self, num: u64) -> Result<(), LogError> {
        self.append_with(|w| w.write_prefixed_hex64(num))
    }

    /// Appends `num` as `0b` and its significant bits.
    pub fn append_bin(&mut self, num: u32) -> Result<(), LogError> {
        self.append_with(|w| w.write_prefixed_bin32(num))
    }

    /// Appends `num` as `0b` and its significant bits.
    pub fn append_bin64(&mut self, num: u64) -> Result<(), LogError> {
        self.append_with(|w| w.write_prefixed_bin64(num))
    }

    /// Writes buffered text to every open, enabled output and empties the
    /// buffer. The buffer is emptied even when an output fails.
    pub fn flush(&mut self) -> Result<(), LogError> {
        let len = std::mem::take(&mut self.len);
        let bytes = &self.buf[..len];
        let console = self.console.emit(bytes);
        let file = self.file.emit(bytes);
        console?;
        file?;
        Ok(())
    }

    fn close(&mut self, output: Output) -> Result<(), LogError> {
        let flushed = self.flush();
        self.sink_mut(output).writer = None;
        flushed
    }

    fn append_bytes(&mut self, bytes: &[u8]) -> Result<(), LogError> {
        if bytes.len() > self.buf.len() {
            // Larger than the whole buffer: keep ordering and write through.
            // A failing output does not starve the other one.
            let flushed = self.flush();
            let console = self.console.emit(bytes);
            let file = self.file.emit(bytes);
            flushed?;
            console?;
            file?;
            return Ok(());
        }
        self.append_with(|w| w.write_bytes(bytes))
    }

    /// Appends through `write`, flushing once and retrying when the buffer is full.
    fn append_with(
        &mut self,
        write: impl Fn(&mut NumWriter<'_>) -> Result<(), FormatError>,
    ) -> Result<(), LogError> {
        match self.try_append(&write) {
            Err(e) if e.kind == FormatErrorKind::BufferTooSmall => {
                self.flush()?;
                Ok(self.try_append(&write)?)
            }
            other => Ok(other?),
        }
    }

    fn try_append(
        &mut self,
        write: &impl Fn(&mut NumWriter<'_>) -> Result<(), FormatError>,
    ) -> Result<(), FormatError> {
        let mut w = NumWriter::new(&mut self.buf[self.len..]);
        write(&mut w)?;
        let n = w.written();
        self.len += n;
        Ok(())
    }

    fn sink(&self, output: Output) -> &Sink {
        match output {
            Output::Console => &self.console,
            Output::File => &self.file,
        }
    }

    fn sink_mut(&mut self, output: Output) -> &mut Sink {
        match output {
            Output::Console => &mut self.console,
            Output::File => &mut self.file,
        }
    }
}

impl Default for Logs {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Logs {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}
