//! Logger tests against in-memory outputs.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use numstr_log::{LogError, Logs, LogsConfig, Output};

/// A writer whose contents stay readable after it is handed to the logger.
#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::Error::other("disk full"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn logs_with_outputs() -> (Logs, SharedBuf, SharedBuf) {
    let console = SharedBuf::default();
    let file = SharedBuf::default();
    let mut logs = Logs::new();
    logs.attach_output(Output::Console, console.clone());
    logs.attach_output(Output::File, file.clone());
    (logs, console, file)
}

// =========================================================================
// Appending and flushing
// =========================================================================

#[test]
fn nothing_written_before_flush() {
    let (mut logs, console, file) = logs_with_outputs();
    logs.append_literal("hello").unwrap();
    assert_eq!(logs.buffered(), b"hello");
    assert_eq!(console.contents(), "");
    assert_eq!(file.contents(), "");

    logs.flush().unwrap();
    assert_eq!(console.contents(), "hello");
    assert_eq!(file.contents(), "hello");
    assert!(logs.buffered().is_empty());
}

#[test]
fn appends_every_number_kind() {
    let (mut logs, console, _file) = logs_with_outputs();
    logs.append_u32(4_294_967_295).unwrap();
    logs.append_char(' ').unwrap();
    logs.append_u64(u64::MAX).unwrap();
    logs.append_char(' ').unwrap();
    logs.append_s32(i32::MIN).unwrap();
    logs.append_char(' ').unwrap();
    logs.append_s64(-5).unwrap();
    logs.append_char(' ').unwrap();
    logs.append_f32(-12_345.068).unwrap();
    logs.append_char(' ').unwrap();
    logs.append_hex(0x3CBF_FFFF).unwrap();
    logs.append_char(' ').unwrap();
    logs.append_hex64(0).unwrap();
    logs.append_char(' ').unwrap();
    logs.append_bin(5).unwrap();
    logs.append_char(' ').unwrap();
    logs.append_bin64(1 << 33).unwrap();
    logs.append_cstr(" end").unwrap();
    logs.flush().unwrap();
    assert_eq!(
        console.contents(),
        "4294967295 18446744073709551615 -2147483648 -5 -12345.068359 0x3cbfffff 0x0 0b101 \
         0b1000000000000000000000000000000000 end"
    );
}

#[test]
fn non_ascii_char_is_utf8() {
    let (mut logs, console, _file) = logs_with_outputs();
    logs.append_char('é').unwrap();
    logs.flush().unwrap();
    assert_eq!(console.contents(), "é");
}

#[test]
fn full_buffer_flushes_implicitly() {
    let console = SharedBuf::default();
    let mut logs = Logs::with_config(LogsConfig { capacity: 70 });
    logs.attach_output(Output::Console, console.clone());

    logs.append_literal(&"a".repeat(65)).unwrap();
    assert_eq!(console.contents(), "");
    logs.append_u32(123_456).unwrap();
    assert_eq!(console.contents(), "a".repeat(65));
    assert_eq!(logs.buffered(), b"123456");
}

#[test]
fn oversized_text_is_written_through_in_order() {
    let console = SharedBuf::default();
    let mut logs = Logs::with_config(LogsConfig { capacity: 0 });
    logs.attach_output(Output::Console, console.clone());
    let capacity = logs.capacity();

    logs.append_literal("head ").unwrap();
    let long = "x".repeat(capacity + 1);
    logs.append_literal(&long).unwrap();
    logs.append_literal(" tail").unwrap();
    logs.flush().unwrap();
    assert_eq!(console.contents(), format!("head {long} tail"));
}

#[test]
fn capacity_has_a_floor() {
    let logs = Logs::with_config(LogsConfig { capacity: 1 });
    assert_eq!(logs.capacity(), numstr_fmt::consts::BIN_STR_MAX_SIZE);
    assert_eq!(Logs::new().capacity(), numstr_log::DEFAULT_CAPACITY);
}

// =========================================================================
// Enabling and disabling outputs
// =========================================================================

#[test]
fn disabled_output_is_skipped() {
    let (mut logs, console, file) = logs_with_outputs();
    logs.disable_output(Output::Console);
    assert!(!logs.is_enabled(Output::Console));
    logs.append_literal("file only\n").unwrap();
    logs.flush().unwrap();

    logs.enable_output(Output::Console);
    logs.disable_output(Output::File);
    logs.append_literal("console only\n").unwrap();
    logs.flush().unwrap();

    assert_eq!(console.contents(), "console only\n");
    assert_eq!(file.contents(), "file only\n");
}

#[test]
fn flush_without_outputs_discards() {
    let mut logs = Logs::new();
    logs.append_literal("dropped").unwrap();
    logs.flush().unwrap();
    assert!(logs.buffered().is_empty());

    let console = SharedBuf::default();
    logs.attach_output(Output::Console, console.clone());
    logs.flush().unwrap();
    assert_eq!(console.contents(), "");
}

#[test]
fn close_flushes_then_detaches() {
    let (mut logs, console, file) = logs_with_outputs();
    logs.append_literal("last").unwrap();
    logs.close_file_output().unwrap();
    assert!(!logs.is_open(Output::File));
    assert!(logs.is_open(Output::Console));
    assert_eq!(file.contents(), "last");
    assert_eq!(console.contents(), "last");

    logs.append_literal(" more").unwrap();
    logs.close_console_output().unwrap();
    assert_eq!(console.contents(), "last more");
    assert_eq!(file.contents(), "last");
}

#[test]
fn drop_flushes() {
    let console = SharedBuf::default();
    {
        let mut logs = Logs::new();
        logs.attach_output(Output::Console, console.clone());
        logs.append_literal("bye").unwrap();
    }
    assert_eq!(console.contents(), "bye");
}

// =========================================================================
// Errors
// =========================================================================

#[test]
fn failing_output_reports_io_error_and_clears() {
    let file = SharedBuf::default();
    let mut logs = Logs::new();
    logs.attach_output(Output::Console, FailingWriter);
    logs.attach_output(Output::File, file.clone());
    logs.append_literal("data").unwrap();

    let err = logs.flush().unwrap_err();
    assert!(matches!(err, LogError::Io(_)));
    assert!(err.to_string().contains("disk full"));
    assert_eq!(file.contents(), "data");
    assert!(logs.buffered().is_empty());
}

#[test]
fn oversized_text_reaches_file_when_console_fails() {
    let file = SharedBuf::default();
    let mut logs = Logs::with_config(LogsConfig { capacity: 0 });
    logs.attach_output(Output::Console, FailingWriter);
    logs.attach_output(Output::File, file.clone());
    let capacity = logs.capacity();

    logs.append_literal("head ").unwrap();
    let long = "y".repeat(capacity + 1);
    let err = logs.append_literal(&long).unwrap_err();
    assert!(matches!(err, LogError::Io(_)));
    assert_eq!(file.contents(), format!("head {long}"));
    assert!(logs.buffered().is_empty());
}

#[test]
fn file_output_appends_to_disk() {
    let path = std::env::temp_dir().join(format!("numstr-log-{}.txt", std::process::id()));
    let _ = std::fs::remove_file(&path);

    let mut logs = Logs::new();
    logs.open_file_output(&path).unwrap();
    logs.append_hex(0x3D00_0000).unwrap();
    logs.append_literal(" (").unwrap();
    logs.append_u32(0x3D00_0000).unwrap();
    logs.append_literal(") as a f32 is ").unwrap();
    logs.append_f32(f32::from_bits(0x3D00_0000)).unwrap();
    logs.append_char('\n').unwrap();
    logs.close_file_output().unwrap();

    let mut logs = Logs::new();
    logs.open_file_output(&path).unwrap();
    logs.append_literal("second session\n").unwrap();
    drop(logs);

    let text = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(
        text,
        "0x3d000000 (1023410176) as a f32 is 0.031250\nsecond session\n"
    );
}
