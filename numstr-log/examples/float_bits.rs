//! Walks a float bit pattern upward one mantissa bit at a time, logging each
//! step to the console and to `logs.txt`.

use numstr_log::{LogError, Logs, Output};

const LOGS_FILE_NAME: &str = "logs.txt";

fn main() -> Result<(), LogError> {
    let mut logs = Logs::new();
    logs.open_console_output();
    logs.open_file_output(LOGS_FILE_NAME)?;

    let mut bits = 0x3C00_0000u32;
    for bit_pos in (16..=24).rev() {
        bits |= 1 << bit_pos;
        let value = f32::from_bits(bits);

        logs.append_hex(bits)?;
        logs.append_literal(" (")?;
        logs.append_u32(bits)?;
        logs.append_literal(") as a f32 is ")?;
        logs.append_f32(value)?;
        logs.append_char('\n')?;

        logs.flush()?;
    }

    logs.disable_output(Output::Console);
    logs.append_literal("========== Logging session end ==========\n\n")?;
    logs.flush()?;

    logs.enable_output(Output::Console);
    logs.disable_output(Output::File);
    logs.append_literal("\nLogs written to file ")?;
    logs.append_cstr(LOGS_FILE_NAME)?;

    logs.close_file_output()?;
    logs.close_console_output()?;
    Ok(())
}
