//! Sequence command handler

use anyhow::{Context, Result};
use std::io::{self, Write};

use colorexpansi::cli::ShowFormat;
use colorexpansi::ansi::SGR_DELIMITER;
use colorexpansi::{parse_control, ControlSequence};

use super::escape_control;

/// Parse a color spec and print its control sequence.
#[cfg(not(tarpaulin_include))]
pub fn handle(spec: &str, show: ShowFormat) -> Result<()> {
    let sequence = parse_control(spec)?;
    let mut stdout = io::stdout().lock();
    match show {
        // No trailing newline: raw output is meant to be piped or embedded
        ShowFormat::Raw => stdout.write_all(&sequence.as_bytes())?,
        _ => writeln!(stdout, "{}", describe(&sequence, show)?)?,
    }
    stdout.flush()?;
    Ok(())
}

/// Textual representation of a sequence for the non-raw output modes.
pub fn describe(sequence: &ControlSequence, show: ShowFormat) -> Result<String> {
    Ok(match show {
        ShowFormat::Raw => sequence.as_str(),
        ShowFormat::Escaped => escape_control(&sequence.as_str()),
        ShowFormat::Arguments => sequence.arguments().join(SGR_DELIMITER),
        ShowFormat::Json => {
            serde_json::to_string_pretty(sequence).context("Failed to serialize sequence")?
        }
    })
}
