//! Idents command handler

use anyhow::Result;

use colorexpansi::ansi::RESET;
use colorexpansi::spec::{COLOR_IDENTS, MODE_IDENTS};
use colorexpansi::ControlSequence;

/// Print the color and mode identifier tables with a styled sample per row.
#[cfg(not(tarpaulin_include))]
pub fn handle() -> Result<()> {
    print!("{}", ident_table());
    Ok(())
}

/// Identifier tables, one row per identifier.
pub fn ident_table() -> String {
    let mut out = String::new();

    out.push_str("Colors (foreground, or background after '.'):\n");
    for (ident, color) in COLOR_IDENTS {
        out.push_str(&row(ident, color.name(), &ControlSequence::fg(color)));
    }

    out.push_str("\nModes (set after '+', reset after '-'):\n");
    for (ident, mode) in MODE_IDENTS {
        out.push_str(&row(ident, mode.name(), &ControlSequence::set(mode)));
    }

    out
}

fn row(ident: char, name: &str, style: &ControlSequence) -> String {
    format!("  {}  {:<10} {}sample{}\n", ident, name, style, RESET)
}
