//! Completions command handler

use anyhow::Result;
use clap::Command;
use clap_complete::{generate, Shell as CompletionShell};

/// Generate a shell completion script on stdout.
#[cfg(not(tarpaulin_include))]
pub fn generate_completions(cmd: Command, shell: CompletionShell) -> Result<()> {
    print!("{}", completion_script(cmd, shell));
    Ok(())
}

/// Completion script as a string.
pub fn completion_script(cmd: Command, shell: CompletionShell) -> String {
    let mut cmd = cmd;
    let mut buffer = Vec::new();
    generate(shell, &mut cmd, "colorexpansi", &mut buffer);
    String::from_utf8_lossy(&buffer).into_owned()
}
