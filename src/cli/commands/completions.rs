//! `ecv completions` — generate shell completion scripts.
//!
//! Usage:
//!   ecv completions bash > ~/.bash_completion.d/ecv
//!   ecv completions zsh

use std::io;

use clap::{CommandFactory, ValueEnum};
use clap_complete::{generate, Shell};

use crate::cli::Cli;
use crate::errors::{EcvError, Result};

/// Execute the `completions` command.
pub fn execute(shell: &str) -> Result<()> {
    let shell = parse_shell(shell)?;
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "ecv", &mut io::stdout());
    Ok(())
}

/// Parse a shell name, case-insensitively. `ps` is accepted for PowerShell.
fn parse_shell(name: &str) -> Result<Shell> {
    if name.eq_ignore_ascii_case("ps") {
        return Ok(Shell::PowerShell);
    }

    <Shell as ValueEnum>::from_str(name, true).map_err(|_| {
        EcvError::CommandFailed(format!(
            "unknown shell '{name}' — supported: bash, zsh, fish, powershell, elvish"
        ))
    })
}
