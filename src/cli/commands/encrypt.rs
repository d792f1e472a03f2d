//! `ecv encrypt` — encrypt a plaintext value.

use std::path::Path;

use crate::cli::output;
use crate::cli::{read_input, resolve_key, Cli};
use crate::config::Settings;
use crate::encrypter;
use crate::errors::Result;

/// Execute the `encrypt` command.
pub fn execute(cli: &Cli, settings: &Settings, project_dir: &Path, value: Option<&str>) -> Result<()> {
    let key = resolve_key(cli, settings, project_dir)?;

    if value.is_some() {
        output::warning("Value provided on command line — it may appear in shell history.");
    }
    let plaintext = read_input(value, "Value to encrypt", true)?;

    let encrypted = encrypter::encrypt(&key, &plaintext)?;
    println!("{}", encrypted.to_serializable()?);

    Ok(())
}
