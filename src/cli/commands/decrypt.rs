//! `ecv decrypt` — print the plaintext of an encrypted value.

use std::path::Path;

use crate::cli::{read_input, resolve_key, Cli};
use crate::config::Settings;
use crate::errors::Result;
use crate::value::EncryptedValue;

/// Execute the `decrypt` command.
pub fn execute(cli: &Cli, settings: &Settings, project_dir: &Path, value: Option<&str>) -> Result<()> {
    let input = read_input(value, "Encrypted value", false)?;

    // Parse before resolving the key so format errors surface first.
    let encrypted: EncryptedValue = input.trim().parse()?;
    let key = resolve_key(cli, settings, project_dir)?;

    println!("{}", encrypted.decrypt(&key)?);
    Ok(())
}
