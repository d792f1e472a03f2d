//! `ecv substitute` — decrypt every `${enc:...}` variable in a file.

use std::fs;
use std::path::Path;

use crate::cli::output;
use crate::cli::{resolve_key, Cli};
use crate::config::Settings;
use crate::errors::{EcvError, Result};
use crate::substitute;

/// Execute the `substitute` command.
pub fn execute(
    cli: &Cli,
    settings: &Settings,
    project_dir: &Path,
    file: &str,
    strict: bool,
) -> Result<()> {
    let contents = fs::read_to_string(file)
        .map_err(|e| EcvError::CommandFailed(format!("failed to read {file}: {e}")))?;

    if !substitute::contains_encrypted_vars(&contents) {
        output::warning(&format!("No ${{enc:...}} variables found in {file}."));
        print!("{contents}");
        return Ok(());
    }

    let key = resolve_key(cli, settings, project_dir)?;
    let resolved = if strict {
        substitute::try_decrypt_encrypted_vars(&contents, &key)?
    } else {
        substitute::decrypt_encrypted_vars(&contents, &key)
    };

    print!("{resolved}");
    Ok(())
}
