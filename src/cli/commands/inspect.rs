//! `ecv inspect` — show what an encrypted value is without decrypting it.

use crate::cli::{output, read_input};
use crate::errors::Result;
use crate::value::EncryptedValue;

/// Execute the `inspect` command.
pub fn execute(value: Option<&str>) -> Result<()> {
    let input = read_input(value, "Encrypted value", false)?;
    let encrypted: EncryptedValue = input.trim().parse()?;

    output::print_value_table(&encrypted);
    if encrypted.is_legacy() {
        output::tip("Legacy values carry no algorithm tag; re-encrypt to upgrade them.");
    }

    Ok(())
}
