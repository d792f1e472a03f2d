//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::value::EncryptedValue;

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    eprintln!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Rows describing an encrypted value, without any secret material.
pub fn describe(value: &EncryptedValue) -> Vec<(&'static str, String)> {
    match value {
        EncryptedValue::Aes(v) => vec![
            ("Format", "modern".to_string()),
            ("Algorithm", "AES".to_string()),
            ("Mode", "GCM".to_string()),
            ("IV", format!("{} bytes", v.iv.len())),
            ("Ciphertext", format!("{} bytes", v.ciphertext.len())),
            ("Tag", format!("{} bytes", v.tag.len())),
        ],
        EncryptedValue::Rsa(v) => vec![
            ("Format", "modern".to_string()),
            ("Algorithm", "RSA".to_string()),
            ("Mode", "OAEP".to_string()),
            ("Ciphertext", format!("{} bytes", v.ciphertext.len())),
            ("OAEP digest", "SHA-256".to_string()),
            ("MGF1 digest", "SHA-256".to_string()),
        ],
        EncryptedValue::Legacy(v) => vec![
            ("Format", "legacy".to_string()),
            ("Algorithm", "(implied by key)".to_string()),
            ("Ciphertext", format!("{} bytes", v.encrypted_bytes().len())),
        ],
    }
}

/// Print a two-column table describing an encrypted value.
pub fn print_value_table(value: &EncryptedValue) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Field", "Value"]);

    for (field, val) in describe(value) {
        table.add_row(vec![field.to_string(), val]);
    }

    println!("{table}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{LegacyValue, RsaOaepValue};

    #[test]
    fn describe_legacy() {
        let rows = describe(&EncryptedValue::Legacy(LegacyValue::new(vec![0; 40])));
        assert_eq!(rows[0], ("Format", "legacy".to_string()));
        assert_eq!(rows[2], ("Ciphertext", "40 bytes".to_string()));
    }

    #[test]
    fn describe_rsa() {
        let rows = describe(&EncryptedValue::Rsa(RsaOaepValue::new(vec![0; 256])));
        assert!(rows.contains(&("Algorithm", "RSA".to_string())));
        assert!(rows.contains(&("Ciphertext", "256 bytes".to_string())));
    }
}
