//! Decrypt `${enc:...}` variables embedded in larger strings, such as a
//! config file where only some values are encrypted:
//!
//! ```text
//! database:
//!   password: ${enc:eyJ0eXBlIjoiQUVTIiwi...}
//! ```

use std::sync::OnceLock;

use regex::{Captures, Regex};
use tracing::warn;

use crate::crypto::KeyWithType;
use crate::errors::Result;
use crate::value::EncryptedValue;

fn var_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\$\{(enc:[A-Za-z0-9+/=]*)\}").expect("static regex is valid")
    })
}

/// True if `input` contains at least one `${enc:...}` variable.
pub fn contains_encrypted_vars(input: &str) -> bool {
    var_regex().is_match(input)
}

/// Replace every `${enc:...}` variable with its decrypted plaintext.
///
/// Variables that cannot be decoded or decrypted are left as they are.
pub fn decrypt_encrypted_vars(input: &str, key: &KeyWithType) -> String {
    var_regex()
        .replace_all(input, |caps: &Captures| match decrypt_var(&caps[1], key) {
            Ok(plaintext) => plaintext,
            Err(e) => {
                warn!(error = %e, "leaving encrypted variable in place");
                caps[0].to_string()
            }
        })
        .into_owned()
}

/// Like [`decrypt_encrypted_vars`], but fails on the first variable that
/// cannot be decrypted.
pub fn try_decrypt_encrypted_vars(input: &str, key: &KeyWithType) -> Result<String> {
    let mut out = String::with_capacity(input.len());
    let mut last = 0;

    for caps in var_regex().captures_iter(input) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        out.push_str(&input[last..whole.start()]);
        out.push_str(&decrypt_var(&caps[1], key)?);
        last = whole.end();
    }

    out.push_str(&input[last..]);
    Ok(out)
}

fn decrypt_var(envelope: &str, key: &KeyWithType) -> Result<String> {
    envelope.parse::<EncryptedValue>()?.decrypt(key)
}
