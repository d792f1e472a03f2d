//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::io::{self, IsTerminal, Read};
use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::Settings;
use crate::crypto::KeyWithType;
use crate::errors::{EcvError, Result};

/// ecv: encrypt and decrypt `enc:` config values.
#[derive(Parser)]
#[command(
    name = "ecv",
    about = "Encrypted config value tool",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Key as <TYPE>:<base64> (AES, RSA-PUB or RSA-PRIV)
    #[arg(long, env = "ECV_KEY", global = true, hide_env_values = true)]
    pub key: Option<String>,

    /// File holding the key as <TYPE>:<base64>
    #[arg(long, env = "ECV_KEY_FILE", global = true)]
    pub key_file: Option<String>,

    /// Log codec decisions to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Encrypt a value and print its enc:... form
    Encrypt {
        /// Plaintext (omit to read stdin or prompt)
        value: Option<String>,
    },

    /// Decrypt an enc:... value and print the plaintext
    Decrypt {
        /// Encrypted value (omit to read stdin)
        value: Option<String>,
    },

    /// Show the format and algorithm of an enc:... value (no key needed)
    Inspect {
        /// Encrypted value (omit to read stdin)
        value: Option<String>,
    },

    /// Print a file with every ${enc:...} variable decrypted
    Substitute {
        /// Path to the file
        file: String,

        /// Fail if any variable cannot be decrypted
        #[arg(long)]
        strict: bool,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        shell: String,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Install the stderr log subscriber.
///
/// `--verbose` forces `debug`; otherwise `RUST_LOG` wins over the
/// configured level.
pub fn init_logging(verbose: bool, settings: &Settings) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log_level))
    };

    // A subscriber may already be installed (e.g. in tests).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// Resolve the key, trying in order:
/// 1. `--key` / `ECV_KEY`
/// 2. `--key-file` / `ECV_KEY_FILE`
/// 3. `key_file` from `.ecv.toml`
pub fn resolve_key(cli: &Cli, settings: &Settings, project_dir: &Path) -> Result<KeyWithType> {
    if let Some(key) = cli.key.as_deref().filter(|k| !k.is_empty()) {
        return key.trim().parse();
    }

    if let Some(path) = &cli.key_file {
        return KeyWithType::from_path(Path::new(path));
    }

    if let Some(path) = settings.key_path(project_dir) {
        return KeyWithType::from_path(&path);
    }

    Err(EcvError::CommandFailed(
        "no key given — use --key, --key-file, ECV_KEY, or key_file in .ecv.toml".into(),
    ))
}

/// Read a command input from one of three sources:
/// the argument, piped stdin, or an interactive prompt.
///
/// `secret` inputs are prompted without echo.
pub fn read_input(value: Option<&str>, prompt: &str, secret: bool) -> Result<String> {
    if let Some(v) = value {
        return Ok(v.to_string());
    }

    if !io::stdin().is_terminal() {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        return Ok(buf.trim_end().to_string());
    }

    let input = if secret {
        dialoguer::Password::new()
            .with_prompt(prompt)
            .interact()
    } else {
        dialoguer::Input::<String>::new()
            .with_prompt(prompt)
            .interact_text()
    };

    input.map_err(|e| EcvError::CommandFailed(format!("input prompt: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn key_flag_wins_over_settings() {
        let cli = parse(&["ecv", "--key", "AES:ERERERERERERERERERERERERERERERERERERERERERE=", "decrypt", "enc:"]);
        let settings = Settings {
            key_file: Some("missing.key".into()),
            ..Settings::default()
        };
        let key = resolve_key(&cli, &settings, Path::new("/nonexistent")).unwrap();
        assert_eq!(key.key_type(), crate::crypto::KeyType::Aes);
    }

    #[test]
    fn key_file_from_settings_is_used() {
        let tmp = tempfile::TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join("app.key"),
            "AES:IiIiIiIiIiIiIiIiIiIiIg==\n",
        )
        .unwrap();
        let settings = Settings {
            key_file: Some("app.key".into()),
            ..Settings::default()
        };
        let cli = Cli {
            command: Commands::Inspect { value: None },
            key: None,
            key_file: None,
            verbose: false,
        };

        let key = resolve_key(&cli, &settings, tmp.path()).unwrap();
        assert_eq!(key.key_type(), crate::crypto::KeyType::Aes);
    }

    #[test]
    fn missing_key_is_an_error() {
        let cli = Cli {
            command: Commands::Inspect { value: None },
            key: None,
            key_file: None,
            verbose: false,
        };
        let err = resolve_key(&cli, &Settings::default(), Path::new(".")).unwrap_err();
        assert!(err.to_string().contains("no key given"));
    }

    #[test]
    fn read_input_prefers_argument() {
        assert_eq!(read_input(Some("abc"), "unused", true).unwrap(), "abc");
    }
}
