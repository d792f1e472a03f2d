use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{EcvError, Result};

/// Project-level configuration, loaded from `.ecv.toml`.
///
/// Every field has a default so `ecv` works without any config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Path to a file holding a `<TYPE>:<base64>` key, relative to the
    /// project directory. Used when no key is given on the command line.
    #[serde(default)]
    pub key_file: Option<String>,

    /// Log filter used when `RUST_LOG` is not set (default: "warn").
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_log_level() -> String {
    "warn".to_string()
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            key_file: None,
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the project root.
    const FILE_NAME: &'static str = ".ecv.toml";

    /// Load settings from `<project_dir>/.ecv.toml`.
    ///
    /// If the file does not exist, defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let config_path = project_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            EcvError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        Ok(settings)
    }

    /// Resolve the configured key file against the project directory.
    pub fn key_path(&self, project_dir: &Path) -> Option<PathBuf> {
        self.key_file.as_ref().map(|p| project_dir.join(p))
    }
}

// ── Tests ────────────────────────────────────────────────────────────
