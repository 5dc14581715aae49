//! Configuration management
//!
//! Settings live in `config.toml` inside the config directory:
//! `$NULIB2_CONFIG_DIR` when set, otherwise `nulib2/` under the platform
//! config dir. A missing file means defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Environment variable that overrides the config directory
pub const CONFIG_DIR_ENV: &str = "NULIB2_CONFIG_DIR";

const CONFIG_FILE: &str = "config.toml";

/// Output defaults, overridable from the command line
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Emit JSON instead of human-readable text
    pub json: bool,
    /// Disable colored output
    pub no_color: bool,
    /// Suppress everything but errors
    pub quiet: bool,
}

/// Logging defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// `tracing` filter directive, e.g. `"debug"` or `"nl_core=trace"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

/// Contents of `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputSettings,
    pub log: LogSettings,
}

/// Locates and loads the configuration file
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_dir: PathBuf,
}

impl ConfigManager {
    /// Resolve the config directory from the environment or the platform
    /// default.
    pub fn new() -> Result<Self> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(Self::with_dir(dir));
        }

        let base = dirs::config_dir()
            .ok_or_else(|| Error::Config("Cannot determine config directory".to_string()))?;
        Ok(Self::with_dir(base.join("nulib2")))
    }

    /// Use an explicit directory
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: dir.into(),
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE)
    }

    /// Load the configuration, falling back to defaults when the file does
    /// not exist.
    pub fn load(&self) -> Result<Config> {
        let path = self.config_path();
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file, using defaults");
                return Ok(Config::default());
            }
            Err(e) => return Err(e.into()),
        };

        toml::from_str(&text)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))
    }

    /// Write the configuration, creating the directory if needed
    pub fn save(&self, config: &Config) -> Result<()> {
        std::fs::create_dir_all(&self.config_dir)?;
        let text = toml::to_string_pretty(config)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {e}")))?;
        std::fs::write(self.config_path(), text)?;
        Ok(())
    }
}
