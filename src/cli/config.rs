//! Configuration for `task-cli`.

use camino::{Utf8Path, Utf8PathBuf};
use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::task::adapters::json_file::DEFAULT_FILE_NAME;

/// Application name used for the per-user config directory.
pub const APP_NAME: &str = "task-cli";

/// Config file name searched in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "task-cli.yml";

/// Runtime settings loaded from YAML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Path to the JSON task file
    #[serde(default = "default_store_path")]
    pub store_path: Utf8PathBuf,

    /// Default log filter directive
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_store_path() -> Utf8PathBuf {
    Utf8PathBuf::from(DEFAULT_FILE_NAME)
}

fn default_log_level() -> String {
    "warn".to_owned()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Loads config from `path`, or from the first default location that
    /// exists, or falls back to defaults.
    ///
    /// Default locations are `<config dir>/task-cli/config.yml` followed by
    /// `./task-cli.yml`.
    ///
    /// # Errors
    ///
    /// Returns an error when an explicit `path` cannot be read, or when any
    /// selected file is not valid YAML for [`Config`].
    pub fn load(path: Option<&Utf8Path>) -> Result<Self> {
        if let Some(config_path) = path {
            return Self::from_file(config_path);
        }

        let default_paths = [
            dirs::config_dir()
                .and_then(|dir| Utf8PathBuf::from_path_buf(dir).ok())
                .map(|dir| dir.join(APP_NAME).join("config.yml")),
            Some(Utf8PathBuf::from(LOCAL_CONFIG_FILE)),
        ];

        for candidate in default_paths.iter().flatten() {
            if candidate.exists() {
                return Self::from_file(candidate);
            }
        }

        debug!("no config file found, using defaults");
        Ok(Self::default())
    }

    /// Parses config from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or parsed.
    pub fn from_file(path: &Utf8Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read config file {path}"))?;
        let config = Self::from_yaml(&content)
            .wrap_err_with(|| format!("failed to parse config file {path}"))?;
        debug!(%path, "loaded config");
        Ok(config)
    }

    /// Parses config from YAML text. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error when the text is not valid YAML for [`Config`].
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Replaces the store path when `file` is given.
    #[must_use]
    pub fn with_store_override(mut self, file: Option<Utf8PathBuf>) -> Self {
        if let Some(store_path) = file {
            self.store_path = store_path;
        }
        self
    }
}
