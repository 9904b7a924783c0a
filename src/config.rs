//! gradeline configuration.
//!
//! Loaded from `~/.gradeline/config.toml`. Every key is optional and a missing
//! file means defaults.
//!
//! ```toml
//! default-format = "json"
//!
//! [labels]
//! psa_grading = "鑑定中"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::{fs, io};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::labels::LabelMap;

/// How timeline output is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Progress bars and a labelled history.
    #[default]
    Text,

    /// The view model as pretty-printed JSON.
    Json,
}

/// gradeline configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// Output format for `timeline` when neither `--json` nor `--format` is given.
    pub default_format: OutputFormat,

    /// Display label overrides, keyed by status token.
    pub labels: BTreeMap<String, String>,
}

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl Config {
    /// Load config from `~/.gradeline/config.toml`.
    /// Falls back to defaults if the home directory or the file is missing.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::debug!("no home directory; using default config");
                Ok(Self::default())
            }
        }
    }

    /// Load config from an explicit path. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file; using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let config: Self = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(
            path = %path.display(),
            label_overrides = config.labels.len(),
            "loaded config"
        );
        Ok(config)
    }

    /// The config file path: `~/.gradeline/config.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".gradeline").join("config.toml"))
    }

    /// The label map with this config's overrides applied.
    pub fn label_map(&self) -> LabelMap {
        LabelMap::with_overrides(self.labels.clone())
    }
}
