//! Application configuration (`tournament.toml`)

use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::roster::{RosterLimits, MAX_NAME_LENGTH, WARN_AFTER};

/// Default configuration file, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "tournament.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Settings shared by every command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where tournaments are stored
    pub data_dir: PathBuf,
    /// Shuffle the roster before the draw unless told otherwise
    pub shuffle_players: bool,
    /// Fixed seed for reproducible shuffles
    pub seed: Option<u64>,
    pub max_name_length: usize,
    pub warn_after: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("tournaments"),
            shuffle_players: true,
            seed: None,
            max_name_length: MAX_NAME_LENGTH,
            warn_after: WARN_AFTER,
        }
    }
}

impl AppConfig {
    /// Load from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        Self::from_toml(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn roster_limits(&self) -> RosterLimits {
        RosterLimits {
            max_name_length: self.max_name_length,
            warn_after: self.warn_after,
        }
    }
}
