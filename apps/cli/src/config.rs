use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Runtime configuration loaded from a TOML file. Every field has a
/// default, so a partial file (or none at all) is fine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub paths: Paths,
    pub probe: Probe,
}

/// Where the three data files live. Defaults are the bare filenames in the
/// working directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Paths {
    pub hosts: PathBuf,
    pub log: PathBuf,
    pub report: PathBuf,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Probe {
    /// Per-probe timeout in seconds. `None` leaves it to the ping command.
    pub timeout_secs: Option<u64>,
}

impl Default for Paths {
    fn default() -> Self {
        Self {
            hosts: PathBuf::from("computers.txt"),
            log: PathBuf::from("ping_results.json"),
            report: PathBuf::from("network_days_report.csv"),
        }
    }
}

impl Config {
    /// Load configuration from the given file. With no path, the defaults
    /// are used as-is; a path that cannot be read or parsed is an error,
    /// since the caller asked for that file explicitly.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            debug!("no config file given, using defaults");
            return Ok(Self::default());
        };

        debug!(path = %path.display(), "loading config");
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
