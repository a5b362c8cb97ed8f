//! Settings errors. File errors carry the path they happened on.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Cannot read settings from {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot write settings to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not valid JSON settings: {source}", path.display())]
    ParseJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} is not valid TOML settings: {source}", path.display())]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Cannot encode settings: {0}")]
    EncodeJson(#[from] serde_json::Error),

    #[error("Cannot encode settings: {0}")]
    EncodeToml(#[from] toml::ser::Error),

    /// A value is out of range; `key` is the dotted path, e.g. `fresnel.samples`.
    #[error("Invalid setting '{key}': {reason}")]
    InvalidSetting { key: String, reason: String },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl SettingsError {
    pub(crate) fn invalid(key: &str, reason: impl Into<String>) -> Self {
        SettingsError::InvalidSetting {
            key: key.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn read(path: &Path, source: io::Error) -> Self {
        SettingsError::Read {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn write(path: &Path, source: io::Error) -> Self {
        SettingsError::Write {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Where settings live and how they are encoded.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Only `.json` and `.toml` are understood.
    #[error("Unsupported settings format '{extension}' (expected .json or .toml)")]
    UnsupportedFormat { extension: String },

    #[error("No user config directory on {0}")]
    NoConfigDir(String),
}

pub type SettingsResult<T> = Result<T, SettingsError>;
