//! Error types

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = ConfigError> = std::result::Result<T, E>;

/// Failures while reading or writing the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode config: {0}")]
    Encode(#[from] serde_json::Error),
}
