//! CLI error types

use std::path::PathBuf;

use thiserror::Error;

use crate::http_server::config::ConfigError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Config file problem
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// init refuses to overwrite an existing config
    #[error("config file already exists: {0}")]
    ConfigExists(PathBuf),

    /// Config file could not be written
    #[error("failed to write config file {path}: {source}")]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Runtime or server failure
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}
