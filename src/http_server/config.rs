//! Server configuration
//!
//! Loaded from a JSON file; every field has a default so a partial
//! config is valid.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::observability::Logger;

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 3000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins; empty means permissive (development)
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Path of the persisted log file
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_data_path() -> PathBuf {
    PathBuf::from("./presslog-data.json")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            data_path: default_data_path(),
        }
    }
}

impl ServerConfig {
    /// Load config from a JSON file, falling back to defaults when the
    /// file does not exist.
    ///
    /// Unlike the data file, a present-but-invalid config is an operator
    /// error and is returned as such rather than papered over.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            Logger::info("config_defaulted", &[("path", &path.display().to_string())]);
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert!(config.cors_origins.is_empty());
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig { port: 8080, ..Default::default() };
        assert_eq!(config.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = ServerConfig::load_or_default(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("presslog.json");
        std::fs::write(&path, r#"{"port": 4010}"#).unwrap();

        let config = ServerConfig::load_or_default(&path).unwrap();
        assert_eq!(config.port, 4010);
        assert_eq!(config.host, "0.0.0.0");
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("presslog.json");
        std::fs::write(&path, "{not json").unwrap();

        assert!(ServerConfig::load_or_default(&path).is_err());
    }
}
