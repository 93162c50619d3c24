//! CLI command implementations

use std::path::Path;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use crate::http_server::{HttpServer, ServerConfig};
use crate::observability::Logger;
use crate::store::DataLog;

/// Parse arguments and dispatch to the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Command::Init { config } => init(&config),
        Command::Start { config } => start(&config),
    }
}

/// Write a default config file, refusing to overwrite an existing one
pub fn init(config_path: &Path) -> CliResult<()> {
    if config_path.exists() {
        return Err(CliError::ConfigExists(config_path.to_path_buf()));
    }

    let config = ServerConfig::default();
    let text = serde_json::to_string_pretty(&config).expect("default config serializes");

    std::fs::write(config_path, text).map_err(|source| CliError::ConfigWrite {
        path: config_path.to_path_buf(),
        source,
    })?;

    Logger::info("config_written", &[("path", &config_path.display().to_string())]);
    Ok(())
}

/// Load config and the persisted log, then serve until stopped
pub fn start(config_path: &Path) -> CliResult<()> {
    let config = ServerConfig::load_or_default(config_path)?;
    let log = DataLog::load(config.data_path.clone());
    let server = HttpServer::new(config, log);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server.start())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_loadable_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("presslog.json");

        init(&path).unwrap();

        let config = ServerConfig::load_or_default(&path).unwrap();
        assert_eq!(config.port, ServerConfig::default().port);
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("presslog.json");

        init(&path).unwrap();
        assert!(matches!(init(&path), Err(CliError::ConfigExists(_))));
    }
}
