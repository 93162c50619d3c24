//! CLI module for presslog
//!
//! Provides command-line interface for:
//! - init: Write a default config file
//! - start: Load the log and enter the serving loop

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, run, start};
pub use errors::{CliError, CliResult};
