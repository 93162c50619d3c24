//! CLI argument definitions using clap
//!
//! Commands:
//! - presslog init --config <path>
//! - presslog start --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// presslog - a real-time append-only data log service
#[derive(Parser, Debug)]
#[command(name = "presslog")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a default configuration file
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./presslog.json")]
        config: PathBuf,
    },

    /// Start the presslog server
    Start {
        /// Path to configuration file
        #[arg(long, default_value = "./presslog.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
