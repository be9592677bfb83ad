//! CLI argument definitions using clap
//!
//! Commands:
//! - repairdesk serve [--config <path>]
//! - repairdesk init [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// repairdesk - computer repair ticket service
#[derive(Parser, Debug)]
#[command(name = "repairdesk")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP service
    Serve {
        /// Path to a JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create the database and ticket table, then exit
    Init {
        /// Path to a JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
