//! CLI module for repairdesk
//!
//! Provides the command-line interface:
//! - serve: boot storage, then enter the HTTP serving loop
//! - init: create the database and ticket table, then exit

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, run, serve};
pub use errors::{CliError, CliResult};
