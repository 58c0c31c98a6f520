//! CLI module for neodb
//!
//! Provides command-line interface for:
//! - inspect: Look up one NEO by designation or name
//! - query: Filter close approaches, print or write results

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command, InspectTarget, QueryArgs, SortArg};
pub use commands::{inspect, load_database, query, run, run_cli, DEFAULT_DISPLAY_LIMIT};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
