//! Command-line interface
//!
//! A thin wrapper over the search pipeline: argument parsing and
//! validation, CSV ingestion, and rendering. No filtering or ranking
//! logic lives here.

mod args;
mod commands;
mod errors;
mod render;

pub use args::Cli;
pub use commands::run;
pub use errors::{CliError, CliErrorCode, CliResult};
