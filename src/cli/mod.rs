//! CLI module for bookshelf
//!
//! - serve: resolve configuration and run the HTTP server
//! - check-config: validate a configuration file

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{
    check_config, load_config, resolve_config, run, run_command, serve, ServeOverrides,
};
pub use errors::{CliError, CliErrorCode, CliResult};
