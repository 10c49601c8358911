//! CLI module for deejay
//!
//! Provides command-line interface for:
//! - serve: Boot and serve the contact site
//! - provision: Ensure the messages table exists
//! - check-config: Validate and print the configuration

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{check_config, provision, run, run_command, serve};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::write_response;
