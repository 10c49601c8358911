//! CLI argument definitions using clap
//!
//! Commands:
//! - deejay serve [--config <path>] [--port <port>]
//! - deejay provision [--config <path>]
//! - deejay check-config [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// deejay - put a record on: a validated, persisted contact form
#[derive(Parser, Debug)]
#[command(name = "deejay")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to configuration file (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Port to listen on, overriding the config file
        #[arg(long)]
        port: Option<u16>,
    },

    /// Create the messages table if it does not exist, then exit
    Provision {
        /// Path to configuration file (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Load and validate the configuration, print it, then exit
    CheckConfig {
        /// Path to configuration file (defaults apply when omitted)
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
