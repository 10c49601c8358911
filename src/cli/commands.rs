//! CLI command implementations
//!
//! `serve` boots the HTTP server; `provision` and `check-config` are
//! one-shot commands that print a JSON line and exit.

use std::path::Path;
use std::sync::Arc;

use serde_json::json;

use super::args::Command;
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::write_response;
use crate::contact::FormHandler;
use crate::http_server::HttpServer;
use crate::observability::{log_event, log_event_with_fields, Event};
use crate::store::{MessageStore, SqliteMessageStore, MESSAGES_TABLE};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(config.as_deref(), port),
        Command::Provision { config } => provision(config.as_deref()),
        Command::CheckConfig { config } => check_config(config.as_deref()),
    }
}

fn load_config(config_path: Option<&Path>) -> CliResult<Config> {
    let config = Config::load_or_default(config_path)?;
    log_event_with_fields(
        Event::ConfigLoaded,
        &[
            ("database_path", config.database_path.as_str()),
            ("source", config_path.and_then(Path::to_str).unwrap_or("defaults")),
        ],
    );
    Ok(config)
}

/// Start the HTTP server.
///
/// The table is not provisioned here: every accepted submission ensures
/// it before inserting.
pub fn serve(config_path: Option<&Path>, port: Option<u16>) -> CliResult<()> {
    log_event(Event::BootStart);

    let mut config = load_config(config_path)?;
    if let Some(port) = port {
        if port == 0 {
            return Err(CliError::config_error("port must be > 0"));
        }
        config.port = port;
    }

    let store = SqliteMessageStore::new(config.database_path());
    let handler = FormHandler::new(config.form_config()?, Arc::new(store));
    let server = HttpServer::with_config(config.http_config(), handler);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    log_event(Event::BootComplete);

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::serve_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

/// Ensure the messages table exists and report it
pub fn provision(config_path: Option<&Path>) -> CliResult<()> {
    let config = load_config(config_path)?;
    let store = SqliteMessageStore::new(config.database_path());

    store.provision()?;

    write_response(json!({
        "provisioned": true,
        "table": MESSAGES_TABLE,
        "database_path": config.database_path,
    }))
}

/// Validate configuration and print the effective values
pub fn check_config(config_path: Option<&Path>) -> CliResult<()> {
    let config = load_config(config_path)?;
    write_response(serde_json::to_value(&config)?)
}
