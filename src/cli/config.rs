//! Configuration file
//!
//! JSON, every field optional:
//!
//! ```json
//! {
//!   "host": "127.0.0.1",
//!   "port": 3000,
//!   "max_body_bytes": 16384,
//!   "database_path": "./deejay.db",
//!   "message_min": 20,
//!   "message_max": 500
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::errors::{CliError, CliResult};
use crate::contact::{FormConfig, DEFAULT_MESSAGE_MAX, DEFAULT_MESSAGE_MIN};
use crate::http_server::config::{default_host, default_max_body_bytes, default_port};
use crate::http_server::HttpServerConfig;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,

    /// SQLite database file, created on first provisioning
    #[serde(default = "default_database_path")]
    pub database_path: String,

    /// Minimum message length in characters (inclusive)
    #[serde(default = "default_message_min")]
    pub message_min: usize,

    /// Maximum message length in characters (inclusive)
    #[serde(default = "default_message_max")]
    pub message_max: usize,
}

fn default_database_path() -> String {
    "./deejay.db".to_string()
}
fn default_message_min() -> usize {
    DEFAULT_MESSAGE_MIN
}
fn default_message_max() -> usize {
    DEFAULT_MESSAGE_MAX
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_body_bytes: default_max_body_bytes(),
            database_path: default_database_path(),
            message_min: default_message_min(),
            message_max: default_message_max(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::config_error(format!("Failed to read config {}: {}", path.display(), e))
        })?;

        Self::parse(&content)
    }

    /// Load from `path` when given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> CliResult<Self> {
        let config = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate configuration JSON
    pub fn parse(content: &str) -> CliResult<Self> {
        let config: Config = serde_json::from_str(content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.host.trim().is_empty() {
            return Err(CliError::config_error("host must not be empty"));
        }

        if self.port == 0 {
            return Err(CliError::config_error("port must be > 0"));
        }

        if self.max_body_bytes == 0 {
            return Err(CliError::config_error("max_body_bytes must be > 0"));
        }

        if self.database_path.trim().is_empty() {
            return Err(CliError::config_error("database_path must not be empty"));
        }

        self.form_config()?;

        Ok(())
    }

    /// Message bounds for the validator and the form page
    pub fn form_config(&self) -> CliResult<FormConfig> {
        FormConfig::new(self.message_min, self.message_max)
            .map_err(|e| CliError::config_error(e.to_string()))
    }

    pub fn http_config(&self) -> HttpServerConfig {
        HttpServerConfig {
            host: self.host.clone(),
            port: self.port,
            max_body_bytes: self.max_body_bytes,
        }
    }

    pub fn database_path(&self) -> PathBuf {
        PathBuf::from(&self.database_path)
    }
}
