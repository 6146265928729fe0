//! Configuration management for the launch panel.
//!
//! Configuration can be set via environment variables:
//! - `HOST` - Optional. Server host. Defaults to `0.0.0.0`.
//! - `PORT` - Optional. Server port. Defaults to `8080`.
//! - `STATIC_DIR` - Optional. Directory with the panel's static assets. Defaults to `static`.
//! - `AGENT_COMMAND` - Optional. Command line spawned per accepted task; the task text is
//!   appended as `--objective <task>`. Defaults to `python3 /app/agent.py`.
//! - `GOOGLE_API_KEY` - Optional. Never read by the server itself; launched agents inherit
//!   it from the environment. Startup logs a warning when unset.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

/// Launch panel configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host
    pub host: String,

    /// Server port
    pub port: u16,

    /// Directory holding the panel's static assets
    pub static_dir: PathBuf,

    /// Command line spawned for each accepted task
    pub agent_command: String,

    /// Whether `GOOGLE_API_KEY` is present in the environment
    pub has_api_key: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `PORT` is not a valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|e| ConfigError::InvalidValue("PORT".to_string(), format!("{}", e)))?;

        let static_dir = std::env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("static"));

        let agent_command = std::env::var("AGENT_COMMAND")
            .unwrap_or_else(|_| "python3 /app/agent.py".to_string());

        let has_api_key = std::env::var("GOOGLE_API_KEY").is_ok_and(|v| !v.is_empty());

        Ok(Self {
            host,
            port,
            static_dir,
            agent_command,
            has_api_key,
        })
    }

    /// Create a config with custom values (useful for testing).
    pub fn new(agent_command: impl Into<String>, static_dir: impl Into<PathBuf>) -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            static_dir: static_dir.into(),
            agent_command: agent_command.into(),
            has_api_key: false,
        }
    }
}
