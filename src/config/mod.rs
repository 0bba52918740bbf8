//! Server configuration.
//!
//! # Data Flow
//! ```text
//! PORT environment variable
//!     → ServerConfig::from_env (parse & validate)
//!     → ServerConfig (immutable)
//!     → handed to EchoServer at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload path
//! - A missing or empty PORT falls back to 8080
//! - A malformed PORT is a startup error, fatal to the process

use thiserror::Error;

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// PORT was set but is not a valid port number.
    #[error("invalid PORT value '{value}': {source}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },
}

/// Configuration for the echo server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// TCP port to listen on.
    pub port: u16,

    /// Per-request timeout applied by the middleware stack.
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            request_timeout_secs: 30,
        }
    }
}

impl ServerConfig {
    /// Load configuration from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_port_value(std::env::var("PORT").ok())
    }

    /// Bind address for the listener, e.g. "0.0.0.0:8080".
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    fn from_port_value(value: Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            config.port = value
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value, source })?;
        }
        Ok(config)
    }
}
