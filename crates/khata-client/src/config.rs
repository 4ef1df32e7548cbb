//! Client configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults, so a deployment can point the client at another backend without
//! code changes.

use std::env;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// REST client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Backend origin, e.g. `http://localhost:8080`.
    pub base_url: String,

    /// API path prefix under the origin.
    pub api_root: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// ## Variables
    /// - `KHATA_BASE_URL` (default `http://localhost:8080`)
    /// - `KHATA_API_ROOT` (default `api`)
    /// - `KHATA_TIMEOUT_SECS` (default `30`)
    pub fn load() -> Result<Self, ConfigError> {
        let config = ApiConfig {
            base_url: env::var("KHATA_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),

            api_root: env::var("KHATA_API_ROOT").unwrap_or_else(|_| "api".to_string()),

            timeout_secs: env::var("KHATA_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("KHATA_TIMEOUT_SECS".to_string()))?,
        };

        Ok(config)
    }

    /// Configuration pointing at a specific backend, defaults elsewhere.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        ApiConfig {
            base_url: base_url.into(),
            ..ApiConfig::default()
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: "http://localhost:8080".to_string(),
            api_root: "api".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable held a value that does not parse.
    #[error("Invalid configuration value for {0}")]
    InvalidValue(String),
}

// =============================================================================
// Unit Tests
// =============================================================================
