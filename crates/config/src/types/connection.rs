//! Connection configuration types for librato-alerts.
//!
//! Responsibilities:
//! - Define connection settings (URL, TLS verification, timeout).
//! - Define the main `Config` structure combining connection and auth.
//!
//! Does NOT handle:
//! - Configuration loading from env/`.env` (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - `base_url` never ends with a slash once it went through the loader.

use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::types::auth::AuthConfig;
use secrecy::SecretString;
use std::time::Duration;

/// Connection configuration for the Librato API.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Base URL of the API (e.g., https://metrics-api.librato.com)
    pub base_url: String,
    /// Whether to skip TLS verification (for intercepting proxies in development)
    pub skip_verify: bool,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Authentication settings
    pub auth: AuthConfig,
}

impl Config {
    /// Create a config for the given base URL and credentials, default timeouts.
    pub fn with_credentials(base_url: String, email: String, token: SecretString) -> Self {
        Self {
            connection: ConnectionConfig {
                base_url,
                ..ConnectionConfig::default()
            },
            auth: AuthConfig::new(email, token),
        }
    }
}
