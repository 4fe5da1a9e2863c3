//! Credential types for librato-alerts configuration.
//!
//! Responsibilities:
//! - Hold the account email and API token used for HTTP basic auth.
//!
//! Does NOT handle:
//! - Attaching credentials to requests (see client crate).
//!
//! Invariants:
//! - The token is a `secrecy::SecretString`; `Debug` output never shows it.

use secrecy::SecretString;

/// Basic-auth credentials for the Librato API.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Account email (basic-auth user).
    pub email: String,
    /// API token (basic-auth password). Needs write access for enable/disable.
    pub token: SecretString,
}

impl AuthConfig {
    pub fn new(email: String, token: SecretString) -> Self {
        Self { email, token }
    }
}
