//! Main Librato REST API client and API methods.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `alerts`: Registry paging, single alert and status reads
//! - `views`: Registry and status combined into the list/firing/cleared views
//! - [`toggle`]: Idempotent enable/disable driven by operator input
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Rendering results (the CLI's job)
//!
//! # Invariants
//! - Every remote call is attempted once; nothing is retried.
//! - Calls are awaited one after another; the client never runs requests
//!   concurrently.

pub mod builder;
pub mod toggle;

mod alerts;
mod views;

use crate::auth::Credentials;

/// Librato REST API client.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use librato_client::LibratoClient;
/// use secrecy::SecretString;
///
/// let client = LibratoClient::builder()
///     .base_url("https://metrics-api.librato.com".to_string())
///     .credentials("ops@example.com".to_string(), SecretString::new("token".into()))
///     .build()?;
/// ```
#[derive(Debug)]
pub struct LibratoClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) credentials: Credentials,
}

impl LibratoClient {
    /// Create a new client builder.
    pub fn builder() -> builder::LibratoClientBuilder {
        builder::LibratoClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Account email used for basic auth.
    pub fn email(&self) -> &str {
        self.credentials.email()
    }
}
