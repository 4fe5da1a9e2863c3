//! Configuration type definitions for librato-alerts.
//!
//! Responsibilities:
//! - Define the connection and credential types consumed by the client crate.
//! - Keep secrets wrapped in `secrecy::SecretString` so they never reach logs.
//!
//! Does NOT handle:
//! - Loading values from the environment (see `loader` module).
//! - Attaching credentials to HTTP requests (see client crate).

mod auth;
mod connection;

pub use auth::AuthConfig;
pub use connection::{Config, ConnectionConfig};
