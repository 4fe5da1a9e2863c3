//! Configuration management for librato-alerts.
//!
//! This crate provides the types and the loader that turn environment
//! variables, an optional `.env` file and command-line overrides into a
//! validated [`Config`] value.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{AuthConfig, Config, ConnectionConfig};
