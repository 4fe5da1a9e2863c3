//! CLI command implementations.

pub mod list;
pub mod status;
pub mod toggle;

use anyhow::{Context, Result};
use librato_client::LibratoClient;
use librato_config::Config;

/// Build a client from loaded configuration.
pub fn build_client_from_config(config: &Config) -> Result<LibratoClient> {
    LibratoClient::builder()
        .from_config(config)
        .build()
        .context("Failed to build Librato client")
}
