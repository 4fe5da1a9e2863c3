//! `list`: every alert with its state.
//!
//! Responsibilities:
//! - Fetch the registry and status, print each alert's classification.
//!
//! Does NOT handle:
//! - Classification rules (see `librato_client::correlate`).

use anyhow::{Context, Result};
use tracing::info;

use crate::formatters::{OutputFormat, get_formatter};

pub async fn run(config: librato_config::Config, output_format: &str) -> Result<()> {
    info!("Listing alerts");

    let format = OutputFormat::from_str(output_format)?;
    let client = crate::commands::build_client_from_config(&config)?;

    let alerts = client.list_alerts().await.context("Failed to list alerts")?;

    let formatter = get_formatter(format);
    let output = formatter.format_alerts(&alerts)?;
    println!("{}", output.trim_end_matches('\n'));

    Ok(())
}
