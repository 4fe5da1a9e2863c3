//! `status` and `recent`: alerts named by the status endpoint.

use anyhow::{Context, Result};
use tracing::info;

use crate::formatters::{OutputFormat, StatusView, get_formatter};

pub async fn run(
    config: librato_config::Config,
    view: StatusView,
    output_format: &str,
) -> Result<()> {
    info!(?view, "Listing alert status");

    let format = OutputFormat::from_str(output_format)?;
    let client = crate::commands::build_client_from_config(&config)?;

    let alerts = match view {
        StatusView::Firing => client
            .list_firing()
            .await
            .context("Failed to list firing alerts")?,
        StatusView::RecentlyCleared => client
            .list_recently_cleared()
            .await
            .context("Failed to list recently cleared alerts")?,
    };

    let formatter = get_formatter(format);
    let output = formatter.format_triggered(view, &alerts)?;
    println!("{}", output.trim_end_matches('\n'));

    Ok(())
}
