//! `enable` and `disable`: toggle the alerts named on stdin.
//!
//! Responsibilities:
//! - Refuse to run against an interactive terminal.
//! - Stream stdin into the client's toggle session and print each line's
//!   outcome as soon as it is known (table output).
//! - Turn per-line write failures into a non-zero exit after all input ran.
//!
//! Does NOT handle:
//! - Matching or write semantics (see `librato_client::client::toggle`).

use std::io::IsTerminal;

use anyhow::{Context, Result};
use tokio::io::BufReader;
use tracing::{info, warn};

use crate::error::CliError;
use crate::formatters::{OutputFormat, get_formatter};

pub async fn run(
    config: librato_config::Config,
    target_active: bool,
    output_format: &str,
) -> Result<()> {
    let mode = if target_active { "enable" } else { "disable" };

    if std::io::stdin().is_terminal() {
        return Err(CliError::InteractiveStdin { mode }.into());
    }

    info!(mode, "Applying alert toggles from stdin");

    let format = OutputFormat::from_str(output_format)?;
    let formatter = get_formatter(format);
    let client = crate::commands::build_client_from_config(&config)?;

    let input = BufReader::new(tokio::io::stdin());
    let streaming = formatter.streams_toggles();
    let reports = client
        .apply_toggles_with(input, target_active, |report| {
            if !streaming {
                return;
            }
            match formatter.format_toggle_line(report, target_active) {
                Ok(text) => print!("{text}"),
                Err(e) => warn!(error = %e, line = %report.line, "Failed to format toggle result"),
            }
        })
        .await
        .with_context(|| format!("Failed to {mode} alerts"))?;

    if !streaming {
        println!("{}", formatter.format_toggle_reports(&reports, target_active)?);
    }

    let failed = reports
        .iter()
        .flat_map(|r| &r.results)
        .filter(|t| t.outcome.is_failure())
        .count();
    if failed > 0 {
        return Err(CliError::ToggleFailures { failed }.into());
    }

    Ok(())
}
