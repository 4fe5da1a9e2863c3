//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the matching command handler.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main()`).
//!
//! Invariants:
//! - A missing mode runs `list`.

use anyhow::Result;
use librato_config::Config;

use crate::args::{Cli, Commands};
use crate::commands;
use crate::formatters::StatusView;

/// Dispatch CLI commands to their respective handlers.
pub(crate) async fn run_command(cli: Cli, config: Config) -> Result<()> {
    match cli.command.unwrap_or(Commands::List) {
        Commands::List => commands::list::run(config, &cli.output).await,
        Commands::Status => commands::status::run(config, StatusView::Firing, &cli.output).await,
        Commands::Recent => {
            commands::status::run(config, StatusView::RecentlyCleared, &cli.output).await
        }
        Commands::Enable => commands::toggle::run(config, true, &cli.output).await,
        Commands::Disable => commands::toggle::run(config, false, &cli.output).await,
    }
}
