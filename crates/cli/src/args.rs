//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not validate settings (see `librato-config`).

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "librato-alerts")]
#[command(
    about = "Enable, disable and inspect Librato alerts from the command line",
    long_about = None
)]
#[command(version)]
#[command(
    after_help = "Examples:\n  librato-alerts list\n  librato-alerts status\n  librato-alerts list | grep staging | librato-alerts disable\n  echo cpu-high | librato-alerts enable\n"
)]
pub struct Cli {
    /// Base URL of the Librato API
    #[arg(short, long, global = true, env = "LIBRATO_BASE_URL")]
    pub base_url: Option<String>,

    /// Account email used for authentication
    #[arg(short, long, global = true, env = "LIBRATO_MAIL")]
    pub email: Option<String>,

    /// API token (needs write access for enable/disable)
    #[arg(short, long, global = true, env = "LIBRATO_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "LIBRATO_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Skip TLS certificate verification
    #[arg(long, global = true, env = "LIBRATO_SKIP_VERIFY")]
    pub skip_verify: bool,

    /// Output format (table, json)
    #[arg(short, long, global = true, default_value = "table")]
    pub output: String,

    /// Mode to run; `list` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// List all alerts with their state
    List,

    /// List alerts that are firing right now
    Status,

    /// List alerts that cleared recently
    Recent,

    /// Enable the alerts named on stdin, one per line
    #[command(
        after_help = "Lines may carry trailing text after ':'; only the name before it is used.\nAlerts already enabled are left untouched."
    )]
    Enable,

    /// Disable the alerts named on stdin, one per line
    #[command(
        after_help = "Lines may carry trailing text after ':'; only the name before it is used.\nAlerts already disabled are left untouched."
    )]
    Disable,
}
