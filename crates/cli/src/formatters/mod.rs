//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Provide the table and JSON output formats.
//! - Render alert listings, status views and toggle reports.
//!
//! Does NOT handle:
//! - Direct printing to stdout (returns formatted strings).
//!
//! Invariants:
//! - Table lines for alerts start with `<name>:` so the output of `list`,
//!   `status` and `recent` can be piped back into `enable`/`disable`.
//! - JSON output is always a valid document, `[]` when empty.
//!
//! ## Empty-State Handling
//!
//! | Format | Empty State Behavior | Example |
//! |--------|---------------------|---------|
//! | JSON | Valid empty structure | `[]` |
//! | Table | Human message | `There are no alerts firing at this moment` |

use anyhow::Result;
use librato_client::{ClassifiedAlert, LineReport, TriggeredAlert};

use crate::error::CliError;

mod json;
mod table;

pub use json::JsonFormatter;
pub use table::TableFormatter;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Table,
}

impl OutputFormat {
    /// Parse from string.
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            _ => Err(CliError::InvalidOutputFormat(s.to_string()).into()),
        }
    }
}

/// Which status set a triggered-alert listing came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusView {
    Firing,
    RecentlyCleared,
}

/// Formatter trait for the output types of every command.
pub trait Formatter {
    /// Format the full registry with classifications.
    fn format_alerts(&self, alerts: &[ClassifiedAlert]) -> Result<String>;

    /// Format the firing or recently cleared alerts.
    fn format_triggered(&self, view: StatusView, alerts: &[TriggeredAlert]) -> Result<String>;

    /// Whether toggle results are rendered line by line as they happen.
    fn streams_toggles(&self) -> bool;

    /// Format the outcome of one input line. Empty when there is nothing to say.
    fn format_toggle_line(&self, report: &LineReport, target_active: bool) -> Result<String>;

    /// Format every line's outcome at once.
    fn format_toggle_reports(&self, reports: &[LineReport], target_active: bool)
    -> Result<String>;
}

/// Get a formatter for the specified output format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter),
    }
}
