//! Table formatter implementation.
//!
//! Plain `<name>: <detail>` lines, colored when stdout is a terminal.

use anyhow::Result;
use colored::Colorize;
use librato_client::{
    AlertToggle, Classification, ClassifiedAlert, LineReport, ToggleOutcome, TriggeredAlert,
};

use crate::formatters::{Formatter, StatusView};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Table formatter.
pub struct TableFormatter;

fn state_label(classification: Classification) -> String {
    let label = classification.to_string();
    match classification {
        Classification::Firing => label.bright_red().bold().to_string(),
        Classification::RecentlyCleared => label.bright_cyan().to_string(),
        Classification::ActiveQuiet => label.bright_green().to_string(),
        Classification::Disabled => label.red().to_string(),
    }
}

fn state_word(active: bool) -> &'static str {
    if active { "enabled" } else { "disabled" }
}

fn toggle_line(toggle: &AlertToggle, target_active: bool) -> String {
    let state = state_word(target_active);
    match &toggle.outcome {
        ToggleOutcome::AlreadyInState => format!("alert {} already {}", toggle.name, state),
        ToggleOutcome::Toggled => format!("{} {}", toggle.name, state.green()),
        ToggleOutcome::Failed { status, reason } => {
            let status = status
                .map(|s| format!(" (HTTP {s})"))
                .unwrap_or_default();
            format!(
                "{} {}{}: {}",
                "failed to update".red(),
                toggle.name,
                status,
                reason
            )
        }
    }
}

impl Formatter for TableFormatter {
    fn format_alerts(&self, alerts: &[ClassifiedAlert]) -> Result<String> {
        if alerts.is_empty() {
            return Ok("No alerts found.\n".to_string());
        }

        let mut output = String::new();
        for item in alerts {
            output.push_str(&format!(
                "{}: {}\n",
                item.alert.name.bright_yellow(),
                state_label(item.classification)
            ));
        }
        Ok(output)
    }

    fn format_triggered(&self, view: StatusView, alerts: &[TriggeredAlert]) -> Result<String> {
        let (header, empty, since) = match view {
            StatusView::Firing => (
                "Alerts firing:",
                "There are no alerts firing at this moment",
                "firing since",
            ),
            StatusView::RecentlyCleared => (
                "Alerts recently cleared:",
                "There are no alerts recently cleared at this moment",
                "triggered at",
            ),
        };

        if alerts.is_empty() {
            return Ok(format!("{empty}\n"));
        }

        let mut output = format!("{header}\n");
        for item in alerts {
            output.push_str(&format!(
                "{}: {} {}\n",
                item.alert.name.bright_yellow(),
                since,
                item.triggered_at.format(TIME_FORMAT)
            ));
        }
        Ok(output)
    }

    fn streams_toggles(&self) -> bool {
        true
    }

    fn format_toggle_line(&self, report: &LineReport, target_active: bool) -> Result<String> {
        if report.is_unmatched() {
            if report.key.is_empty() {
                return Ok(String::new());
            }
            return Ok(format!("no alert named {}\n", report.key));
        }

        let mut output = String::new();
        for toggle in &report.results {
            output.push_str(&toggle_line(toggle, target_active));
            output.push('\n');
        }
        Ok(output)
    }

    fn format_toggle_reports(
        &self,
        reports: &[LineReport],
        target_active: bool,
    ) -> Result<String> {
        let mut output = String::new();
        for report in reports {
            output.push_str(&self.format_toggle_line(report, target_active)?);
        }
        Ok(output)
    }
}
