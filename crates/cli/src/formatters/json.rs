//! JSON formatter implementation.
//!
//! Responsibilities:
//! - Format all output types as pretty-printed JSON.
//!
//! Does NOT handle:
//! - Streaming. Toggle reports are emitted as one array after the input ends.

use anyhow::Result;
use librato_client::{ClassifiedAlert, LineReport, TriggeredAlert};

use crate::formatters::{Formatter, StatusView};

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_alerts(&self, alerts: &[ClassifiedAlert]) -> Result<String> {
        Ok(serde_json::to_string_pretty(alerts)?)
    }

    fn format_triggered(&self, _view: StatusView, alerts: &[TriggeredAlert]) -> Result<String> {
        Ok(serde_json::to_string_pretty(alerts)?)
    }

    fn streams_toggles(&self) -> bool {
        false
    }

    fn format_toggle_line(&self, report: &LineReport, _target_active: bool) -> Result<String> {
        Ok(serde_json::to_string(report)?)
    }

    fn format_toggle_reports(
        &self,
        reports: &[LineReport],
        _target_active: bool,
    ) -> Result<String> {
        Ok(serde_json::to_string_pretty(reports)?)
    }
}
