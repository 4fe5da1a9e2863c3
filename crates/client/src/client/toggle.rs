//! Idempotent enable/disable of alerts named by operator input.
//!
//! Responsibilities:
//! - Apply a target `active` state to one alert, skipping the write when the
//!   alert is already in that state.
//! - Drive a line-oriented session: resolve each input line against a
//!   registry snapshot and toggle every match before reading the next line.
//!
//! Does NOT handle:
//! - Retrying failed writes. A failure is recorded in the line's report and
//!   the session moves on.
//! - Re-fetching the registry. The snapshot is taken once per session and
//!   only updated with the session's own successful writes.
//!
//! Invariants:
//! - The PUT body is the full alert as read, with only `active` changed and,
//!   when it was empty, `description` filled with [`DESCRIPTION_PLACEHOLDER`].

use std::borrow::Cow;

use serde::Serialize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info, warn};

use crate::client::LibratoClient;
use crate::endpoints;
use crate::error::{ClientError, Result};
use crate::matcher::{match_key, positions};
use crate::models::Alert;

/// Description sent when the alert has none; the service rejects updates
/// with an empty description.
pub const DESCRIPTION_PLACEHOLDER: &str = "managed by librato-alerts";

/// Result of toggling a single alert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ToggleOutcome {
    /// The alert already had the requested state; nothing was sent.
    AlreadyInState,
    /// The update was accepted.
    Toggled,
    /// The update was rejected or never reached the service.
    Failed { status: Option<u16>, reason: String },
}

impl ToggleOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    fn from_error(err: ClientError) -> Self {
        let status = err.status();
        let reason = match err {
            ClientError::ApiError { message, .. } => message,
            other => other.to_string(),
        };
        Self::Failed { status, reason }
    }
}

/// The record to write for a toggle: `alert` with `active` set and an empty
/// description replaced by the placeholder.
pub fn prepare_update(alert: &Alert, target_active: bool) -> Alert {
    let mut update = alert.clone();
    update.active = target_active;
    if update.description.is_empty() {
        update.description = DESCRIPTION_PLACEHOLDER.to_string();
    }
    update
}

/// Outcome for one matched alert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlertToggle {
    pub id: u64,
    pub name: String,
    #[serde(flatten)]
    pub outcome: ToggleOutcome,
}

/// Everything that happened for one input line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineReport {
    pub line: String,
    pub key: String,
    pub results: Vec<AlertToggle>,
}

impl LineReport {
    /// The line named no alert.
    pub fn is_unmatched(&self) -> bool {
        self.results.is_empty()
    }

    pub fn has_failures(&self) -> bool {
        self.results.iter().any(|r| r.outcome.is_failure())
    }
}

impl LibratoClient {
    /// Bring `alert` to `target_active`.
    ///
    /// Issues no request when the alert is already in the target state.
    /// Errors are folded into [`ToggleOutcome::Failed`].
    pub async fn apply_toggle(&self, alert: &Alert, target_active: bool) -> ToggleOutcome {
        if alert.active == target_active {
            return ToggleOutcome::AlreadyInState;
        }

        let update = prepare_update(alert, target_active);
        match endpoints::update_alert(&self.http, &self.base_url, &self.credentials, &update).await
        {
            Ok(()) => {
                info!(id = alert.id, name = %alert.name, active = target_active, "Alert updated");
                ToggleOutcome::Toggled
            }
            Err(e) => {
                warn!(id = alert.id, name = %alert.name, error = %e, "Alert update failed");
                ToggleOutcome::from_error(e)
            }
        }
    }

    /// Start a toggle session over a fresh registry snapshot.
    pub async fn toggle_session(&self, target_active: bool) -> Result<ToggleSession<'_>> {
        let registry = self.list_all_alerts().await?;
        Ok(ToggleSession {
            client: self,
            registry,
            target_active,
        })
    }

    /// Read alert names line by line from `input` and toggle every match.
    ///
    /// Returns one report per input line, blank lines included.
    pub async fn apply_toggles<R>(&self, input: R, target_active: bool) -> Result<Vec<LineReport>>
    where
        R: AsyncBufRead + Unpin,
    {
        self.apply_toggles_with(input, target_active, |_| {}).await
    }

    /// Like [`apply_toggles`](Self::apply_toggles), calling `on_report` as
    /// soon as each line has been processed.
    ///
    /// # Errors
    ///
    /// Registry fetch failures and input read errors abort the run. Failed
    /// writes and undecodable lines do not; they are reported per line.
    pub async fn apply_toggles_with<R, F>(
        &self,
        mut input: R,
        target_active: bool,
        mut on_report: F,
    ) -> Result<Vec<LineReport>>
    where
        R: AsyncBufRead + Unpin,
        F: FnMut(&LineReport),
    {
        let mut session = self.toggle_session(target_active).await?;
        let mut buf = Vec::new();
        let mut reports = Vec::new();

        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf).await? == 0 {
                break;
            }
            let line = decode_line(&buf);
            let report = session.apply_line(&line).await;
            on_report(&report);
            reports.push(report);
        }

        Ok(reports)
    }
}

/// One input line without its terminator. Bytes that are not UTF-8 are
/// replaced, so such a line simply names no alert.
fn decode_line(raw: &[u8]) -> Cow<'_, str> {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw)
}

/// A registry snapshot plus the state every matched alert should end in.
pub struct ToggleSession<'a> {
    client: &'a LibratoClient,
    registry: Vec<Alert>,
    target_active: bool,
}

impl ToggleSession<'_> {
    /// The snapshot, including this session's own successful writes.
    pub fn registry(&self) -> &[Alert] {
        &self.registry
    }

    pub fn target_active(&self) -> bool {
        self.target_active
    }

    /// Resolve one input line and toggle each alert it names.
    pub async fn apply_line(&mut self, line: &str) -> LineReport {
        let key = match_key(line);
        let matches = positions(key, &self.registry);
        if matches.is_empty() {
            debug!(key, "No alert matches input line");
        }

        let mut results = Vec::with_capacity(matches.len());
        for idx in matches {
            let outcome = self
                .client
                .apply_toggle(&self.registry[idx], self.target_active)
                .await;
            let alert = &mut self.registry[idx];
            if outcome == ToggleOutcome::Toggled {
                *alert = prepare_update(alert, self.target_active);
            }
            results.push(AlertToggle {
                id: alert.id,
                name: alert.name.clone(),
                outcome,
            });
        }

        LineReport {
            line: line.to_string(),
            key: key.to_string(),
            results,
        }
    }
}
