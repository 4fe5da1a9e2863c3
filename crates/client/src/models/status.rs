//! Alert status models.
//!
//! `GET /v1/alerts/status` returns two id lists: alerts currently firing and
//! alerts that cleared recently. The endpoint is not paginated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single status entry: which alert, and when it last triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertEvent {
    pub id: u64,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub triggered_at: DateTime<Utc>,
}

/// Current status of the account's alerts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertStatus {
    #[serde(default)]
    pub firing: Vec<AlertEvent>,
    #[serde(default)]
    pub cleared: Vec<AlertEvent>,
}
