//! Correlation of the alert registry with the status endpoint.
//!
//! Responsibilities:
//! - Index status events by alert id.
//! - Assign every registry alert exactly one [`Classification`].
//!
//! Does NOT handle:
//! - Fetching (see [`crate::client`]).
//! - Rendering (see the CLI formatters).
//!
//! Precedence, highest first: an inactive alert is `Disabled` whatever the
//! status endpoint says, then `Firing`, then `RecentlyCleared`, otherwise
//! `ActiveQuiet`.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{Alert, AlertEvent, AlertStatus};

/// Derived state of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Firing,
    RecentlyCleared,
    ActiveQuiet,
    Disabled,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Firing => "Firing",
            Self::RecentlyCleared => "Recently cleared",
            Self::ActiveQuiet => "Active",
            Self::Disabled => "Disabled",
        };
        f.write_str(label)
    }
}

/// An alert with its derived state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedAlert {
    #[serde(flatten)]
    pub alert: Alert,
    pub classification: Classification,
}

/// An alert named by the status endpoint, with the time it triggered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TriggeredAlert {
    #[serde(flatten)]
    pub alert: Alert,
    pub triggered_at: DateTime<Utc>,
}

/// Status events keyed by alert id.
#[derive(Debug, Clone, Default)]
pub struct StatusIndex {
    firing: HashMap<u64, DateTime<Utc>>,
    cleared: HashMap<u64, DateTime<Utc>>,
}

impl StatusIndex {
    pub fn new(status: &AlertStatus) -> Self {
        Self {
            firing: index(&status.firing),
            cleared: index(&status.cleared),
        }
    }

    /// When the alert started firing, if it is firing.
    pub fn firing_since(&self, id: u64) -> Option<DateTime<Utc>> {
        self.firing.get(&id).copied()
    }

    /// When the alert last triggered, if it cleared recently.
    pub fn cleared_since(&self, id: u64) -> Option<DateTime<Utc>> {
        self.cleared.get(&id).copied()
    }

    pub fn classify(&self, alert: &Alert) -> Classification {
        if !alert.active {
            Classification::Disabled
        } else if self.firing.contains_key(&alert.id) {
            Classification::Firing
        } else if self.cleared.contains_key(&alert.id) {
            Classification::RecentlyCleared
        } else {
            Classification::ActiveQuiet
        }
    }
}

fn index(events: &[AlertEvent]) -> HashMap<u64, DateTime<Utc>> {
    events.iter().map(|e| (e.id, e.triggered_at)).collect()
}

/// Classify every alert, keeping registry order.
pub fn classify(registry: Vec<Alert>, status: &AlertStatus) -> Vec<ClassifiedAlert> {
    let index = StatusIndex::new(status);
    registry
        .into_iter()
        .map(|alert| {
            let classification = index.classify(&alert);
            ClassifiedAlert {
                alert,
                classification,
            }
        })
        .collect()
}
