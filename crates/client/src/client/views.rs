//! Registry and status combined into the views the CLI renders.
//!
//! # What this module handles:
//! - `list_alerts`: every registry alert with its classification
//! - `list_firing` / `list_recently_cleared`: alerts named by one status set
//!
//! # Invariants
//! - The registry is fetched completely before the status is read.
//! - Status views list registry matches in registry order, followed by
//!   status ids missing from the registry snapshot (fetched one by one) in
//!   the order the status endpoint reported them.
//! - Status views apply the same precedence as `list_alerts`: an inactive
//!   alert never appears in either view, and an alert that is firing is
//!   not listed as recently cleared.

use std::collections::HashSet;

use tracing::debug;

use crate::client::LibratoClient;
use crate::correlate::{Classification, ClassifiedAlert, StatusIndex, TriggeredAlert, classify};
use crate::error::Result;

impl LibratoClient {
    /// Every alert in the registry with its classification, in registry order.
    pub async fn list_alerts(&self) -> Result<Vec<ClassifiedAlert>> {
        let registry = self.list_all_alerts().await?;
        let status = self.alert_status().await?;
        Ok(classify(registry, &status))
    }

    /// Alerts currently firing.
    pub async fn list_firing(&self) -> Result<Vec<TriggeredAlert>> {
        self.triggered(Classification::Firing).await
    }

    /// Alerts that cleared recently and are not firing again.
    pub async fn list_recently_cleared(&self) -> Result<Vec<TriggeredAlert>> {
        self.triggered(Classification::RecentlyCleared).await
    }

    async fn triggered(&self, wanted: Classification) -> Result<Vec<TriggeredAlert>> {
        let registry = self.list_all_alerts().await?;
        let status = self.alert_status().await?;
        let index = StatusIndex::new(&status);
        let since = |id| match wanted {
            Classification::Firing => index.firing_since(id),
            _ => index.cleared_since(id),
        };

        let known: HashSet<u64> = registry.iter().map(|a| a.id).collect();
        let mut out: Vec<TriggeredAlert> = registry
            .into_iter()
            .filter(|alert| index.classify(alert) == wanted)
            .filter_map(|alert| {
                since(alert.id).map(|triggered_at| TriggeredAlert {
                    alert,
                    triggered_at,
                })
            })
            .collect();

        let events = match wanted {
            Classification::Firing => &status.firing,
            _ => &status.cleared,
        };
        let mut fetched = HashSet::new();
        for event in events {
            if known.contains(&event.id) || !fetched.insert(event.id) {
                continue;
            }
            debug!(id = event.id, "Status names an alert missing from the registry snapshot");
            let alert = self.get_alert(event.id).await?;
            if index.classify(&alert) != wanted {
                continue;
            }
            out.push(TriggeredAlert {
                alert,
                triggered_at: event.triggered_at,
            });
        }

        Ok(out)
    }
}
