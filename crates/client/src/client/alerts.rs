//! Alert-related API methods for [`LibratoClient`].
//!
//! # What this module handles:
//! - Walking the paged registry to completion
//! - Getting a single alert and the alert status
//!
//! # What this module does NOT handle:
//! - Low-level alert endpoint HTTP calls (in [`crate::endpoints`])
//! - Classification (in [`crate::correlate`])

use tracing::{debug, warn};

use crate::client::LibratoClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{Alert, AlertStatus};
use crate::pagination::PageCursor;

impl LibratoClient {
    /// Fetch every alert in the registry, in server order.
    ///
    /// Pages are requested one after another until the server-reported
    /// range reaches the reported total. Any failure discards the records
    /// fetched so far.
    ///
    /// # Errors
    ///
    /// Transport, status and decode errors from any page, or
    /// `ClientError::PaginationStalled` when a page fails to advance.
    pub async fn list_all_alerts(&self) -> Result<Vec<Alert>> {
        let mut cursor = PageCursor::new();
        let mut alerts = Vec::new();

        while cursor.has_more() {
            let requested = cursor.next_offset();
            let page = endpoints::list_alerts_page(
                &self.http,
                &self.base_url,
                &self.credentials,
                requested,
            )
            .await?;

            if page.query.offset != requested {
                warn!(
                    requested,
                    reported = page.query.offset,
                    "Registry page starts at a different offset than requested"
                );
            }
            if page.alerts.len() != page.query.length {
                warn!(
                    reported = page.query.length,
                    received = page.alerts.len(),
                    "Registry page length does not match the records received"
                );
            }

            cursor.advance(&page.query)?;
            alerts.extend(page.alerts);
        }

        debug!(count = alerts.len(), "Fetched alert registry");
        Ok(alerts)
    }

    /// Get a single alert by id.
    pub async fn get_alert(&self, id: u64) -> Result<Alert> {
        endpoints::get_alert(&self.http, &self.base_url, &self.credentials, id).await
    }

    /// Get the firing and recently cleared alert ids.
    pub async fn alert_status(&self) -> Result<AlertStatus> {
        endpoints::get_alert_status(&self.http, &self.base_url, &self.credentials).await
    }
}
