//! Alert endpoints for the Librato alerts API.
//!
//! This module provides low-level HTTP endpoints for Librato alert operations.
//!
//! # What this module handles:
//! - Registry page retrieval
//! - Single alert retrieval and full-record update
//! - Alert status retrieval
//!
//! # What this module does NOT handle:
//! - Pagination across pages (see [`crate::client::alerts`])
//! - Result parsing beyond JSON deserialization

use reqwest::Client;
use tracing::debug;

use crate::auth::Credentials;
use crate::endpoints::send_request;
use crate::error::{ClientError, Result};
use crate::models::{Alert, AlertListResponse, AlertStatus};

/// Fetch one page of the alert registry starting at `offset`.
pub async fn list_alerts_page(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    offset: usize,
) -> Result<AlertListResponse> {
    debug!(offset, "Listing alerts page");

    let url = format!("{}/v1/alerts", base_url);
    let builder = credentials.apply(client.get(&url).query(&[("offset", offset)]));

    let response = send_request(builder, "/v1/alerts", "GET").await?;

    response.json().await.map_err(|e| {
        ClientError::InvalidResponse(format!("Failed to parse alert list response: {}", e))
    })
}

/// Fetch a single alert by id.
pub async fn get_alert(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    id: u64,
) -> Result<Alert> {
    debug!(id, "Getting alert");

    let url = format!("{}/v1/alerts/{}", base_url, id);
    let builder = credentials.apply(client.get(&url));

    let response = send_request(builder, "/v1/alerts/{id}", "GET").await?;

    response.json().await.map_err(|e| {
        ClientError::InvalidResponse(format!("Failed to parse alert {} response: {}", id, e))
    })
}

/// Fetch the firing and recently cleared alert ids.
pub async fn get_alert_status(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
) -> Result<AlertStatus> {
    debug!("Getting alert status");

    let url = format!("{}/v1/alerts/status", base_url);
    let builder = credentials.apply(client.get(&url));

    let response = send_request(builder, "/v1/alerts/status", "GET").await?;

    response.json().await.map_err(|e| {
        ClientError::InvalidResponse(format!("Failed to parse alert status response: {}", e))
    })
}

/// Replace an alert with the given full record.
///
/// The body is the whole alert, unmodeled fields included; the service
/// treats missing fields as cleared.
pub async fn update_alert(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    alert: &Alert,
) -> Result<()> {
    debug!(id = alert.id, active = alert.active, "Updating alert");

    let url = format!("{}/v1/alerts/{}", base_url, alert.id);
    let builder = credentials.apply(client.put(&url).json(alert));

    send_request(builder, "/v1/alerts/{id}", "PUT").await?;
    Ok(())
}
