//! Single-attempt request helper.
//!
//! Every call is sent exactly once. Non-2xx responses become
//! [`ClientError::ApiError`] carrying the status code and the response body;
//! transport failures surface as [`ClientError::HttpError`].

use reqwest::{RequestBuilder, Response, StatusCode};
use tracing::debug;

use crate::error::{ClientError, Result};

/// Send a request and turn non-success statuses into errors.
///
/// `endpoint` and `method` are only used for logging.
pub async fn send_request(
    builder: RequestBuilder,
    endpoint: &str,
    method: &str,
) -> Result<Response> {
    let response = builder.send().await?;
    let status = response.status();
    debug!(endpoint, method, status = status.as_u16(), "Librato API response");

    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    Err(ClientError::ApiError {
        status: status.as_u16(),
        url,
        message: error_message(status, body),
    })
}

/// The body as sent, or the status reason when the body is empty.
fn error_message(status: StatusCode, body: String) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return status.canonical_reason().unwrap_or("no response body").to_string();
    }
    trimmed.to_string()
}
