//! Error types for the Librato client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during Librato client operations.
///
/// No variant is retried automatically: every remote call is attempted once
/// and the caller decides what to do with the failure.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Credentials were not supplied to the builder.
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// Transport error (connect, timeout, TLS, redirect loop).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-2xx response from the Librato API.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// Response body did not match the expected shape.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// The server's pagination metadata would never reach the reported total.
    #[error(
        "Pagination stalled: page at offset {offset} with length {length} does not advance towards total {total}"
    )]
    PaginationStalled {
        offset: usize,
        length: usize,
        total: usize,
    },

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Reading operator input failed.
    #[error("Failed to read input: {0}")]
    InputRead(#[from] std::io::Error),
}

impl ClientError {
    /// HTTP status code carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if this error indicates rejected credentials.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::AuthFailed(_)) || self.status() == Some(401)
    }
}
