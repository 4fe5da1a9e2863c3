//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `ClientError` variants and CLI-level failures to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-9 are reserved for specific error categories.
//! - A toggle run that completed but had failing lines exits with 9.

use librato_client::ClientError;
use thiserror::Error;

/// Structured exit codes for librato-alerts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Authentication failure - the email/token pair was rejected.
    AuthenticationFailed = 2,

    /// Connection error - network, timeout, TLS or DNS failure.
    ///
    /// Scripts may retry later.
    ConnectionError = 3,

    /// Resource not found - an alert id the status endpoint named no longer exists.
    NotFound = 4,

    /// Validation error - bad input, undecodable response or stalled pagination.
    ///
    /// Scripts should fix the input and not retry the same request.
    ValidationError = 5,

    /// Permission denied - the token lacks write access.
    PermissionDenied = 6,

    /// Rate limited - HTTP 429 Too Many Requests.
    RateLimited = 7,

    /// Service unavailable - HTTP 502/503/504.
    ServiceUnavailable = 8,

    /// One or more enable/disable writes failed; the rest of the input was processed.
    PartialFailure = 9,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::AuthFailed(_) => ExitCode::AuthenticationFailed,
            ClientError::ApiError { status: 401, .. } => ExitCode::AuthenticationFailed,

            ClientError::InvalidUrl(_) => ExitCode::ConnectionError,

            ClientError::ApiError { status: 404, .. } => ExitCode::NotFound,

            ClientError::InvalidResponse(_) => ExitCode::ValidationError,
            ClientError::PaginationStalled { .. } => ExitCode::ValidationError,
            ClientError::ApiError { status: 400, .. } => ExitCode::ValidationError,
            ClientError::ApiError { status: 422, .. } => ExitCode::ValidationError,

            ClientError::ApiError { status: 403, .. } => ExitCode::PermissionDenied,

            ClientError::ApiError { status: 429, .. } => ExitCode::RateLimited,

            ClientError::ApiError { status: 502, .. } => ExitCode::ServiceUnavailable,
            ClientError::ApiError { status: 503, .. } => ExitCode::ServiceUnavailable,
            ClientError::ApiError { status: 504, .. } => ExitCode::ServiceUnavailable,

            ClientError::HttpError(e) => {
                if e.is_connect() || e.is_timeout() {
                    ExitCode::ConnectionError
                } else if e.is_decode() {
                    ExitCode::ValidationError
                } else {
                    ExitCode::GeneralError
                }
            }

            ClientError::ApiError { .. } => ExitCode::GeneralError,
            ClientError::InputRead(_) => ExitCode::GeneralError,
        }
    }
}

/// Failures raised by the CLI itself rather than the client.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{mode} reads alert names from stdin; pipe them in, e.g. `librato-alerts list | grep <pattern> | librato-alerts {mode}`")]
    InteractiveStdin { mode: &'static str },

    #[error("Invalid output format: {0}. Valid options: table, json")]
    InvalidOutputFormat(String),

    #[error("{failed} alert update(s) failed")]
    ToggleFailures { failed: usize },
}

impl From<&CliError> for ExitCode {
    fn from(err: &CliError) -> Self {
        match err {
            CliError::InteractiveStdin { .. } => ExitCode::ValidationError,
            CliError::InvalidOutputFormat(_) => ExitCode::ValidationError,
            CliError::ToggleFailures { .. } => ExitCode::PartialFailure,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(client_err) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(client_err);
            }
            if let Some(cli_err) = cause.downcast_ref::<CliError>() {
                return ExitCode::from(cli_err);
            }
        }

        ExitCode::GeneralError
    }
}
