//! Centralized constants for the librato-alerts workspace.
//!
//! Default values shared by the config loader and the client builder live
//! here so that no crate hard-codes them twice.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default Librato metrics API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://metrics-api.librato.com";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Environment Variables
// =============================================================================

/// Account email used as the basic-auth user.
pub const ENV_MAIL: &str = "LIBRATO_MAIL";

/// API token used as the basic-auth password.
pub const ENV_TOKEN: &str = "LIBRATO_TOKEN";

/// Override for the API base URL.
pub const ENV_BASE_URL: &str = "LIBRATO_BASE_URL";

/// Request timeout in seconds.
pub const ENV_TIMEOUT: &str = "LIBRATO_TIMEOUT";

/// Skip TLS certificate verification (`true`/`false`).
pub const ENV_SKIP_VERIFY: &str = "LIBRATO_SKIP_VERIFY";
