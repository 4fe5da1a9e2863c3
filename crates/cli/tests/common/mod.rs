//! Shared test utilities for librato-alerts integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Serve a small alert registry from wiremock.
//!
//! Invariants / Assumptions:
//! - Credentials are `ops@example.com` / `test-token` unless overridden.
//! - Colors are off (`NO_COLOR=1`) so output can be compared verbatim.

#![allow(dead_code)]

use assert_cmd::Command;
use librato_client::testing::{page_json, status_json};
use serde_json::Value;
use wiremock::matchers::{basic_auth, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const EMAIL: &str = "ops@example.com";
pub const TOKEN: &str = "test-token";

/// Returns a hermetic `librato-alerts` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - Credentials are set to dummy values to satisfy config validation.
/// - Other `LIBRATO_*` variables are cleared to ensure no leakage from the host.
pub fn librato_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("librato-alerts");

    cmd.env("DOTENV_DISABLED", "1");
    cmd.env("NO_COLOR", "1");
    cmd.env("LIBRATO_MAIL", EMAIL);
    cmd.env("LIBRATO_TOKEN", TOKEN);

    cmd.env_remove("LIBRATO_BASE_URL")
        .env_remove("LIBRATO_TIMEOUT")
        .env_remove("LIBRATO_SKIP_VERIFY")
        .env_remove("RUST_LOG");

    cmd
}

/// Returns a hermetic command pointed at the mock server.
pub fn librato_cmd_for(server: &MockServer) -> Command {
    let mut cmd = librato_cmd();
    cmd.env("LIBRATO_BASE_URL", server.uri());
    cmd
}

/// Serve `alerts` as a single registry page.
pub async fn mount_registry(server: &MockServer, alerts: Vec<Value>) {
    let total = alerts.len();
    Mock::given(method("GET"))
        .and(path("/v1/alerts"))
        .and(basic_auth(EMAIL, TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(0, total, alerts)))
        .mount(server)
        .await;
}

/// Serve the status endpoint from `(id, triggered_at)` pairs.
pub async fn mount_status(server: &MockServer, firing: &[(u64, i64)], cleared: &[(u64, i64)]) {
    Mock::given(method("GET"))
        .and(path("/v1/alerts/status"))
        .and(basic_auth(EMAIL, TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(status_json(firing, cleared)))
        .mount(server)
        .await;
}
