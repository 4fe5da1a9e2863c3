//! Common test utilities for integration tests.
//!
//! Shared helpers and re-exports for testing the Librato client against a
//! wiremock server standing in for the Librato API.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - Every client built here authenticates as `ops@example.com:test-token`

#![allow(dead_code, unused_imports)]

pub use librato_client::testing::generators::{Registry, RegistryGenerator};
pub use librato_client::testing::{alert_json, load_fixture, page_json, status_json};
pub use librato_client::{Credentials, LibratoClient, endpoints};
pub use reqwest::Client;
pub use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use secrecy::SecretString;
use wiremock::matchers::{basic_auth, method, path};

pub const EMAIL: &str = "ops@example.com";
pub const TOKEN: &str = "test-token";

pub fn credentials() -> Credentials {
    Credentials::new(EMAIL.to_string(), SecretString::new(TOKEN.to_string().into()))
}

/// A client pointed at the mock server.
pub fn client_for(server: &MockServer) -> LibratoClient {
    LibratoClient::builder()
        .base_url(server.uri())
        .credentials(EMAIL.to_string(), SecretString::new(TOKEN.to_string().into()))
        .build()
        .expect("client builds")
}

fn requested_offset(request: &Request) -> usize {
    request
        .url
        .query_pairs()
        .find(|(k, _)| k == "offset")
        .and_then(|(_, v)| v.parse().ok())
        .unwrap_or(0)
}

/// Serve `registry` from `GET /v1/alerts`, `page_size` records per page.
pub async fn mount_registry(server: &MockServer, registry: Registry, page_size: usize) {
    Mock::given(method("GET"))
        .and(path("/v1/alerts"))
        .and(basic_auth(EMAIL, TOKEN))
        .respond_with(move |request: &Request| {
            let offset = requested_offset(request);
            ResponseTemplate::new(200).set_body_json(registry.page(offset, page_size))
        })
        .mount(server)
        .await;
}

/// Serve a fixed registry page body from `GET /v1/alerts`.
pub async fn mount_single_page(server: &MockServer, alerts: Vec<serde_json::Value>) {
    let total = alerts.len();
    Mock::given(method("GET"))
        .and(path("/v1/alerts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(0, total, alerts)))
        .mount(server)
        .await;
}

/// Serve `GET /v1/alerts/status`.
pub async fn mount_status(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/v1/alerts/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Offsets requested from `GET /v1/alerts`, in order.
pub async fn requested_offsets(server: &MockServer) -> Vec<usize> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|r| r.method.as_str() == "GET" && r.url.path() == "/v1/alerts")
        .map(requested_offset)
        .collect()
}

/// Requests with the given method.
pub async fn requests_with_method(server: &MockServer, m: &str) -> Vec<Request> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|r| r.method.as_str() == m)
        .collect()
}
