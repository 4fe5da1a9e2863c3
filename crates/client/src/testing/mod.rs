//! Testing utilities for Librato client tests.
//!
//! Fixture loading plus builders for alert JSON and registry pages shaped
//! like the Librato API's responses. Available when running tests or when
//! the `test-utils` feature is enabled.
//!
//! # Example
//! ```ignore
//! use librato_client::testing::{load_fixture, generators::RegistryGenerator};
//!
//! let alert = load_fixture("alerts/get_alert.json");
//! let registry = RegistryGenerator::new().with_count(250).generate();
//! let page = registry.page(100, 100);
//! ```

pub mod generators;

use std::path::Path;

use serde_json::{Value, json};

/// Load a JSON fixture file from the fixtures directory.
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
pub fn load_fixture(fixture_path: &str) -> Value {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let full_path = manifest_dir.join("fixtures").join(fixture_path);
    let content = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()));
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}

/// A complete alert object as the API returns it, opaque fields included.
pub fn alert_json(id: u64, name: &str, active: bool) -> Value {
    json!({
        "id": id,
        "name": name,
        "description": "",
        "conditions": [{
            "id": id * 10,
            "type": "above",
            "metric_name": format!("{name}.value"),
            "source": "*",
            "threshold": 90.5,
            "duration": 300,
            "summary_function": "average"
        }],
        "services": [{
            "id": 77,
            "type": "mail",
            "settings": { "addresses": "ops@example.com" },
            "title": "ops mail"
        }],
        "attributes": { "runbook_url": "https://runbooks.example.com/alerts" },
        "active": active,
        "created_at": 1_394_745_670,
        "updated_at": 1_394_745_670,
        "version": 2,
        "rearm_seconds": 600,
        "rearm_per_signal": false,
        "md": true
    })
}

/// A registry page body.
pub fn page_json(offset: usize, total: usize, alerts: Vec<Value>) -> Value {
    json!({
        "query": {
            "offset": offset,
            "length": alerts.len(),
            "found": total,
            "total": total
        },
        "alerts": alerts
    })
}

/// A status body from `(id, triggered_at)` pairs.
pub fn status_json(firing: &[(u64, i64)], cleared: &[(u64, i64)]) -> Value {
    let events = |set: &[(u64, i64)]| -> Vec<Value> {
        set.iter()
            .map(|(id, at)| json!({ "id": id, "triggered_at": at }))
            .collect()
    };
    json!({ "firing": events(firing), "cleared": events(cleared) })
}
