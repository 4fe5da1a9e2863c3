//! Alert models for the Librato alerts API.
//!
//! Librato alerts API endpoints:
//! - GET /v1/alerts?offset={n}
//! - GET /v1/alerts/{id}
//! - PUT /v1/alerts/{id}

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::serde_helpers::string_or_null;

/// An alert definition.
///
/// Only the fields this client reads or writes are modeled. Everything else
/// (conditions, services, attributes, timestamps, version, rearm settings,
/// and anything the service adds later) is kept verbatim in `extra`, so a
/// read-modify-write cycle sends back exactly what was received apart from
/// the field being changed.
///
/// Decoding goes through a plain JSON map rather than a flattened struct so
/// that number text in `extra` (`90.50`, `3e2`, integers beyond `u64`) is
/// written back exactly as it was read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Alert {
    /// Server-assigned identity.
    pub id: u64,
    /// Human-facing name. Not guaranteed unique by the service.
    pub name: String,
    /// Free-text description, empty when the service sent none.
    pub description: String,
    /// Whether the alert is enabled.
    pub active: bool,
    /// Every other field, in the order the server sent them.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TryFrom<Map<String, Value>> for Alert {
    type Error = String;

    fn try_from(mut fields: Map<String, Value>) -> Result<Self, Self::Error> {
        let id = fields
            .shift_remove("id")
            .and_then(|v| v.as_u64())
            .ok_or_else(|| "missing or invalid field `id`".to_string())?;
        let name = match fields.shift_remove("name") {
            Some(Value::String(name)) => name,
            _ => return Err("missing or invalid field `name`".to_string()),
        };
        let description = match fields.shift_remove("description") {
            Some(value) => string_or_null(value)
                .map_err(|e| format!("invalid field `description`: {e}"))?,
            None => String::new(),
        };
        let active = fields
            .shift_remove("active")
            .and_then(|v| v.as_bool())
            .ok_or_else(|| "missing or invalid field `active`".to_string())?;

        Ok(Self {
            id,
            name,
            description,
            active,
            extra: fields,
        })
    }
}

/// Pagination metadata returned with every registry page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryMeta {
    /// Index of the first record in this page.
    pub offset: usize,
    /// Number of records in this page.
    pub length: usize,
    /// Number of records matching the query, when reported.
    #[serde(default)]
    pub found: Option<usize>,
    /// Number of records known to the server at fetch time.
    pub total: usize,
}

/// One page of the alert registry.
#[derive(Debug, Clone, Deserialize)]
pub struct AlertListResponse {
    pub query: QueryMeta,
    #[serde(default)]
    pub alerts: Vec<Alert>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_alert() -> Value {
        json!({
            "id": 1234,
            "name": "cpu-high",
            "description": "",
            "conditions": [{
                "id": 9,
                "type": "above",
                "metric_name": "cpu.percent",
                "source": "*",
                "threshold": 90.5,
                "duration": 300,
                "summary_function": "average"
            }],
            "services": [{
                "id": 77,
                "type": "webhook",
                "settings": { "url": "https://hooks.example.com/x" },
                "title": "ops hook"
            }],
            "attributes": {},
            "active": true,
            "created_at": 1394745670,
            "updated_at": 1394745670,
            "version": 2,
            "rearm_seconds": 600,
            "rearm_per_signal": false,
            "md": true
        })
    }

    #[test]
    fn test_alert_keeps_unmodeled_fields() {
        let alert: Alert = serde_json::from_value(full_alert()).unwrap();
        assert_eq!(alert.id, 1234);
        assert_eq!(alert.name, "cpu-high");
        assert!(alert.active);
        assert_eq!(alert.extra["version"], json!(2));
        assert_eq!(alert.extra["conditions"][0]["threshold"], json!(90.5));
        assert!(!alert.extra.contains_key("id"));
        assert!(!alert.extra.contains_key("active"));
    }

    #[test]
    fn test_alert_reserializes_every_field() {
        let original = full_alert();
        let alert: Alert = serde_json::from_value(original.clone()).unwrap();
        let written = serde_json::to_value(&alert).unwrap();
        assert_eq!(written, original);
    }

    #[test]
    fn test_unmodeled_field_order_is_preserved() {
        let alert: Alert = serde_json::from_value(full_alert()).unwrap();
        let keys: Vec<&str> = alert.extra.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            [
                "conditions",
                "services",
                "attributes",
                "created_at",
                "updated_at",
                "version",
                "rearm_seconds",
                "rearm_per_signal",
                "md"
            ]
        );
    }

    #[test]
    fn test_number_text_survives_round_trip() {
        let input = r#"{"id":7,"name":"disk","description":"d","conditions":[{"threshold":90.50,"duration":3e2}],"active":true,"version":18446744073709551616}"#;
        let alert: Alert = serde_json::from_str(input).unwrap();
        let written = serde_json::to_string(&alert).unwrap();
        assert_eq!(
            written,
            r#"{"id":7,"name":"disk","description":"d","active":true,"conditions":[{"threshold":90.50,"duration":3e2}],"version":18446744073709551616}"#
        );
    }

    #[test]
    fn test_alert_decodes_inside_list_page_from_text() {
        let page: AlertListResponse = serde_json::from_str(
            r#"{"query":{"offset":0,"length":1,"total":1},"alerts":[{"id":12,"name":"a","active":false,"rearm_seconds":600}]}"#,
        )
        .unwrap();
        assert_eq!(page.alerts[0].id, 12);
        assert_eq!(page.alerts[0].extra["rearm_seconds"], json!(600));
    }

    #[test]
    fn test_null_description_reads_as_empty() {
        let alert: Alert = serde_json::from_value(json!({
            "id": 1, "name": "a", "description": null, "active": false
        }))
        .unwrap();
        assert_eq!(alert.description, "");
    }

    #[test]
    fn test_missing_active_is_a_decode_error() {
        let result: Result<Alert, _> = serde_json::from_value(json!({ "id": 1, "name": "a" }));
        assert!(result.unwrap_err().to_string().contains("active"));
    }

    #[test]
    fn test_list_response_deserializes() {
        let page: AlertListResponse = serde_json::from_value(json!({
            "query": { "offset": 0, "length": 1, "found": 1, "total": 1 },
            "alerts": [full_alert()]
        }))
        .unwrap();
        assert_eq!(page.query.length, 1);
        assert_eq!(page.query.found, Some(1));
        assert_eq!(page.alerts.len(), 1);
    }
}
