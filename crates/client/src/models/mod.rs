//! Data models for Librato API responses.
//!
//! # What this module handles:
//! - Deserialization of alert definitions, registry pages and alert status
//! - Serialization of alert definitions for the update (PUT) path
//!
//! # What this module does NOT handle:
//! - Direct HTTP API calls (see [`crate::endpoints`])
//! - Joining alerts with status (see [`crate::correlate`])

mod alerts;
mod status;

pub use alerts::{Alert, AlertListResponse, QueryMeta};
pub use status::{AlertEvent, AlertStatus};
