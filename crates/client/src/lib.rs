//! Librato alerts REST API client.
//!
//! This crate provides a type-safe client for the Librato metrics API alert
//! endpoints: paging through the alert registry, reading alert status,
//! correlating the two, and enabling or disabling alerts by name without
//! disturbing fields the client does not model.

mod auth;
pub mod client;
pub mod correlate;
pub mod endpoints;
pub mod error;
pub mod matcher;
pub mod models;
pub mod pagination;
mod serde_helpers;

#[cfg(feature = "test-utils")]
pub mod testing;

pub use auth::Credentials;
pub use client::LibratoClient;
pub use client::builder::LibratoClientBuilder;
pub use client::toggle::{
    AlertToggle, DESCRIPTION_PLACEHOLDER, LineReport, ToggleOutcome, ToggleSession, prepare_update,
};
pub use correlate::{Classification, ClassifiedAlert, StatusIndex, TriggeredAlert, classify};
pub use error::{ClientError, Result};
pub use matcher::{match_key, resolve};
pub use models::{Alert, AlertEvent, AlertListResponse, AlertStatus, QueryMeta};
pub use pagination::PageCursor;
