//! Serde helpers for Librato's loose JSON typing.
//!
//! Invariants / assumptions:
//! - Librato may send `null` where a string is expected (e.g. an alert created
//!   without a description); those read as an empty string.

use serde::{Deserialize, Deserializer};

pub fn string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
