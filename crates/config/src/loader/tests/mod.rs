//! Tests for the configuration loader builder.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.

use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Every variable the loader reads, cleared so host values cannot leak in.
pub fn cleared_librato_env() -> [(&'static str, Option<&'static str>); 5] {
    [
        ("LIBRATO_BASE_URL", None),
        ("LIBRATO_MAIL", None),
        ("LIBRATO_TOKEN", None),
        ("LIBRATO_TIMEOUT", None),
        ("LIBRATO_SKIP_VERIFY", None),
    ]
}
