//! Integration tests for the public configuration loader API.

use std::time::Duration;

use librato_config::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use librato_config::{ConfigError, ConfigLoader};
use secrecy::ExposeSecret;
use serial_test::serial;

const CLEARED: [(&str, Option<&str>); 5] = [
    ("LIBRATO_BASE_URL", None),
    ("LIBRATO_MAIL", None),
    ("LIBRATO_TOKEN", None),
    ("LIBRATO_TIMEOUT", None),
    ("LIBRATO_SKIP_VERIFY", None),
];

#[test]
#[serial]
fn test_env_only_configuration() {
    temp_env::with_vars(CLEARED, || {
        temp_env::with_vars(
            [
                ("LIBRATO_MAIL", Some("ops@example.com")),
                ("LIBRATO_TOKEN", Some("abc123")),
            ],
            || {
                let config = ConfigLoader::new().from_env().unwrap().build().unwrap();
                assert_eq!(config.connection.base_url, DEFAULT_BASE_URL);
                assert_eq!(
                    config.connection.timeout,
                    Duration::from_secs(DEFAULT_TIMEOUT_SECS)
                );
                assert!(!config.connection.skip_verify);
                assert_eq!(config.auth.email, "ops@example.com");
                assert_eq!(config.auth.token.expose_secret(), "abc123");
            },
        );
    });
}

#[test]
#[serial]
fn test_overrides_beat_environment() {
    temp_env::with_vars(CLEARED, || {
        temp_env::with_vars(
            [
                ("LIBRATO_MAIL", Some("env@example.com")),
                ("LIBRATO_TOKEN", Some("env-token")),
                ("LIBRATO_BASE_URL", Some("https://env.example.com")),
            ],
            || {
                let config = ConfigLoader::new()
                    .from_env()
                    .unwrap()
                    .with_email("flag@example.com".to_string())
                    .with_base_url("http://localhost:8080/".to_string())
                    .build()
                    .unwrap();
                assert_eq!(config.auth.email, "flag@example.com");
                assert_eq!(config.auth.token.expose_secret(), "env-token");
                assert_eq!(config.connection.base_url, "http://localhost:8080");
            },
        );
    });
}

#[test]
#[serial]
fn test_missing_token_is_reported_by_name() {
    temp_env::with_vars(CLEARED, || {
        temp_env::with_var("LIBRATO_MAIL", Some("ops@example.com"), || {
            let err = ConfigLoader::new()
                .from_env()
                .unwrap()
                .build()
                .unwrap_err();
            assert!(matches!(err, ConfigError::MissingAuth { .. }));
            assert!(err.to_string().contains("LIBRATO_TOKEN"));
        });
    });
}

#[test]
#[serial]
fn test_unparseable_timeout_env_is_rejected() {
    temp_env::with_vars(CLEARED, || {
        temp_env::with_var("LIBRATO_TIMEOUT", Some("soon"), || {
            match ConfigLoader::new().from_env() {
                Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "LIBRATO_TIMEOUT"),
                Err(other) => panic!("Expected InvalidValue, got {other}"),
                Ok(_) => panic!("Expected InvalidValue, got Ok"),
            }
        });
    });
}

#[test]
fn test_token_is_redacted_in_debug_output() {
    let config = ConfigLoader::new()
        .with_email("ops@example.com".to_string())
        .with_token("very-secret-token".to_string())
        .build()
        .unwrap();
    assert!(!format!("{:?}", config).contains("very-secret-token"));
}
