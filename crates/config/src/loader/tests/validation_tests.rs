//! Validation tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test account id validation (length, digits).
//! - Test endpoint validation (scheme, host, syntax).
//! - Test region and namespace validation.

use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;

#[test]
fn test_account_id_must_have_twelve_digits() {
    for bad in ["12345", "1111222233334", "11112222333x"] {
        match ConfigLoader::new().with_account_id(bad).build() {
            Err(ConfigError::InvalidAccountId { value }) => assert_eq!(value, bad),
            other => panic!("expected InvalidAccountId for {bad}, got {other:?}"),
        }
    }
}

#[test]
fn test_endpoint_scheme_must_be_http() {
    let err = ConfigLoader::new()
        .with_endpoint("ftp://quicksight.example.com")
        .build()
        .unwrap_err();
    assert!(
        matches!(err, ConfigError::InvalidEndpoint { ref message } if message.contains("ftp")),
        "got {err:?}"
    );
}

#[test]
fn test_endpoint_must_parse() {
    let err = ConfigLoader::new()
        .with_endpoint("quicksight.example.com")
        .build()
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEndpoint { .. }));
}

#[test]
fn test_empty_endpoint_rejected() {
    let err = ConfigLoader::new().with_endpoint("  ").build().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEndpoint { .. }));
}

#[test]
fn test_region_rejects_uppercase_and_spaces() {
    for bad in ["US-EAST-1", "us east 1", "-us-east-1", ""] {
        match ConfigLoader::new().with_region(bad).build() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "region"),
            other => panic!("expected InvalidValue for {bad:?}, got {other:?}"),
        }
    }
}

#[test]
fn test_namespace_charset_and_length() {
    assert!(ConfigLoader::new().with_namespace("team_a.prod-1").build().is_ok());
    assert!(ConfigLoader::new().with_namespace("a".repeat(64)).build().is_ok());

    for bad in ["a".repeat(65), "has space".to_string(), "slash/ns".to_string()] {
        match ConfigLoader::new().with_namespace(bad.clone()).build() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "namespace"),
            other => panic!("expected InvalidValue for {bad:?}, got {other:?}"),
        }
    }
}
