//! Basic tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test defaults when nothing is configured.
//! - Test builder overrides and endpoint derivation from the region.

use crate::EnumPolicy;
use crate::loader::builder::ConfigLoader;

#[test]
fn test_defaults() {
    let config = ConfigLoader::new().build().unwrap();
    assert_eq!(config.region, "us-east-1");
    assert_eq!(
        config.endpoint.as_str(),
        "https://quicksight.us-east-1.amazonaws.com/"
    );
    assert_eq!(config.account_id, None);
    assert_eq!(config.namespace, "default");
    assert_eq!(config.enum_policy, EnumPolicy::Lenient);
    assert!(!config.is_strict());
}

#[test]
fn test_endpoint_follows_region() {
    let config = ConfigLoader::new().with_region("ap-southeast-2").build().unwrap();
    assert_eq!(
        config.endpoint.host_str(),
        Some("quicksight.ap-southeast-2.amazonaws.com")
    );
}

#[test]
fn test_explicit_endpoint_wins_over_region() {
    let config = ConfigLoader::new()
        .with_region("eu-central-1")
        .with_endpoint("http://localhost:4566")
        .build()
        .unwrap();
    assert_eq!(config.region, "eu-central-1");
    assert_eq!(config.endpoint.as_str(), "http://localhost:4566/");
}

#[test]
fn test_builder_values() {
    let config = ConfigLoader::new()
        .with_account_id("111122223333")
        .with_namespace("analytics")
        .with_enum_policy(EnumPolicy::Strict)
        .build()
        .unwrap();
    assert_eq!(config.account_id.as_deref(), Some("111122223333"));
    assert_eq!(config.namespace, "analytics");
    assert!(config.is_strict());
}

#[test]
fn test_values_are_trimmed() {
    let config = ConfigLoader::new()
        .with_region(" us-west-2 ")
        .with_account_id(" 111122223333")
        .build()
        .unwrap();
    assert_eq!(config.region, "us-west-2");
    assert_eq!(config.account_id.as_deref(), Some("111122223333"));
}
