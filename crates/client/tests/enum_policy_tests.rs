//! Enum leniency and strictness tests.
//!
//! This module tests how enumerations treat values outside their documented
//! domain:
//! - Lenient conversion captures them verbatim
//! - Strict parsing rejects them
//! - Strict validation reports them with their field path
//!
//! # Invariants
//! - Unknown values survive a JSON round trip unchanged

mod common;

use common::*;
use quicksight_client::models::{
    DataSourceType, DescribeDashboardResult, IngestionStatus, UpdateUserRequest, UserRole,
};
use quicksight_client::{EnumDomain, EnumPolicy, ModelError};

#[test]
fn test_lenient_conversion_keeps_unknown_value() {
    let engine = DataSourceType::from("QUANTUM_LAKE");
    assert_eq!(engine, DataSourceType::Unknown("QUANTUM_LAKE".to_string()));
    assert!(!engine.is_known());
    assert_eq!(engine.as_str(), "QUANTUM_LAKE");
}

#[test]
fn test_strict_parse_rejects_unknown_value() {
    let err = DataSourceType::parse_strict("QUANTUM_LAKE").unwrap_err();
    assert!(matches!(
        err,
        ModelError::UnknownEnumValue { enum_name: "DataSourceType", ref value } if value == "QUANTUM_LAKE"
    ));
    assert_eq!(
        DataSourceType::parse_strict("ATHENA").unwrap(),
        DataSourceType::Athena
    );
}

#[test]
fn test_from_str_is_lenient() {
    let status: IngestionStatus = "PAUSED_FOR_MAINTENANCE".parse().unwrap();
    assert!(!status.is_known());
}

#[test]
fn test_unknown_value_round_trips_through_json() {
    let json = serde_json::json!("BRAND_NEW_ROLE");
    let role: UserRole = serde_json::from_value(json.clone()).unwrap();
    assert_eq!(serde_json::to_value(&role).unwrap(), json);
}

#[test]
fn test_domain_metadata() {
    assert_eq!(<UserRole as EnumDomain>::NAME, "UserRole");
    assert!(UserRole::VALUES.contains(&"RESTRICTED_READER"));
    assert_eq!(UserRole::Admin.wire(), "ADMIN");
}

#[test]
fn test_strict_validation_reports_nested_unknown_values() {
    let result: DescribeDashboardResult = load_model("dashboards/describe_dashboard.json");

    let lenient = ValidationPolicy::default();
    assert_eq!(lenient.enums, EnumPolicy::Lenient);
    assert!(result.validate(&lenient).is_valid());

    let report = result.validate(&ValidationPolicy::strict());
    assert_eq!(
        report.at("Dashboard.Version.Errors[1].Type"),
        vec![&ViolationKind::UnknownEnumValue {
            enum_name: "DashboardErrorType",
            value: "BRAND_NEW_ERROR".to_string()
        }]
    );
    assert_eq!(report.violations.len(), 1);
}

#[test]
fn test_strict_validation_on_request() {
    let request = UpdateUserRequest::default()
        .with_user_name("alice")
        .with_aws_account_id(ACCOUNT_ID)
        .with_namespace("default")
        .with_email("alice@example.com")
        .with_role("OWNER");
    assert!(request.validate(&ValidationPolicy::default()).is_valid());
    assert!(!request.validate(&ValidationPolicy::strict()).is_valid());
}
