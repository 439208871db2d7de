//! Integration tests for the `operations` and `enums` commands.
//!
//! These commands need no configuration, so they must succeed even when the
//! environment holds invalid settings.

mod common;

use common::quicksight_cmd;
use predicates::prelude::*;

#[test]
fn test_operations_table_lists_catalog() {
    quicksight_cmd()
        .arg("operations")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("NAME"))
        .stdout(predicate::str::contains("CreateDataSource"))
        .stdout(predicate::str::contains("/accounts/{AwsAccountId}/data-sources"));
}

#[test]
fn test_operations_filter_json() {
    let output = quicksight_cmd()
        .args(["-o", "json", "operations", "--filter", "templatealias"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 5);
    for row in rows {
        assert!(row["name"].as_str().unwrap().contains("TemplateAlias"));
        assert!(row["uri_template"].as_str().unwrap().contains("/aliases"));
    }
}

#[test]
fn test_operations_filter_without_match_prints_message() {
    quicksight_cmd()
        .args(["operations", "--filter", "NoSuchThing"])
        .assert()
        .success()
        .stdout("No operations found.\n");
}

#[test]
fn test_catalog_ignores_invalid_environment() {
    quicksight_cmd()
        .env("QUICKSIGHT_ACCOUNT_ID", "not-an-account")
        .arg("enums")
        .assert()
        .success()
        .stdout(predicate::str::contains("DataSourceType"));
}

#[test]
fn test_enums_single_domain() {
    quicksight_cmd()
        .args(["enums", "ingestionstatus"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("IngestionStatus ("))
        .stdout(predicate::str::contains("  COMPLETED\n"));
}

#[test]
fn test_enums_yaml_output() {
    let output = quicksight_cmd()
        .args(["-o", "yaml", "enums", "UserRole"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).unwrap();
    assert!(text.contains("name: UserRole"), "{text}");
    assert!(text.contains("- ADMIN"), "{text}");
}

#[test]
fn test_unknown_enum_domain_exits_4() {
    quicksight_cmd()
        .args(["enums", "Colour"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown enum domain: Colour"));
}

#[test]
fn test_invalid_output_format_exits_1() {
    quicksight_cmd()
        .args(["-o", "xml", "operations"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid output format: xml"));
}
