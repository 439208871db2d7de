//! CLI command implementations.
//!
//! Shared helpers for commands that take a request document: reading it from
//! a file or stdin, and filling account and namespace defaults from
//! configuration.

pub mod config;
pub mod enums;
pub mod operations;
pub mod render;
pub mod validate;

use std::io::Read;

use anyhow::{Context, Result};
use quicksight_client::OperationKind;
use quicksight_config::Config;
use serde_json::Value;

use crate::error::InvalidDocument;

/// Read a request document from `input` (a path, or `-` for stdin).
///
/// JSON is tried first; anything else is parsed as YAML.
pub fn read_document(input: &str) -> Result<Value> {
    let (source_name, text) = if input == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read request from stdin")?;
        ("stdin".to_string(), text)
    } else {
        let text = std::fs::read_to_string(input)
            .with_context(|| format!("Failed to read request file {}", input))?;
        (input.to_string(), text)
    };

    parse_document(&source_name, &text)
}

fn parse_document(source_name: &str, text: &str) -> Result<Value> {
    match serde_json::from_str::<Value>(text) {
        Ok(value) => Ok(value),
        Err(json_err) => serde_yaml::from_str::<Value>(text).map_err(|yaml_err| {
            let message = if text.trim_start().starts_with('{') {
                json_err.to_string()
            } else {
                yaml_err.to_string()
            };
            InvalidDocument {
                source_name: source_name.to_string(),
                message,
            }
            .into()
        }),
    }
}

/// Fill `AwsAccountId` and `Namespace` from configuration when the operation
/// binds them into its path and the document leaves them out.
pub fn apply_config_defaults(kind: OperationKind, document: &mut Value, config: &Config) {
    let Some(members) = document.as_object_mut() else {
        return;
    };
    let template = kind.uri_template();

    if template.contains("{AwsAccountId}")
        && !members.contains_key("AwsAccountId")
        && let Some(ref account_id) = config.account_id
    {
        tracing::debug!(operation = %kind, "using configured account id");
        members.insert("AwsAccountId".to_string(), Value::from(account_id.clone()));
    }
    if template.contains("{Namespace}") && !members.contains_key("Namespace") {
        tracing::debug!(operation = %kind, namespace = %config.namespace, "using configured namespace");
        members.insert("Namespace".to_string(), Value::from(config.namespace.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quicksight_config::ConfigLoader;
    use serde_json::json;

    #[test]
    fn test_parse_json_document() {
        let value = parse_document("doc", r#"{"DashboardId": "sales"}"#).unwrap();
        assert_eq!(value, json!({"DashboardId": "sales"}));
    }

    #[test]
    fn test_parse_yaml_document() {
        let value = parse_document("doc", "DashboardId: sales\nVersionNumber: 3\n").unwrap();
        assert_eq!(value, json!({"DashboardId": "sales", "VersionNumber": 3}));
    }

    #[test]
    fn test_broken_json_reports_json_error() {
        let err = parse_document("request.json", r#"{"DashboardId": "sales""#).unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("Cannot parse request.json"), "{message}");
        assert!(err.downcast_ref::<InvalidDocument>().is_some());
    }

    #[test]
    fn test_defaults_fill_only_missing_path_members() {
        let config = ConfigLoader::new()
            .with_account_id("111122223333")
            .with_namespace("analytics")
            .build()
            .unwrap();

        let mut document = json!({"UserName": "alice"});
        apply_config_defaults(OperationKind::DescribeUser, &mut document, &config);
        assert_eq!(document["AwsAccountId"], "111122223333");
        assert_eq!(document["Namespace"], "analytics");

        let mut document = json!({"AwsAccountId": "444455556666", "DashboardId": "sales"});
        apply_config_defaults(OperationKind::DescribeDashboard, &mut document, &config);
        assert_eq!(document["AwsAccountId"], "444455556666");
        assert!(document.get("Namespace").is_none());
    }

    #[test]
    fn test_defaults_skip_operations_without_account() {
        let config = ConfigLoader::new().with_account_id("111122223333").build().unwrap();
        let mut document = json!({"ResourceArn": "arn:x"});
        apply_config_defaults(OperationKind::ListTagsForResource, &mut document, &config);
        assert!(document.get("AwsAccountId").is_none());
    }
}
