//! Render command implementation.
//!
//! Responsibilities:
//! - Parse a JSON or YAML request document for a named operation.
//! - Print its `{Field: value}` rendering and resolved HTTP method and URL.
//!
//! Does NOT handle:
//! - Validation (see the `validate` command); rendering never rejects values.
//! - Sending the request.
//!
//! Invariants:
//! - Password members in the printed body are redacted.

use std::str::FromStr;

use anyhow::Result;
use quicksight_client::OperationKind;
use quicksight_config::Config;
use serde_json::Value;
use tracing::info;

use crate::commands::{apply_config_defaults, read_document};
use crate::formatters::{OutputFormat, RenderOutput, get_formatter, output_result};

const SECRET_MEMBERS: &[&str] = &["Password"];
const REDACTED: &str = "<redacted>";

/// Replace secret members anywhere in `value`.
fn redact_secrets(value: &mut Value) {
    match value {
        Value::Object(members) => {
            for (name, member) in members.iter_mut() {
                if SECRET_MEMBERS.contains(&name.as_str()) {
                    *member = Value::from(REDACTED);
                } else {
                    redact_secrets(member);
                }
            }
        }
        Value::Array(items) => items.iter_mut().for_each(redact_secrets),
        _ => {}
    }
}

/// Render `document` as a request to `kind` resolved against `config`.
pub fn render(kind: OperationKind, mut document: Value, config: &Config) -> Result<RenderOutput> {
    apply_config_defaults(kind, &mut document, config);

    let request = kind.request_from_json(document)?;
    let binding = request.http_binding()?;
    let url = binding.url(&config.endpoint)?;

    let mut body = binding.body;
    if let Some(ref mut body) = body {
        redact_secrets(body);
    }

    Ok(RenderOutput {
        operation: kind.name(),
        rendered: request.rendered(),
        method: binding.method,
        url: url.to_string(),
        body,
    })
}

pub fn run(operation: &str, input: &str, output_format: &str, config: &Config) -> Result<()> {
    let format = OutputFormat::from_str(output_format)?;
    let kind = OperationKind::from_name(operation)?;
    info!(operation = %kind, endpoint = %config.endpoint, "Rendering request");

    let result = render(kind, read_document(input)?, config)?;

    let formatter = get_formatter(format);
    output_result(&formatter.format_render(&result)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quicksight_client::HttpMethod;
    use quicksight_config::ConfigLoader;
    use serde_json::json;

    fn config() -> Config {
        ConfigLoader::new()
            .with_region("eu-west-1")
            .with_account_id("111122223333")
            .build()
            .unwrap()
    }

    #[test]
    fn test_render_resolves_url_with_configured_account() {
        let result = render(
            OperationKind::DescribeDashboard,
            json!({"DashboardId": "sales", "VersionNumber": 2}),
            &config(),
        )
        .unwrap();
        assert_eq!(result.method, HttpMethod::Get);
        assert_eq!(
            result.url,
            "https://quicksight.eu-west-1.amazonaws.com/accounts/111122223333/dashboards/sales?version-number=2"
        );
        assert_eq!(result.body, None);
        assert!(result.rendered.contains("DashboardId: sales"), "{}", result.rendered);
    }

    #[test]
    fn test_render_redacts_passwords_in_body() {
        let result = render(
            OperationKind::UpdateDataSource,
            json!({
                "DataSourceId": "warehouse",
                "Name": "Warehouse",
                "Credentials": {"CredentialPair": {"Username": "etl", "Password": "hunter22"}}
            }),
            &config(),
        )
        .unwrap();
        let body = result.body.unwrap();
        assert_eq!(body["Credentials"]["CredentialPair"]["Password"], REDACTED);
        assert_eq!(body["Credentials"]["CredentialPair"]["Username"], "etl");
        assert!(!result.rendered.contains("hunter22"));
    }

    #[test]
    fn test_render_missing_path_member_fails() {
        let err = render(OperationKind::DescribeDashboard, json!({}), &config()).unwrap_err();
        assert!(err.to_string().contains("DashboardId"), "{err}");
    }
}
