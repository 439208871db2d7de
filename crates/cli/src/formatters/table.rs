//! Table formatter implementation.
//!
//! Responsibilities:
//! - Format output types as aligned, human-readable tables and summaries.
//!
//! Does NOT handle:
//! - Other output formats.

use anyhow::Result;
use quicksight_config::Config;

use crate::formatters::common::DEFAULT_MISSING_VALUE;
use crate::formatters::{
    EnumDomainOutput, Formatter, OperationRow, RenderOutput, ValidationOutput,
};

/// Table formatter.
pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn format_operations(&self, operations: &[OperationRow]) -> Result<String> {
        let mut output = String::new();

        if operations.is_empty() {
            output.push_str("No operations found.\n");
            return Ok(output);
        }

        output.push_str(&format!(
            "{:<34} {:<7} {:<70} {}\n",
            "NAME", "METHOD", "URI TEMPLATE", "QUERY"
        ));
        output.push_str(&format!(
            "{:<34} {:<7} {:<70} {}\n",
            "====", "======", "============", "====="
        ));

        for op in operations {
            let query = if op.query.is_empty() {
                DEFAULT_MISSING_VALUE.to_string()
            } else {
                op.query.join(", ")
            };
            output.push_str(&format!(
                "{:<34} {:<7} {:<70} {}\n",
                op.name,
                op.method.as_str(),
                op.uri_template,
                query
            ));
        }

        Ok(output)
    }

    fn format_enum_domains(&self, domains: &[EnumDomainOutput]) -> Result<String> {
        let mut output = String::new();

        match domains {
            [] => output.push_str("No enum domains found.\n"),
            [domain] => {
                output.push_str(&format!(
                    "{} ({} values)\n",
                    domain.name,
                    domain.values.len()
                ));
                for value in &domain.values {
                    output.push_str(&format!("  {}\n", value));
                }
            }
            _ => {
                output.push_str(&format!("{:<28} {}\n", "NAME", "VALUES"));
                output.push_str(&format!("{:<28} {}\n", "====", "======"));
                for domain in domains {
                    output.push_str(&format!("{:<28} {}\n", domain.name, domain.values.len()));
                }
            }
        }

        Ok(output)
    }

    fn format_validation(&self, result: &ValidationOutput) -> Result<String> {
        let mut output = String::new();

        if result.valid {
            output.push_str(&format!(
                "✓ {} request is valid ({} enums)\n",
                result.operation, result.enum_policy
            ));
            return Ok(output);
        }

        output.push_str(&format!(
            "✗ {} request has {} violation(s) ({} enums)\n\nViolations:\n",
            result.operation,
            result.violations.len(),
            result.enum_policy
        ));
        for (i, violation) in result.violations.iter().enumerate() {
            output.push_str(&format!("  {}. {}\n", i + 1, violation));
        }

        Ok(output)
    }

    fn format_render(&self, result: &RenderOutput) -> Result<String> {
        let mut output = String::new();

        output.push_str(&format!("{}\n\n", result.rendered));
        output.push_str(&format!("Method: {}\n", result.method));
        output.push_str(&format!("URL:    {}\n", result.url));
        let body = match &result.body {
            Some(body) => serde_json::to_string(body)?,
            None => DEFAULT_MISSING_VALUE.to_string(),
        };
        output.push_str(&format!("Body:   {}\n", body));

        Ok(output)
    }

    fn format_config(&self, config: &Config) -> Result<String> {
        let mut output = String::new();

        output.push_str(&format!("Region:      {}\n", config.region));
        output.push_str(&format!("Endpoint:    {}\n", config.endpoint));
        output.push_str(&format!(
            "Account ID:  {}\n",
            config.account_id.as_deref().unwrap_or(DEFAULT_MISSING_VALUE)
        ));
        output.push_str(&format!("Namespace:   {}\n", config.namespace));
        output.push_str(&format!("Enum policy: {}\n", config.enum_policy));

        Ok(output)
    }
}
