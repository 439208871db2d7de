//! JSON formatter implementation.
//!
//! Responsibilities:
//! - Format all output types as pretty-printed JSON.
//!
//! Does NOT handle:
//! - Other output formats.

use anyhow::Result;
use quicksight_config::Config;

use crate::formatters::{
    EnumDomainOutput, Formatter, OperationRow, RenderOutput, ValidationOutput,
};

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_operations(&self, operations: &[OperationRow]) -> Result<String> {
        Ok(serde_json::to_string_pretty(operations)?)
    }

    fn format_enum_domains(&self, domains: &[EnumDomainOutput]) -> Result<String> {
        Ok(serde_json::to_string_pretty(domains)?)
    }

    fn format_validation(&self, result: &ValidationOutput) -> Result<String> {
        Ok(serde_json::to_string_pretty(result)?)
    }

    fn format_render(&self, result: &RenderOutput) -> Result<String> {
        Ok(serde_json::to_string_pretty(result)?)
    }

    fn format_config(&self, config: &Config) -> Result<String> {
        Ok(serde_json::to_string_pretty(config)?)
    }
}
