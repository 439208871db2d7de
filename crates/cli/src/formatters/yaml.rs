//! YAML formatter implementation.
//!
//! Responsibilities:
//! - Format all output types as YAML documents.
//!
//! Does NOT handle:
//! - Other output formats.

use anyhow::Result;
use quicksight_config::Config;

use crate::formatters::{
    EnumDomainOutput, Formatter, OperationRow, RenderOutput, ValidationOutput,
};

/// YAML formatter.
pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn format_operations(&self, operations: &[OperationRow]) -> Result<String> {
        Ok(serde_yaml::to_string(operations)?)
    }

    fn format_enum_domains(&self, domains: &[EnumDomainOutput]) -> Result<String> {
        Ok(serde_yaml::to_string(domains)?)
    }

    fn format_validation(&self, result: &ValidationOutput) -> Result<String> {
        Ok(serde_yaml::to_string(result)?)
    }

    fn format_render(&self, result: &RenderOutput) -> Result<String> {
        Ok(serde_yaml::to_string(result)?)
    }

    fn format_config(&self, config: &Config) -> Result<String> {
        Ok(serde_yaml::to_string(config)?)
    }
}
