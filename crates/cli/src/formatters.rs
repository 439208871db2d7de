//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Provide multiple output formats: Table, JSON, and YAML.
//! - Define the output structures every command produces.
//!
//! Does NOT handle:
//! - Direct printing to stdout (returns formatted strings).
//!
//! Invariants:
//! - Machine-readable formats (JSON, YAML) produce valid documents even when empty.
//! - Human-facing tables print a message instead of an empty table.
//! - Missing values render as `-` in tables and `null` in JSON/YAML.

use std::str::FromStr;

use anyhow::Result;
use quicksight_client::{ConstraintViolation, EnumPolicy, HttpMethod};
use quicksight_config::Config;
use serde::Serialize;

mod common;
mod json;
mod table;
mod yaml;

pub use common::{DEFAULT_MISSING_VALUE, output_result};
pub use json::JsonFormatter;
pub use table::TableFormatter;
pub use yaml::YamlFormatter;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            _ => anyhow::bail!("Invalid output format: {}. Valid options: table, json, yaml", s),
        }
    }
}

/// One row of the operation catalog.
#[derive(Debug, Clone, Serialize)]
pub struct OperationRow {
    pub name: &'static str,
    pub method: HttpMethod,
    pub uri_template: &'static str,
    /// `query-name=Member` pairs.
    pub query: Vec<String>,
}

/// An enumeration domain and its documented values.
#[derive(Debug, Clone, Serialize)]
pub struct EnumDomainOutput {
    pub name: &'static str,
    pub values: Vec<&'static str>,
}

/// Result of validating one request document.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationOutput {
    pub operation: &'static str,
    pub enum_policy: EnumPolicy,
    pub valid: bool,
    pub violations: Vec<ConstraintViolation>,
}

/// A request rendered for display together with its resolved HTTP binding.
#[derive(Debug, Clone, Serialize)]
pub struct RenderOutput {
    pub operation: &'static str,
    pub rendered: String,
    pub method: HttpMethod,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<serde_json::Value>,
}

/// Formatter trait for different output types.
pub trait Formatter {
    /// Format the operation catalog.
    fn format_operations(&self, operations: &[OperationRow]) -> Result<String>;

    /// Format enumeration domains.
    fn format_enum_domains(&self, domains: &[EnumDomainOutput]) -> Result<String>;

    /// Format a validation result.
    fn format_validation(&self, result: &ValidationOutput) -> Result<String>;

    /// Format a rendered request.
    fn format_render(&self, result: &RenderOutput) -> Result<String>;

    /// Format the resolved configuration.
    fn format_config(&self, config: &Config) -> Result<String>;
}

/// Get a formatter for the specified output format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Table => Box::new(TableFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Yaml => Box::new(YamlFormatter),
    }
}
