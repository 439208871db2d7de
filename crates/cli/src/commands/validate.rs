//! Validate command implementation.
//!
//! Responsibilities:
//! - Parse a JSON or YAML request document for a named operation.
//! - Check it against the operation's constraints under the configured enum policy.
//! - Report every violation and fail with a validation exit code when any exist.
//!
//! Does NOT handle:
//! - Constraint rules (see `quicksight_client::validation`).
//!
//! Invariants:
//! - `--strict` always wins over the configured enum policy.
//! - The report is printed to stdout before the command fails.

use std::str::FromStr;

use anyhow::Result;
use quicksight_client::{ModelError, OperationKind, ValidationPolicy};
use quicksight_config::Config;
use tracing::info;

use crate::commands::{apply_config_defaults, read_document};
use crate::formatters::{OutputFormat, ValidationOutput, get_formatter, output_result};

pub fn run(
    operation: &str,
    input: &str,
    strict: bool,
    output_format: &str,
    config: &Config,
) -> Result<()> {
    let format = OutputFormat::from_str(output_format)?;
    let kind = OperationKind::from_name(operation)?;

    let mut document = read_document(input)?;
    apply_config_defaults(kind, &mut document, config);

    let policy = if strict {
        ValidationPolicy::strict()
    } else {
        ValidationPolicy::from(config)
    };
    info!(operation = %kind, enum_policy = %policy.enums, "Validating request");

    let report = kind.validate_json(document, &policy)?;
    let result = ValidationOutput {
        operation: kind.name(),
        enum_policy: policy.enums,
        valid: report.is_valid(),
        violations: report.violations.clone(),
    };

    let formatter = get_formatter(format);
    output_result(&formatter.format_validation(&result)?)?;

    report.into_result()?;
    Ok(())
}
