//! Common utilities for formatters.
//!
//! Responsibilities:
//! - Standardized missing value handling.
//! - Writing formatted output to stdout.
//!
//! Does NOT handle:
//! - Format-specific logic (lives in respective formatter modules).

use anyhow::Result;

/// String shown in tables for missing or empty values.
pub const DEFAULT_MISSING_VALUE: &str = "-";

/// Print formatted output, adding a trailing newline when the formatter omitted one.
pub fn output_result(output: &str) -> Result<()> {
    if output.is_empty() || output.ends_with('\n') {
        print!("{}", output);
    } else {
        println!("{}", output);
    }
    Ok(())
}
