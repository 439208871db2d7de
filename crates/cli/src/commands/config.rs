//! Config command implementation.
//!
//! Responsibilities:
//! - Show the configuration resolved from flags, environment, and defaults.
//!
//! Does NOT handle:
//! - Loading or validating configuration (see `quicksight_config::ConfigLoader`).

use std::str::FromStr;

use anyhow::Result;
use quicksight_config::Config;

use crate::formatters::{OutputFormat, get_formatter, output_result};

pub fn run(output_format: &str, config: &Config) -> Result<()> {
    let format = OutputFormat::from_str(output_format)?;
    let formatter = get_formatter(format);
    output_result(&formatter.format_config(config)?)
}
