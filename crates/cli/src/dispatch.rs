//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main()`).
//!
//! Invariants:
//! - Commands that bind or validate requests always receive a configuration.

use anyhow::{Context, Result};
use quicksight_config::Config;

use crate::args::{Cli, Commands};
use crate::commands;

/// Dispatch CLI commands to their respective handlers.
pub(crate) fn run_command(cli: Cli, config: Option<Config>) -> Result<()> {
    match cli.command {
        Commands::Operations { filter } => {
            commands::operations::run(filter.as_deref(), &cli.output)?;
        }
        Commands::Enums { name } => {
            commands::enums::run(name.as_deref(), &cli.output)?;
        }
        Commands::Validate {
            operation,
            input,
            strict,
        } => {
            let config = config.context("configuration was not loaded")?;
            commands::validate::run(&operation, &input, strict, &cli.output, &config)?;
        }
        Commands::Render { operation, input } => {
            let config = config.context("configuration was not loaded")?;
            commands::render::run(&operation, &input, &cli.output, &config)?;
        }
        Commands::Config => {
            let config = config.context("configuration was not loaded")?;
            commands::config::run(&cli.output, &config)?;
        }
    }
    Ok(())
}
