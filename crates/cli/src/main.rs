//! QuickSight CLI - inspect, validate, and render QuickSight API requests.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Resolve configuration for commands that bind or validate requests.
//! - Format and display results in various output formats (table, JSON, YAML).
//!
//! Does NOT handle:
//! - Request models, validation rules, or HTTP binding (see `crates/client`).
//! - Sending requests to the service.
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - Logs go to stderr so stdout stays machine readable.
//! - Global options (like `--region`) are applied consistently across all subcommands.

mod args;
mod commands;
mod dispatch;
mod error;
mod formatters;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use quicksight_config::{Config, ConfigLoader};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    // Catalog commands work without any configuration
    let needs_config = !matches!(
        cli.command,
        args::Commands::Operations { .. } | args::Commands::Enums { .. }
    );

    let config = if needs_config {
        match load_config(&cli) {
            Ok(config) => Some(config),
            Err(e) => {
                eprintln!("Failed to build configuration: {:#}", e);
                std::process::exit(ExitCode::GeneralError.as_i32());
            }
        }
    } else {
        None
    };

    let exit_code = match run_command(cli, config) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

/// Merge CLI overrides over environment variables over defaults.
fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut loader = ConfigLoader::new();

    if let Some(ref region) = cli.region {
        loader = loader.with_region(region.clone());
    }
    if let Some(ref endpoint) = cli.endpoint {
        loader = loader.with_endpoint(endpoint.clone());
    }
    if let Some(ref account_id) = cli.account_id {
        loader = loader.with_account_id(account_id.clone());
    }
    if let Some(ref namespace) = cli.namespace {
        loader = loader.with_namespace(namespace.clone());
    }

    Ok(loader.from_env()?.build()?)
}
