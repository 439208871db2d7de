//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not build configuration (see `main()`).

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "quicksight-cli")]
#[command(about = "QuickSight CLI - Inspect, validate, and render QuickSight API requests", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  quicksight-cli operations --filter DataSet\n  quicksight-cli enums DataSourceType\n  quicksight-cli validate CreateDataSource request.json --strict\n  cat request.yaml | quicksight-cli -o json render DescribeDashboard -\n"
)]
pub struct Cli {
    /// AWS region used to derive the endpoint (e.g., us-east-1)
    #[arg(long, global = true)]
    pub region: Option<String>,

    /// Endpoint URL, replacing the regional default
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Account id filled into requests that omit AwsAccountId
    #[arg(long, global = true)]
    pub account_id: Option<String>,

    /// Namespace filled into requests that omit Namespace
    #[arg(long, global = true)]
    pub namespace: Option<String>,

    /// Output format (table, json, yaml)
    #[arg(short, long, global = true, default_value = "table")]
    pub output: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List supported operations with their HTTP method and URI template
    Operations {
        /// Only show operations whose name contains this text (case-insensitive)
        #[arg(short, long)]
        filter: Option<String>,
    },

    /// List enumeration domains, or the values of one domain
    Enums {
        /// Domain name (e.g., DataSourceType)
        name: Option<String>,
    },

    /// Validate a JSON or YAML request document against an operation's constraints
    Validate {
        /// Operation name (e.g., CreateDataSource)
        operation: String,

        /// Request document path, or '-' for stdin
        input: String,

        /// Reject enumeration values outside their documented domain
        #[arg(long)]
        strict: bool,
    },

    /// Render a request and resolve its HTTP method and URL
    Render {
        /// Operation name (e.g., DescribeDashboard)
        operation: String,

        /// Request document path, or '-' for stdin
        input: String,
    },

    /// Show the resolved configuration
    Config,
}
