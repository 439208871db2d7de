//! Shared test utilities for quicksight-cli integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Provide small request fixtures written to temporary files.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.
//! - `QUICKSIGHT_ACCOUNT_ID` is cleared so requests must name their account
//!   unless a test sets it.

#![allow(dead_code)]

use std::io::Write;

use assert_cmd::Command;
use tempfile::NamedTempFile;

/// Returns a hermetic `quicksight-cli` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `QUICKSIGHT_*` variables are cleared to ensure no leakage from the host.
pub fn quicksight_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("quicksight-cli");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    // Clear potential host leakage
    cmd.env_remove("QUICKSIGHT_REGION")
        .env_remove("QUICKSIGHT_ENDPOINT")
        .env_remove("QUICKSIGHT_ACCOUNT_ID")
        .env_remove("QUICKSIGHT_NAMESPACE")
        .env_remove("QUICKSIGHT_ENUM_POLICY")
        .env_remove("RUST_LOG");

    cmd
}

/// Write `contents` to a temporary file with the given extension.
pub fn request_file(contents: &str, extension: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(&format!(".{extension}"))
        .tempfile()
        .expect("create temp request file");
    file.write_all(contents.as_bytes())
        .expect("write temp request file");
    file
}

pub const VALID_DATA_SET_LIST: &str = r#"{"AwsAccountId": "111122223333", "MaxResults": 50}"#;
