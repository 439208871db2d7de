//! Tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test builder methods and defaults.
//! - Test environment variable handling and precedence.
//! - Test `.env` loading and the `DOTENV_DISABLED` gate.
//! - Test validation of region, endpoint, account id, and namespace.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;

pub mod basic_tests;
pub mod dotenv_tests;
pub mod validation_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Every variable the loader reads.
pub const QUICKSIGHT_VARS: [&str; 5] = [
    "QUICKSIGHT_REGION",
    "QUICKSIGHT_ENDPOINT",
    "QUICKSIGHT_ACCOUNT_ID",
    "QUICKSIGHT_NAMESPACE",
    "QUICKSIGHT_ENUM_POLICY",
];

/// Clear every loader variable, then apply `overrides`, so the host
/// environment can't leak into a test.
pub fn isolated_vars<'a>(overrides: &[(&'a str, Option<&'a str>)]) -> Vec<(&'a str, Option<&'a str>)> {
    let mut vars: Vec<(&str, Option<&str>)> = QUICKSIGHT_VARS
        .iter()
        .filter(|name| !overrides.iter().any(|(key, _)| key == *name))
        .map(|name| (*name, None))
        .collect();
    vars.extend_from_slice(overrides);
    vars
}
