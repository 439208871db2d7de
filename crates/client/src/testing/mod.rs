//! Testing utilities for QuickSight model tests.
//!
//! This module provides helpers for loading JSON fixtures and proptest
//! strategies for building arbitrary model values.
//! Available when running tests or when the `test-utils` feature is enabled.
//!
//! # Example
//! ```ignore
//! use quicksight_client::testing::load_fixture;
//! use quicksight_client::models::DescribeDataSourceResult;
//!
//! let result: DescribeDataSourceResult =
//!     serde_json::from_value(load_fixture("data_sources/describe_athena.json")).unwrap();
//! ```

pub mod strategies;

use std::path::Path;

/// Load a JSON fixture file from the fixtures directory.
///
/// # Arguments
/// * `fixture_path` - Relative path within the fixtures directory (e.g., "data_sets/create_request.json")
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
pub fn load_fixture(fixture_path: &str) -> serde_json::Value {
    let full_path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(fixture_path);
    let content = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()));
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}

/// Load a fixture and deserialize it into `T`.
///
/// # Panics
/// If the fixture is missing or does not match `T`.
pub fn load_model<T: serde::de::DeserializeOwned>(fixture_path: &str) -> T {
    serde_json::from_value(load_fixture(fixture_path))
        .unwrap_or_else(|e| panic!("Fixture {fixture_path} does not match model: {e}"))
}
