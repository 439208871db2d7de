//! Common test utilities for integration tests.
//!
//! This module re-exports the fixture loaders and frequently used types so
//! test files can `use common::*;`.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - All fixture files must be valid JSON

#[allow(unused_imports)]
pub use quicksight_client::testing::{load_fixture, load_model};

#[allow(unused_imports)]
pub use quicksight_client::validation::{Validate, ValidationPolicy, ViolationKind};

/// Account id used throughout the fixtures.
#[allow(dead_code)]
pub const ACCOUNT_ID: &str = "111122223333";
