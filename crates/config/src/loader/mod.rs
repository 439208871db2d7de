//! Configuration loader for `.env` files, environment variables, and overrides.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Enforce `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//! - Validate the merged values into a `Config`.
//!
//! Does NOT handle:
//! - Persisting configuration anywhere.
//! - Credentials or request signing.
//!
//! Invariants / Assumptions:
//! - Builder overrides take precedence over environment variables, which take
//!   precedence over built-in defaults.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

mod builder;
mod env;
mod error;

pub use builder::ConfigLoader;
pub use env::env_var_or_none;
pub use error::ConfigError;

#[cfg(test)]
mod tests;
