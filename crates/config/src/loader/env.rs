//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read the `QUICKSIGHT_*` variables and apply them to a `ConfigLoader`.
//! - Provide a helper for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Building the final Config (see builder.rs).
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//!
//! Invariants:
//! - Values already set through builder methods are never overwritten.
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::types::EnumPolicy;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if loader.region().is_none()
        && let Some(region) = env_var_or_none("QUICKSIGHT_REGION")
    {
        loader.set_region(Some(region));
    }
    if loader.endpoint().is_none()
        && let Some(endpoint) = env_var_or_none("QUICKSIGHT_ENDPOINT")
    {
        loader.set_endpoint(Some(endpoint));
    }
    if loader.account_id().is_none()
        && let Some(account_id) = env_var_or_none("QUICKSIGHT_ACCOUNT_ID")
    {
        loader.set_account_id(Some(account_id));
    }
    if loader.namespace().is_none()
        && let Some(namespace) = env_var_or_none("QUICKSIGHT_NAMESPACE")
    {
        loader.set_namespace(Some(namespace));
    }
    if loader.enum_policy().is_none()
        && let Some(policy) = env_var_or_none("QUICKSIGHT_ENUM_POLICY")
    {
        let policy: EnumPolicy = policy.parse().map_err(|_| ConfigError::InvalidValue {
            var: "QUICKSIGHT_ENUM_POLICY".to_string(),
            message: format!("must be lenient or strict (got {policy})"),
        })?;
        loader.set_enum_policy(Some(policy));
    }
    Ok(())
}
