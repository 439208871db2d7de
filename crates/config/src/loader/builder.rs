//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Build and validate the final `Config`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables, regardless of
//!   call order.
//! - An explicit endpoint wins over the one derived from the region.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use url::Url;

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::{
    ACCOUNT_ID_LEN, DEFAULT_NAMESPACE, DEFAULT_REGION, MAX_NAMESPACE_LEN, default_endpoint,
};
use crate::types::{Config, EnumPolicy};

/// Configuration loader that builds config from environment variables and overrides.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    region: Option<String>,
    endpoint: Option<String>,
    account_id: Option<String>,
    namespace: Option<String>,
    enum_policy: Option<EnumPolicy>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    ///
    /// SAFETY: Error messages never include raw .env line contents to prevent secret leakage.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "loaded .env file");
                Ok(self)
            }
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read configuration from environment variables.
    ///
    /// Values already set through builder methods are kept.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the region.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set the endpoint URL, replacing the regional default.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the default account id.
    pub fn with_account_id(mut self, account_id: impl Into<String>) -> Self {
        self.account_id = Some(account_id.into());
        self
    }

    /// Set the default namespace.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Set how unknown enumeration values are treated.
    pub fn with_enum_policy(mut self, policy: EnumPolicy) -> Self {
        self.enum_policy = Some(policy);
        self
    }

    /// Build the final configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        let region = validate_region(self.region.as_deref().unwrap_or(DEFAULT_REGION))?;

        let endpoint = match self.endpoint.as_deref() {
            Some(raw) => validate_endpoint(raw)?,
            None => validate_endpoint(&default_endpoint(&region))?,
        };

        let account_id = self
            .account_id
            .as_deref()
            .map(validate_account_id)
            .transpose()?;

        let namespace =
            validate_namespace(self.namespace.as_deref().unwrap_or(DEFAULT_NAMESPACE))?;

        let config = Config {
            region,
            endpoint,
            account_id,
            namespace,
            enum_policy: self.enum_policy.unwrap_or_default(),
        };
        tracing::debug!(
            region = %config.region,
            endpoint = %config.endpoint,
            enum_policy = %config.enum_policy,
            "built configuration"
        );
        Ok(config)
    }

    // Internal accessor methods for use by other loader modules

    pub(crate) fn region(&self) -> Option<&String> {
        self.region.as_ref()
    }

    pub(crate) fn endpoint(&self) -> Option<&String> {
        self.endpoint.as_ref()
    }

    pub(crate) fn account_id(&self) -> Option<&String> {
        self.account_id.as_ref()
    }

    pub(crate) fn namespace(&self) -> Option<&String> {
        self.namespace.as_ref()
    }

    pub(crate) fn enum_policy(&self) -> Option<EnumPolicy> {
        self.enum_policy
    }

    pub(crate) fn set_region(&mut self, region: Option<String>) {
        self.region = region;
    }

    pub(crate) fn set_endpoint(&mut self, endpoint: Option<String>) {
        self.endpoint = endpoint;
    }

    pub(crate) fn set_account_id(&mut self, account_id: Option<String>) {
        self.account_id = account_id;
    }

    pub(crate) fn set_namespace(&mut self, namespace: Option<String>) {
        self.namespace = namespace;
    }

    pub(crate) fn set_enum_policy(&mut self, policy: Option<EnumPolicy>) {
        self.enum_policy = policy;
    }
}

fn validate_region(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    let well_formed = !trimmed.is_empty()
        && !trimmed.starts_with('-')
        && !trimmed.ends_with('-')
        && trimmed
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if !well_formed {
        return Err(ConfigError::InvalidValue {
            var: "region".into(),
            message: format!(
                "must be lowercase letters, digits, and hyphens (e.g. us-east-1), got: {trimmed:?}"
            ),
        });
    }
    Ok(trimmed.to_string())
}

fn validate_endpoint(raw: &str) -> Result<Url, ConfigError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(ConfigError::InvalidEndpoint {
            message: "must not be empty".into(),
        });
    }

    let parsed = Url::parse(trimmed).map_err(|e| ConfigError::InvalidEndpoint {
        message: format!(
            "must be an absolute http(s) URL with a host (e.g. https://quicksight.us-east-1.amazonaws.com): {e}"
        ),
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ConfigError::InvalidEndpoint {
            message: format!("scheme must be http or https, got: {scheme}"),
        });
    }

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidEndpoint {
            message: "host is required".into(),
        });
    }

    Ok(parsed)
}

fn validate_account_id(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.len() != ACCOUNT_ID_LEN || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(ConfigError::InvalidAccountId {
            value: trimmed.to_string(),
        });
    }
    Ok(trimmed.to_string())
}

fn validate_namespace(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    let well_formed = !trimmed.is_empty()
        && trimmed.len() <= MAX_NAMESPACE_LEN
        && trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
    if !well_formed {
        return Err(ConfigError::InvalidValue {
            var: "namespace".into(),
            message: format!(
                "must be 1-{MAX_NAMESPACE_LEN} letters, digits, '.', '_' or '-', got: {trimmed:?}"
            ),
        });
    }
    Ok(trimmed.to_string())
}
