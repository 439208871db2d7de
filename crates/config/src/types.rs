//! Resolved configuration types.
//!
//! Responsibilities:
//! - Define the `Config` produced by `ConfigLoader::build()`.
//! - Define `EnumPolicy`, the switch between lenient and strict handling of
//!   enumeration values outside their documented domain.
//!
//! Does NOT handle:
//! - Reading the environment or `.env` files (see `loader` module).
//! - Applying the enum policy to model values (see the client crate's validation).
//!
//! Invariants:
//! - A built `Config` always carries an absolute http(s) endpoint with a host.
//! - `account_id`, when present, is exactly twelve decimal digits.
//! - `EnumPolicy` parses case-insensitively and serializes in lowercase.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::loader::ConfigError;

/// How enumeration values outside the documented domain are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnumPolicy {
    /// Unknown values are kept verbatim and pass validation.
    #[default]
    Lenient,
    /// Unknown values are reported as validation violations.
    Strict,
}

impl EnumPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lenient => "lenient",
            Self::Strict => "strict",
        }
    }
}

impl fmt::Display for EnumPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EnumPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(Self::Lenient),
            "strict" => Ok(Self::Strict),
            other => Err(ConfigError::InvalidValue {
                var: "enum_policy".to_string(),
                message: format!("must be lenient or strict (got {other})"),
            }),
        }
    }
}

/// Settings shared by every component that builds or checks requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// AWS region, e.g. `us-east-1`.
    pub region: String,
    /// Base URL that request paths are resolved against.
    pub endpoint: Url,
    /// Default account for requests that omit `AwsAccountId`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    /// Default namespace for identity operations.
    pub namespace: String,
    #[serde(default)]
    pub enum_policy: EnumPolicy,
}

impl Config {
    /// Whether unknown enumeration values should be rejected.
    pub fn is_strict(&self) -> bool {
        self.enum_policy == EnumPolicy::Strict
    }
}
