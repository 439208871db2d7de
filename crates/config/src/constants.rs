//! Centralized constants for the QuickSight model SDK workspace.
//!
//! Default values and bounds shared by the loader and the CLI.

// =============================================================================
// Connection Defaults
// =============================================================================

/// Region used when neither the environment nor the caller names one.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Namespace used by identity operations when none is configured.
pub const DEFAULT_NAMESPACE: &str = "default";

/// Host prefix of the regional QuickSight endpoint.
pub const ENDPOINT_HOST_PREFIX: &str = "quicksight";

/// DNS suffix of the regional QuickSight endpoint.
pub const ENDPOINT_DNS_SUFFIX: &str = "amazonaws.com";

// =============================================================================
// Identifier Bounds
// =============================================================================

/// AWS account ids are exactly this many decimal digits.
pub const ACCOUNT_ID_LEN: usize = 12;

/// Maximum length of a QuickSight namespace name.
pub const MAX_NAMESPACE_LEN: usize = 64;

/// Build the default endpoint URL for a region.
pub fn default_endpoint(region: &str) -> String {
    format!("https://{ENDPOINT_HOST_PREFIX}.{region}.{ENDPOINT_DNS_SUFFIX}")
}
