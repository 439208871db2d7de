//! Integration tests for configuration loading as the CLI drives it.
//!
//! These tests verify end-to-end config loading behavior through the public
//! API: the builder chain, precedence over the environment, and error text.

use quicksight_config::{ConfigError, ConfigLoader, EnumPolicy, env_var_or_none};
use serial_test::serial;

/// Builder values (CLI flags) win over environment variables, which win over defaults.
#[test]
#[serial]
fn test_config_loader_precedence_chain() {
    temp_env::with_vars(
        [
            ("DOTENV_DISABLED", Some("1")),
            ("QUICKSIGHT_REGION", Some("eu-west-1")),
            ("QUICKSIGHT_ACCOUNT_ID", Some("111122223333")),
            ("QUICKSIGHT_ENDPOINT", None),
            ("QUICKSIGHT_NAMESPACE", None),
            ("QUICKSIGHT_ENUM_POLICY", None),
        ],
        || {
            let config = ConfigLoader::new()
                .load_dotenv()
                .unwrap()
                .with_account_id("444455556666")
                .from_env()
                .unwrap()
                .build()
                .expect("should build");

            assert_eq!(config.region, "eu-west-1");
            assert_eq!(config.account_id.as_deref(), Some("444455556666"));
            assert_eq!(config.namespace, "default");
            assert_eq!(config.enum_policy, EnumPolicy::Lenient);
        },
    );
}

#[test]
#[serial]
fn test_env_var_or_none_exported() {
    temp_env::with_var("QUICKSIGHT_REGION", Some(" us-west-2 "), || {
        assert_eq!(
            env_var_or_none("QUICKSIGHT_REGION").as_deref(),
            Some("us-west-2")
        );
    });
}

#[test]
fn test_error_messages_are_actionable() {
    let err = ConfigLoader::new()
        .with_account_id("1234")
        .build()
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid account id '1234': must be exactly 12 digits"
    );

    let err = ConfigLoader::new()
        .with_endpoint("file:///tmp/socket")
        .build()
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEndpoint { .. }));
    assert!(err.to_string().starts_with("Invalid endpoint: "));
}

#[test]
fn test_enum_policy_round_trips_through_display() {
    for policy in [EnumPolicy::Lenient, EnumPolicy::Strict] {
        assert_eq!(policy.to_string().parse::<EnumPolicy>().unwrap(), policy);
    }
}
