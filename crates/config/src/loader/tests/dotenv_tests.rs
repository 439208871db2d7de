//! Tests for dotenv loading behavior.
//!
//! Responsibilities:
//! - Test that missing `.env` files are silently ignored.
//! - Test that `.env` values feed `from_env()`.
//! - Test that invalid `.env` files return errors without leaking secrets.
//! - Test that `DOTENV_DISABLED=1`/`true` skips dotenv loading.
//!
//! Invariants / Assumptions:
//! - Tests use `env_lock()` and `#[serial]` to prevent cross-test contamination.
//! - Variables set by dotenv are restored by `temp_env` when each test ends.
//! - Error messages must never contain secret values from `.env` files.

use std::fs;
use std::path::PathBuf;

use serial_test::serial;
use tempfile::TempDir;

use super::{env_lock, isolated_vars};
use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;

/// RAII guard for temporarily changing the current working directory.
struct CwdGuard {
    original_dir: PathBuf,
}

impl CwdGuard {
    fn new(temp_dir: &TempDir) -> Self {
        let original_dir = std::env::current_dir().expect("Failed to get current directory");
        std::env::set_current_dir(temp_dir.path()).expect("Failed to set current directory");
        Self { original_dir }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original_dir);
    }
}

/// Run `f` inside a fresh temp directory holding `.env` with `contents`.
fn in_dotenv_dir<F: FnOnce()>(contents: Option<&str>, dotenv_disabled: Option<&str>, f: F) {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    if let Some(contents) = contents {
        fs::write(temp_dir.path().join(".env"), contents).unwrap();
    }
    let _cwd_guard = CwdGuard::new(&temp_dir);

    temp_env::with_vars(isolated_vars(&[("DOTENV_DISABLED", dotenv_disabled)]), f);
}

#[test]
#[serial]
fn test_missing_dotenv_is_ok() {
    in_dotenv_dir(None, None, || {
        let result = ConfigLoader::new().load_dotenv();
        assert!(
            result.is_ok(),
            "Missing .env file should be silently ignored"
        );
    });
}

#[test]
#[serial]
fn test_valid_dotenv_feeds_from_env() {
    in_dotenv_dir(
        Some("QUICKSIGHT_REGION=eu-north-1\nQUICKSIGHT_ENUM_POLICY=strict\n"),
        None,
        || {
            let config = ConfigLoader::new()
                .load_dotenv()
                .unwrap()
                .from_env()
                .unwrap()
                .build()
                .unwrap();
            assert_eq!(config.region, "eu-north-1");
            assert!(config.is_strict());
        },
    );
}

#[test]
#[serial]
fn test_invalid_dotenv_returns_parse_error() {
    in_dotenv_dir(Some("INVALID_LINE_WITHOUT_EQUALS"), None, || {
        match ConfigLoader::new().load_dotenv() {
            Err(ConfigError::DotenvParse { .. }) => {}
            Err(other) => panic!("Invalid .env should return DotenvParse error, got {other}"),
            Ok(_) => panic!("Invalid .env should return DotenvParse error, got Ok"),
        }
    });
}

#[test]
#[serial]
fn test_dotenv_parse_error_does_not_leak_secrets() {
    let secret_value = "111122223333-secret";
    let contents = format!("QUICKSIGHT_ACCOUNT_ID={secret_value}\nINVALID_LINE_WITHOUT_EQUALS");

    in_dotenv_dir(Some(&contents), None, || {
        let error_string = match ConfigLoader::new().load_dotenv() {
            Err(e) => e.to_string(),
            Ok(_) => panic!("Expected error for invalid .env file, got Ok"),
        };
        assert!(
            !error_string.contains(secret_value),
            "Error message should NOT contain the secret value: {error_string}"
        );
        assert!(error_string.contains(".env"), "got: {error_string}");
        assert!(error_string.contains("DOTENV_DISABLED"), "got: {error_string}");
    });
}

#[test]
#[serial]
fn test_dotenv_disabled_with_value_1() {
    in_dotenv_dir(Some("INVALID_LINE_WITHOUT_EQUALS"), Some("1"), || {
        assert!(
            ConfigLoader::new().load_dotenv().is_ok(),
            "DOTENV_DISABLED=1 should skip .env loading even if file is invalid"
        );
    });
}

#[test]
#[serial]
fn test_dotenv_disabled_with_value_true() {
    in_dotenv_dir(Some("INVALID_LINE_WITHOUT_EQUALS"), Some("true"), || {
        assert!(
            ConfigLoader::new().load_dotenv().is_ok(),
            "DOTENV_DISABLED=true should skip .env loading even if file is invalid"
        );
    });
}

#[test]
#[serial]
fn test_dotenv_disabled_other_values_not_disabled() {
    in_dotenv_dir(Some("INVALID_LINE_WITHOUT_EQUALS"), Some("false"), || {
        assert!(matches!(
            ConfigLoader::new().load_dotenv(),
            Err(ConfigError::DotenvParse { .. })
        ));
    });
}
