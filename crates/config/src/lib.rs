//! Configuration management for the QuickSight model SDK.
//!
//! This crate provides the resolved client settings (region, endpoint,
//! account, namespace, enum policy) and a loader that merges them from
//! `.env` files, environment variables, and explicit overrides.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{Config, EnumPolicy};

#[cfg(test)]
pub(crate) mod test_util {
    use std::sync::{Mutex, OnceLock};

    pub fn global_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }
}
