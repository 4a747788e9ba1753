//! Runtime settings resolved from the environment
//!
//! Each product reads its own prefix, e.g. `NODEGEN_PACKAGE_MANAGER` or
//! `NODEGEN_CLASSIC_STEP_DELAY_MS`. Unset or malformed values fall back to
//! the product defaults.

use crate::product::ProductConfig;
use std::time::Duration;

/// Package manager executable used when no override is set
#[cfg(windows)]
pub const DEFAULT_PACKAGE_MANAGER: &str = "npm.cmd";
#[cfg(not(windows))]
pub const DEFAULT_PACKAGE_MANAGER: &str = "npm";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Executable invoked for `init` and `install`
    pub package_manager: String,

    /// Cosmetic pause before each step
    pub step_delay: Duration,

    /// How long the completion banner animates
    pub banner_duration: Duration,
}

impl Settings {
    /// Resolve settings for a product from the process environment
    pub fn from_env<C: ProductConfig>(config: &C) -> Self {
        Self::from_lookup(config, |key| std::env::var(key).ok())
    }

    /// Resolve settings with a custom variable lookup
    pub fn from_lookup<C, F>(config: &C, lookup: F) -> Self
    where
        C: ProductConfig,
        F: Fn(&str) -> Option<String>,
    {
        let prefix = config.env_prefix();
        let var = |suffix: &str| {
            lookup(&format!("{}_{}", prefix, suffix))
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let millis = |suffix: &str| {
            var(suffix)
                .and_then(|v| v.parse::<u64>().ok())
                .map(Duration::from_millis)
        };

        Self {
            package_manager: var("PACKAGE_MANAGER")
                .unwrap_or_else(|| DEFAULT_PACKAGE_MANAGER.to_string()),
            step_delay: millis("STEP_DELAY_MS").unwrap_or_else(|| config.step_delay()),
            banner_duration: millis("BANNER_MS").unwrap_or_else(|| config.banner_duration()),
        }
    }
}
