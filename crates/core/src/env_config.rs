//! Environment variable parsing with warn-level logging for invalid values.

use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{
    DEFAULT_COPIED_FLASH_MS, DEFAULT_LATENCY_MS, DEFAULT_MAX_SESSIONS, ENV_CATALOG_PATH,
    ENV_COPIED_FLASH_MS, ENV_LATENCY_MS, ENV_MAX_SESSIONS,
};

/// Parse an environment variable with a default fallback.
///
/// - If the variable is not set: returns `default` silently (expected case).
/// - If the variable is set but cannot be parsed: logs a warning and returns `default`.
pub fn env_parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    default: T,
) -> T {
    match std::env::var(var) {
        Ok(v) => match v.parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(
                    var,
                    value = %v,
                    default = %default,
                    "invalid env var value, using default"
                );
                default
            },
        },
        Err(_) => default,
    }
}

/// Runtime knobs for the console, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Artificial latency applied to every simulated request.
    pub latency: Duration,
    /// How long the "copied" flag stays raised.
    pub copied_flash: Duration,
    /// Maximum number of live console sessions.
    pub max_sessions: usize,
    /// Optional JSON catalog replacing the built-in endpoint list.
    pub catalog_path: Option<PathBuf>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            latency: Duration::from_millis(DEFAULT_LATENCY_MS),
            copied_flash: Duration::from_millis(DEFAULT_COPIED_FLASH_MS),
            max_sessions: DEFAULT_MAX_SESSIONS,
            catalog_path: None,
        }
    }
}

impl ConsoleConfig {
    /// Reads `FRN_CONSOLE_*` variables, falling back to defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let catalog_path = std::env::var(ENV_CATALOG_PATH)
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);
        Self {
            latency: Duration::from_millis(env_parse_with_default(
                ENV_LATENCY_MS,
                DEFAULT_LATENCY_MS,
            )),
            copied_flash: Duration::from_millis(env_parse_with_default(
                ENV_COPIED_FLASH_MS,
                DEFAULT_COPIED_FLASH_MS,
            )),
            max_sessions: env_parse_with_default(ENV_MAX_SESSIONS, DEFAULT_MAX_SESSIONS).max(1),
            catalog_path,
        }
    }

    /// Same configuration with the simulated latency removed.
    #[must_use]
    pub fn without_latency(mut self) -> Self {
        self.latency = Duration::ZERO;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // SAFETY (all `set_var`/`remove_var` calls below): each test touches a
    // variable name no other test reads.

    #[test]
    fn test_env_parse_valid_value() {
        let var_name = "TEST_FRN_ENV_PARSE_VALID_41187";
        unsafe { std::env::set_var(var_name, "42") };
        let result: u32 = env_parse_with_default(var_name, 10);
        assert_eq!(result, 42);
        unsafe { std::env::remove_var(var_name) };
    }

    #[test]
    fn test_env_parse_invalid_value() {
        let var_name = "TEST_FRN_ENV_PARSE_INVALID_41188";
        unsafe { std::env::set_var(var_name, "banana") };
        let result: u32 = env_parse_with_default(var_name, 10);
        assert_eq!(result, 10);
        unsafe { std::env::remove_var(var_name) };
    }

    #[test]
    fn test_env_parse_missing_var() {
        let var_name = "TEST_FRN_ENV_PARSE_MISSING_41189";
        unsafe { std::env::remove_var(var_name) };
        let result: u32 = env_parse_with_default(var_name, 10);
        assert_eq!(result, 10);
    }

    #[test]
    fn test_env_parse_empty_value() {
        let var_name = "TEST_FRN_ENV_PARSE_EMPTY_41190";
        unsafe { std::env::set_var(var_name, "") };
        let result: u32 = env_parse_with_default(var_name, 10);
        assert_eq!(result, 10);
        unsafe { std::env::remove_var(var_name) };
    }

    #[test]
    fn test_default_config_matches_constants() {
        let config = ConsoleConfig::default();
        assert_eq!(config.latency, Duration::from_millis(1000));
        assert_eq!(config.copied_flash, Duration::from_millis(2000));
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_without_latency() {
        let config = ConsoleConfig::default().without_latency();
        assert_eq!(config.latency, Duration::ZERO);
        assert_eq!(config.copied_flash, Duration::from_millis(2000));
    }
}
