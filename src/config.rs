//! Configuration Module
//!
//! Handles loading and managing runtime configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::cache::CacheOptions;

/// Runtime configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Milliseconds an entry stays valid after its last access
    pub ttl_ms: u64,
    /// Maximum number of live entries
    pub item_limit: usize,
    /// HTTP server port
    pub server_port: u16,
    /// Expiry sweep interval in milliseconds, 0 disables the sweeper
    pub sweep_interval_ms: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_TTL_MS` - Entry TTL in milliseconds (default: 60000)
    /// - `CACHE_ITEM_LIMIT` - Maximum live entries (default: 1000)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `SWEEP_INTERVAL_MS` - Sweep frequency in milliseconds (default: 1000)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            ttl_ms: env_or("CACHE_TTL_MS", defaults.ttl_ms),
            item_limit: env_or("CACHE_ITEM_LIMIT", defaults.item_limit),
            server_port: env_or("SERVER_PORT", defaults.server_port),
            sweep_interval_ms: env_or("SWEEP_INTERVAL_MS", defaults.sweep_interval_ms),
        }
    }

    /// Cache limits described by this configuration.
    pub fn cache_options(&self) -> CacheOptions {
        CacheOptions::new(self.ttl_ms, self.item_limit)
    }

    /// Sweep interval, or `None` when the sweeper is disabled.
    pub fn sweep_interval(&self) -> Option<Duration> {
        (self.sweep_interval_ms > 0).then(|| Duration::from_millis(self.sweep_interval_ms))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ttl_ms: 60_000,
            item_limit: 1000,
            server_port: 3000,
            sweep_interval_ms: 1000,
        }
    }
}

/// Reads and parses an environment variable, falling back on absence or parse failure.
fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.ttl_ms, 60_000);
        assert_eq!(config.item_limit, 1000);
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.sweep_interval_ms, 1000);
    }

    #[test]
    fn test_config_cache_options() {
        let config = Config {
            ttl_ms: 250,
            item_limit: 8,
            ..Config::default()
        };
        assert_eq!(config.cache_options(), CacheOptions::new(250, 8));
    }

    #[test]
    fn test_sweep_interval_disabled_at_zero() {
        let config = Config {
            sweep_interval_ms: 0,
            ..Config::default()
        };
        assert_eq!(config.sweep_interval(), None);
        assert_eq!(
            Config::default().sweep_interval(),
            Some(Duration::from_millis(1000))
        );
    }

    #[test]
    fn test_env_or_fallbacks() {
        assert_eq!(env_or("LRU_TTL_TEST_UNSET_VARIABLE", 42u64), 42);

        env::set_var("LRU_TTL_TEST_BAD_NUMBER", "not-a-number");
        assert_eq!(env_or("LRU_TTL_TEST_BAD_NUMBER", 7usize), 7);

        env::set_var("LRU_TTL_TEST_GOOD_NUMBER", "250");
        assert_eq!(env_or("LRU_TTL_TEST_GOOD_NUMBER", 7u64), 250);
    }
}
