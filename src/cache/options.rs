//! Cache Options Module
//!
//! Construction-time limits for a cache instance.

use std::time::Duration;

use crate::error::{CacheError, Result};

// == Cache Options ==
/// Capacity and expiry settings, both mandatory and positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheOptions {
    /// Milliseconds an entry stays valid after its last access
    pub ttl_ms: u64,
    /// Maximum number of live entries
    pub item_limit: usize,
}

impl CacheOptions {
    pub fn new(ttl_ms: u64, item_limit: usize) -> Self {
        Self { ttl_ms, item_limit }
    }

    /// Builds options from a [`Duration`], truncated to whole milliseconds.
    pub fn with_ttl(ttl: Duration, item_limit: usize) -> Self {
        Self::new(ttl.as_millis() as u64, item_limit)
    }

    // == Validate ==
    /// Rejects a zero TTL or a zero item limit.
    pub fn validate(&self) -> Result<()> {
        if self.ttl_ms == 0 {
            return Err(CacheError::InvalidConfiguration(
                "ttl must be a positive number of milliseconds".to_string(),
            ));
        }
        if self.item_limit == 0 {
            return Err(CacheError::InvalidConfiguration(
                "item limit must be a positive number".to_string(),
            ));
        }
        Ok(())
    }
}
