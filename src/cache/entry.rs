//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with last-access stamps.

// == Cache Entry ==
/// A stored value together with its access metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry<T> {
    /// The stored value
    pub value: T,
    /// Time of the most recent has/get/set (clock milliseconds)
    pub last_accessed_at: u64,
}

impl<T> CacheEntry<T> {
    // == Constructor ==
    /// Creates a new entry stamped at `now`.
    pub fn new(value: T, now: u64) -> Self {
        Self {
            value,
            last_accessed_at: now,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has outlived `ttl_ms` since its last access.
    ///
    /// The comparison is strict: an entry exactly `ttl_ms` old is still valid.
    pub fn is_expired(&self, now: u64, ttl_ms: u64) -> bool {
        self.idle_ms(now) > ttl_ms
    }

    // == Touch ==
    /// Records an access at `now`.
    pub fn touch(&mut self, now: u64) {
        self.last_accessed_at = now;
    }

    /// Milliseconds since the last access.
    pub fn idle_ms(&self, now: u64) -> u64 {
        now.saturating_sub(self.last_accessed_at)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new("value", 1_000);

        assert_eq!(entry.value, "value");
        assert_eq!(entry.last_accessed_at, 1_000);
        assert!(!entry.is_expired(1_000, 100));
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let entry = CacheEntry::new("value", 1_000);

        // Exactly ttl old is still valid, one more millisecond is not
        assert!(!entry.is_expired(1_100, 100));
        assert!(entry.is_expired(1_101, 100));
    }

    #[test]
    fn test_touch_refreshes_expiry() {
        let mut entry = CacheEntry::new("value", 1_000);

        entry.touch(1_080);

        assert!(!entry.is_expired(1_150, 100));
    }

    #[test]
    fn test_idle_with_clock_behind_stamp() {
        let entry = CacheEntry::new("value", 1_000);

        assert_eq!(entry.idle_ms(900), 0);
        assert!(!entry.is_expired(900, 1));
    }
}
