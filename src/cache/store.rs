//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with LRU tracking and TTL expiration.

use std::collections::HashMap;
use std::time::Duration;

use tracing::{debug, trace};

use crate::cache::{CacheEntry, CacheOptions, Clock, LruTracker, MonotonicClock};
use crate::error::Result;

// == LRU-TTL Cache ==
/// Bounded key/value store with least-recently-used eviction and
/// per-entry expiry measured from the last access.
///
/// `has`, `get` and `set` all count as an access. Expiry is lazy: an expired
/// entry is dropped the next time its key is touched, or when capacity
/// pressure reaches it from the least recently used end.
#[derive(Debug)]
pub struct LruTtlCache<T, C = MonotonicClock> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<T>>,
    /// LRU access tracker
    lru: LruTracker,
    options: CacheOptions,
    clock: C,
}

impl<T> LruTtlCache<T> {
    // == Constructor ==
    /// Creates an empty cache driven by a [`MonotonicClock`].
    ///
    /// Fails with `InvalidConfiguration` if the ttl or item limit is zero.
    pub fn new(options: CacheOptions) -> Result<Self> {
        Self::with_clock(options, MonotonicClock::new())
    }
}

impl<T, C: Clock> LruTtlCache<T, C> {
    /// Creates an empty cache reading time from `clock`.
    pub fn with_clock(options: CacheOptions, clock: C) -> Result<Self> {
        options.validate()?;

        Ok(Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            options,
            clock,
        })
    }

    // == Has ==
    /// Returns true if `key` holds a live entry, refreshing it.
    ///
    /// An expired entry is removed and reported as absent.
    pub fn has(&mut self, key: &str) -> bool {
        self.touch_live(key).is_some()
    }

    // == Get ==
    /// Retrieves the value for `key` if present and not expired.
    ///
    /// Same side effects as [`has`](Self::has).
    pub fn get(&mut self, key: &str) -> Option<&T> {
        self.touch_live(key).map(|entry| &entry.value)
    }

    // == Set ==
    /// Stores `value` under `key` as the most recently used entry.
    ///
    /// Overwrites any previous value for the key. If the live entries then
    /// exceed the item limit, least recently used entries are evicted until
    /// they fit.
    pub fn set(&mut self, key: impl Into<String>, value: T) {
        let key = key.into();
        let now = self.clock.now_ms();

        self.lru.touch(&key);
        self.entries.insert(key, CacheEntry::new(value, now));

        if self.entries.len() > self.options.item_limit {
            self.enforce_limit(now);
        }
    }

    // == Get Or Insert ==
    /// Returns the live value for `key`, computing and storing it on a miss.
    pub fn get_or_insert_with<F>(&mut self, key: &str, f: F) -> &T
    where
        F: FnOnce() -> T,
    {
        if self.touch_live(key).is_none() {
            self.set(key, f());
        }
        // The entry just touched or written is the most recent one, so it
        // cannot have been evicted.
        &self.entries[key].value
    }

    // == Purge Expired ==
    /// Physically removes every expired entry.
    ///
    /// Returns the number of entries removed. Lookups already treat these
    /// entries as absent, so this only reclaims memory.
    pub fn purge_expired(&mut self) -> usize {
        let now = self.clock.now_ms();
        self.purge_expired_at(now)
    }

    /// Number of stored entries, including expired ones not yet purged.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of live entries.
    pub fn capacity(&self) -> usize {
        self.options.item_limit
    }

    /// How long an entry stays valid after its last access.
    pub fn ttl(&self) -> Duration {
        Duration::from_millis(self.options.ttl_ms)
    }

    // == Internals ==
    /// Looks up a live entry and marks it as accessed, dropping it if expired.
    fn touch_live(&mut self, key: &str) -> Option<&mut CacheEntry<T>> {
        let now = self.clock.now_ms();
        let expired = self.entries.get(key)?.is_expired(now, self.options.ttl_ms);

        if expired {
            self.entries.remove(key);
            self.lru.remove(key);
            trace!(key, "dropped expired entry on access");
            return None;
        }

        self.lru.touch(key);
        let entry = self.entries.get_mut(key)?;
        entry.touch(now);
        Some(entry)
    }

    /// Brings the entry count back within the item limit.
    ///
    /// Expired entries are dropped first; they only ever sit at the least
    /// recently used end, so what remains is evicted strictly by recency.
    fn enforce_limit(&mut self, now: u64) {
        self.purge_expired_at(now);

        while self.entries.len() > self.options.item_limit {
            let Some(key) = self.lru.evict_oldest() else {
                break;
            };
            self.entries.remove(&key);
            debug!(key = %key, "evicted least recently used entry");
        }
    }

    /// Drops expired entries from the least recently used end.
    ///
    /// Last-access stamps grow with recency, so the first live entry from
    /// that end means every newer entry is live too.
    fn purge_expired_at(&mut self, now: u64) -> usize {
        let ttl_ms = self.options.ttl_ms;
        let mut removed = 0;

        while let Some(oldest) = self.lru.peek_oldest() {
            let expired = self
                .entries
                .get(oldest)
                .map_or(true, |entry| entry.is_expired(now, ttl_ms));
            if !expired {
                break;
            }

            let key = oldest.to_string();
            self.lru.remove(&key);
            if let Some(entry) = self.entries.remove(&key) {
                trace!(key = %key, idle_ms = entry.idle_ms(now), "purged expired entry");
            }
            removed += 1;
        }

        removed
    }
}
