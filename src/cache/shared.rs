//! Shared Cache Module
//!
//! Thread-safe handle over a single [`LruTtlCache`].

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::cache::{CacheOptions, Clock, LruTtlCache, MonotonicClock};
use crate::error::Result;

// == Shared Cache ==
/// Cloneable handle to one cache guarded by a mutex.
///
/// Lookups refresh recency and may purge expired entries, so every
/// operation takes the lock exclusively.
#[derive(Debug)]
pub struct SharedCache<T, C = MonotonicClock> {
    inner: Arc<Mutex<LruTtlCache<T, C>>>,
}

impl<T, C> Clone for SharedCache<T, C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> SharedCache<T> {
    /// Creates a shared cache driven by a [`MonotonicClock`].
    pub fn new(options: CacheOptions) -> Result<Self> {
        Ok(Self::from_cache(LruTtlCache::new(options)?))
    }
}

impl<T, C: Clock> SharedCache<T, C> {
    /// Wraps an existing cache.
    pub fn from_cache(cache: LruTtlCache<T, C>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cache)),
        }
    }

    /// Locks the cache.
    ///
    /// Every operation leaves the cache consistent before it can panic, so a
    /// poisoned lock is safe to reuse.
    fn lock(&self) -> MutexGuard<'_, LruTtlCache<T, C>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// See [`LruTtlCache::has`].
    pub fn has(&self, key: &str) -> bool {
        self.lock().has(key)
    }

    /// See [`LruTtlCache::set`].
    pub fn set(&self, key: impl Into<String>, value: T) {
        self.lock().set(key, value);
    }

    /// See [`LruTtlCache::purge_expired`].
    pub fn purge_expired(&self) -> usize {
        self.lock().purge_expired()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl<T: Clone, C: Clock> SharedCache<T, C> {
    /// Returns a copy of the live value for `key`. See [`LruTtlCache::get`].
    pub fn get(&self, key: &str) -> Option<T> {
        self.lock().get(key).cloned()
    }

    /// Returns the live value for `key`, computing it on a miss.
    ///
    /// `f` runs with the lock held.
    pub fn get_or_insert_with<F>(&self, key: &str, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.lock().get_or_insert_with(key, f).clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ManualClock;
    use std::thread;

    #[test]
    fn test_clones_share_state() {
        let cache = SharedCache::new(CacheOptions::new(60_000, 10)).unwrap();
        let other = cache.clone();

        cache.set("key", 7u32);

        assert_eq!(other.get("key"), Some(7));
        assert!(other.has("key"));
        assert_eq!(other.len(), 1);
    }

    #[test]
    fn test_invalid_options() {
        assert!(SharedCache::<u32>::new(CacheOptions::new(0, 10)).is_err());
    }

    #[test]
    fn test_purge_through_handle() {
        let clock = ManualClock::new(0);
        let cache = SharedCache::from_cache(
            LruTtlCache::with_clock(CacheOptions::new(100, 10), clock.clone()).unwrap(),
        );

        cache.set("key", "value".to_string());
        clock.advance(101);

        assert_eq!(cache.purge_expired(), 1);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_concurrent_writers_respect_capacity() {
        let cache = SharedCache::new(CacheOptions::new(60_000, 16)).unwrap();

        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let cache = cache.clone();
                thread::spawn(move || {
                    for i in 0..100 {
                        let key = format!("w{}:{}", worker, i);
                        cache.set(key.clone(), i);
                        cache.get(&key);
                        assert!(cache.len() <= 16);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(cache.len(), 16);
    }

    #[test]
    fn test_get_or_insert_with_memoizes() {
        let cache = SharedCache::new(CacheOptions::new(60_000, 10)).unwrap();

        let first = cache.get_or_insert_with("client:1", || "Acme".to_string());
        let second = cache.get_or_insert_with("client:1", || "Other".to_string());

        assert_eq!(first, "Acme");
        assert_eq!(second, "Acme");
    }
}
