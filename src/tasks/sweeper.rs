//! Expiry Sweeper Task
//!
//! Background task that periodically purges expired cache entries.
//!
//! Lookups already treat expired entries as absent; the sweep only returns
//! their memory sooner.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::{Clock, SharedCache};

/// Spawns a task that calls [`SharedCache::purge_expired`] every `interval`.
///
/// The task runs until aborted through the returned handle. `interval` must
/// be non-zero.
///
/// # Example
/// ```ignore
/// let cache = SharedCache::new(CacheOptions::new(60_000, 1000))?;
/// let sweeper = spawn_sweeper(cache.clone(), Duration::from_secs(1));
/// // Later, during shutdown:
/// sweeper.abort();
/// ```
pub fn spawn_sweeper<T, C>(cache: SharedCache<T, C>, interval: Duration) -> JoinHandle<()>
where
    T: Send + 'static,
    C: Clock + Send + 'static,
{
    tokio::spawn(async move {
        info!(interval_ms = interval.as_millis() as u64, "Starting expiry sweeper");

        let mut ticker = tokio::time::interval(interval);
        // The first tick completes immediately
        ticker.tick().await;

        loop {
            ticker.tick().await;

            let removed = cache.purge_expired();
            if removed > 0 {
                info!("Expiry sweep: removed {} expired entries", removed);
            } else {
                debug!("Expiry sweep: no expired entries found");
            }
        }
    })
}
