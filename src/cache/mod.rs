//! Cache Module
//!
//! Provides a bounded in-memory cache with LRU eviction and TTL expiration.

mod clock;
mod entry;
mod lru;
mod options;
mod shared;
mod store;


// Re-export public types
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use entry::CacheEntry;
pub use lru::LruTracker;
pub use options::CacheOptions;
pub use shared::SharedCache;
pub use store::LruTtlCache;
