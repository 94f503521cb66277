//! LRU-TTL - A bounded in-memory cache
//!
//! Entries are evicted least-recently-used first once the item limit is
//! exceeded, and expire independently once idle for longer than the TTL.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::{CacheOptions, LruTtlCache, SharedCache};
pub use config::Config;
pub use error::{CacheError, Result};
pub use tasks::spawn_sweeper;
