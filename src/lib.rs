//! A bounded in-memory cache with LRU eviction and TTL expiration.
//!
//! The cache holds a fixed number of entries. When full, inserting a new
//! key evicts the least recently used one; reads count as uses. Entries
//! may carry a per-entry time-to-live, and expire both lazily on access
//! and via a background reaper task that sweeps on a tunable interval.
//!
//! All operations synchronize through a single lock guarding the key
//! index and the recency order as one unit, so the cache can be shared
//! freely across tasks. The reaper is tied to the cache's lifetime: it is
//! aborted when the cache is dropped or closed.
//!
//! # Example
//! ```
//! use std::time::Duration;
//! use lru_ttl_cache::Cache;
//!
//! # tokio_test::block_on(async {
//! let cache: Cache<String, u32> = Cache::new(3).unwrap();
//!
//! cache.insert("a".into(), 1).await;
//! cache.insert_with_ttl("b".into(), 2, Duration::from_secs(60)).await;
//!
//! assert_eq!(cache.get(&"a".into()).await, Some(1));
//! assert_eq!(cache.len().await, 2);
//! # });
//! ```

pub mod cache;
pub mod config;
pub mod error;
mod tasks;

pub use cache::{Cache, CacheStore, DEFAULT_SWEEP_INTERVAL};
pub use config::Config;
pub use error::{CacheError, Result};
