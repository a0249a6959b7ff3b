//! Cache Module
//!
//! Provides in-memory caching with TTL expiration and LRU eviction.

mod entry;
mod order;
mod shared;
mod store;


// Re-export public types
pub use shared::Cache;
pub use store::CacheStore;

use std::time::Duration;

// == Public Constants ==
/// Default interval between background sweeps for expired entries
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(2);
