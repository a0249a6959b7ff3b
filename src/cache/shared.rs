//! Concurrent Cache Handle
//!
//! Wraps the store core behind a single reader/writer lock shared with the
//! background reaper, and owns the reaper task for the cache's lifetime.
//!
//! Every operation takes the lock in write mode: even `get` mutates the
//! recency order (and may drop an expired entry), so a shared/exclusive
//! split would let concurrent reads race on the recency list.

use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::info;

use crate::cache::{CacheStore, DEFAULT_SWEEP_INTERVAL};
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::tasks::spawn_reaper;

// == Cache ==
/// Bounded concurrent key-value cache with LRU eviction and per-entry TTL.
///
/// Construction spawns the background reaper, so a tokio runtime must be
/// running. Dropping the cache aborts the reaper; no background work
/// outlives its owner.
#[derive(Debug)]
pub struct Cache<K, V> {
    /// Index + recency list, guarded as one unit
    store: Arc<RwLock<CacheStore<K, V>>>,
    /// Fixed capacity, kept here so `cap` needs no lock
    capacity: usize,
    /// Handle used to stop the reaper on teardown
    reaper: JoinHandle<()>,
}

impl<K, V> Cache<K, V>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    V: Send + Sync + 'static,
{
    // == Constructors ==
    /// Creates a cache holding at most `capacity` entries, sweeping for
    /// expired entries every [`DEFAULT_SWEEP_INTERVAL`].
    ///
    /// # Errors
    /// Returns [`CacheError::InvalidCapacity`] when `capacity` is negative.
    /// A capacity of zero is legal; such a cache never stores anything.
    pub fn new(capacity: i64) -> Result<Self> {
        Self::with_sweep_interval(capacity, DEFAULT_SWEEP_INTERVAL)
    }

    /// Creates a cache from a [`Config`], taking both the capacity and the
    /// reaper sweep interval from it.
    pub fn with_config(config: &Config) -> Result<Self> {
        Self::with_sweep_interval(config.capacity, config.sweep_interval)
    }

    /// Creates a cache with an explicit reaper sweep interval.
    pub fn with_sweep_interval(capacity: i64, sweep_interval: Duration) -> Result<Self> {
        if capacity < 0 {
            return Err(CacheError::InvalidCapacity(capacity));
        }
        let capacity = capacity as usize;

        let store = Arc::new(RwLock::new(CacheStore::new(capacity)));
        let reaper = spawn_reaper(Arc::clone(&store), sweep_interval);
        info!(capacity, "cache initialized");

        Ok(Self {
            store,
            capacity,
            reaper,
        })
    }

    // == Capacity ==
    /// Returns the fixed capacity.
    pub fn cap(&self) -> usize {
        self.capacity
    }

    // == Length ==
    /// Returns the live-entry count.
    ///
    /// Runs a sweep first so expired-but-not-yet-swept entries are
    /// excluded. O(n) under the lock.
    pub async fn len(&self) -> usize {
        let mut store = self.store.write().await;
        store.sweep_expired();
        store.len()
    }

    // == Insert ==
    /// Upserts `key -> value` with no expiration. The entry lives until
    /// evicted by capacity or explicitly removed.
    pub async fn insert(&self, key: K, value: V) {
        self.store.write().await.insert(key, value);
    }

    /// Upserts `key -> value` expiring `ttl` from now.
    ///
    /// A zero TTL stores the entry already expired; it is dropped by the
    /// next access or sweep.
    pub async fn insert_with_ttl(&self, key: K, value: V, ttl: Duration) {
        self.store.write().await.insert_with_ttl(key, value, ttl);
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// A hit promotes the entry to most recently used. An expired entry is
    /// removed during the call and reported as a miss.
    pub async fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.store.write().await.get(key)
    }

    // == TTL Introspection ==
    /// Returns the remaining TTL for a key: `None` when the key is absent
    /// or never expires. Does not count as a use for LRU purposes.
    pub async fn ttl_remaining(&self, key: &K) -> Option<Duration> {
        self.store.read().await.ttl_remaining(key)
    }

    // == Remove ==
    /// Removes an entry by key, reporting whether anything was removed.
    /// Removing an absent key is a no-op.
    pub async fn remove(&self, key: &K) -> bool {
        self.store.write().await.remove(key)
    }

    // == Clear ==
    /// Atomically empties the cache.
    pub async fn clear(&self) {
        self.store.write().await.clear();
    }

    // == Close ==
    /// Stops the background reaper.
    ///
    /// The cache remains usable afterwards; expired entries are then only
    /// dropped lazily on access or by `len`. Also triggered by `Drop`.
    pub fn close(&self) {
        self.reaper.abort();
    }
}

impl<K, V> Drop for Cache<K, V> {
    fn drop(&mut self) {
        self.reaper.abort();
    }
}
