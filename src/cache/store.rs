//! Cache Store Module
//!
//! Single-threaded cache core combining the key index with the recency
//! list and TTL expiration. The concurrent [`Cache`](super::Cache) handle
//! wraps this behind one lock; the store itself exposes only
//! whole-operation methods so the index and recency list can never be
//! updated out of step with each other.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

use tracing::debug;

use super::entry::CacheEntry;
use super::order::RecencyList;

// == Cache Store ==
/// Bounded key-value store with LRU eviction and TTL support.
///
/// Invariant: every key in the index owns exactly one node in the recency
/// list, and `len() <= cap()` after every operation.
#[derive(Debug)]
pub struct CacheStore<K, V> {
    /// Key-value storage
    entries: HashMap<K, CacheEntry<V>>,
    /// Recency order of keys, most recently used at the front
    order: RecencyList<K>,
    /// Maximum number of entries, fixed for the store's lifetime
    capacity: usize,
}

impl<K, V> CacheStore<K, V>
where
    K: Eq + Hash + Clone,
{
    // == Constructor ==
    /// Creates an empty store holding at most `capacity` entries.
    ///
    /// A zero-capacity store is legal: every insert is a consistent no-op.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
            order: RecencyList::new(),
            capacity,
        }
    }

    // == Capacity ==
    /// Returns the fixed capacity.
    pub fn cap(&self) -> usize {
        self.capacity
    }

    // == Length ==
    /// Returns the current number of entries, expired ones included.
    ///
    /// Callers wanting the live count run [`sweep_expired`](Self::sweep_expired)
    /// first, as the concurrent handle's `len` does.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Insert ==
    /// Upserts `key -> value` with no expiration.
    pub fn insert(&mut self, key: K, value: V) {
        self.insert_entry(key, value, None);
    }

    /// Upserts `key -> value` expiring `ttl` from now.
    ///
    /// A zero TTL stores the entry already expired; it is dropped by the
    /// next access or sweep, matching TTL semantics uniformly.
    pub fn insert_with_ttl(&mut self, key: K, value: V, ttl: Duration) {
        self.insert_entry(key, value, Some(Instant::now() + ttl));
    }

    fn insert_entry(&mut self, key: K, value: V, expires_at: Option<Instant>) {
        // Overwrite case: refresh value, deadline, and recency. No
        // capacity change.
        if let Some(entry) = self.entries.get_mut(&key) {
            entry.value = value;
            entry.expires_at = expires_at;
            let node = entry.node;
            self.order.move_to_front(node);
            return;
        }

        // Zero capacity: there is no eviction target, so nothing is ever
        // stored.
        if self.capacity == 0 {
            return;
        }

        if self.entries.len() >= self.capacity {
            self.evict_oldest();
        }

        let node = self.order.push_front(key.clone());
        self.entries.insert(key, CacheEntry::new(value, expires_at, node));
        debug_assert_eq!(self.entries.len(), self.order.len());
    }

    /// Drops the least recently used entry from both structures.
    fn evict_oldest(&mut self) {
        if let Some(key) = self.order.back().cloned() {
            if let Some(entry) = self.entries.remove(&key) {
                self.order.remove(entry.node);
                debug!("evicted least recently used entry");
            }
        }
    }

    // == Get ==
    /// Retrieves a value by key, promoting it to most recently used.
    ///
    /// An expired entry is removed during the call and reported as a miss
    /// (lazy expiration on read).
    pub fn get(&mut self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        let entry = self.entries.get(key)?;

        if entry.is_expired() {
            let node = entry.node;
            self.entries.remove(key);
            self.order.remove(node);
            debug!("dropped expired entry on access");
            return None;
        }

        let node = entry.node;
        let value = entry.value.clone();
        self.order.move_to_front(node);
        Some(value)
    }

    // == TTL Introspection ==
    /// Returns the remaining TTL for a key.
    ///
    /// `Some(Duration::ZERO)` once the deadline has passed (but before the
    /// entry is reaped); `None` when the key is absent or never expires.
    /// Does not count as a use for LRU purposes.
    pub fn ttl_remaining(&self, key: &K) -> Option<Duration> {
        self.entries.get(key).and_then(|entry| entry.ttl_remaining())
    }

    // == Remove ==
    /// Removes an entry by key, reporting whether anything was removed.
    /// Removing an absent key is a no-op.
    pub fn remove(&mut self, key: &K) -> bool {
        match self.entries.remove(key) {
            Some(entry) => {
                self.order.remove(entry.node);
                true
            }
            None => false,
        }
    }

    // == Clear ==
    /// Atomically empties both the index and the recency list.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    // == Sweep Expired ==
    /// Removes all expired entries in one full scan.
    ///
    /// Returns the number of entries removed. O(n); entries are all judged
    /// against the same clock reading.
    pub fn sweep_expired(&mut self) -> usize {
        let now = Instant::now();
        let expired: Vec<K> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired_at(now))
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired.len();
        for key in expired {
            if let Some(entry) = self.entries.remove(&key) {
                self.order.remove(entry.node);
            }
        }
        count
    }
}
