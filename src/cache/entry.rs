//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::{Duration, Instant};

use super::order::NodeRef;

// == Cache Entry ==
/// A stored value plus its expiration metadata and recency-list position.
#[derive(Debug, Clone)]
pub(crate) struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Expiration deadline, None = no expiration
    pub expires_at: Option<Instant>,
    /// This entry's node in the recency list
    pub node: NodeRef,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new entry already linked into the recency list at `node`.
    pub fn new(value: V, expires_at: Option<Instant>, node: NodeRef) -> Self {
        Self {
            value,
            expires_at,
            node,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired as of now.
    ///
    /// Boundary condition: an entry is expired once the current time is
    /// greater than or equal to its deadline, so a zero TTL is expired
    /// from the moment it is stored.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    /// Checks expiration against a caller-supplied clock reading, so a
    /// full sweep compares every entry to the same instant.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        match self.expires_at {
            Some(deadline) => now >= deadline,
            None => false,
        }
    }

    // == Time To Live ==
    /// Returns remaining TTL, or None if no expiration is set.
    ///
    /// # Returns
    /// - `Some(Duration::ZERO)` if the entry has expired
    /// - `Some(remaining)` if the entry has a deadline still ahead
    /// - `None` if the entry never expires
    pub fn ttl_remaining(&self) -> Option<Duration> {
        self.expires_at
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }
}
