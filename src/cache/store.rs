//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with recency tracking, TTL
//! expiration and LRU capacity eviction. The store owns the entry map, the
//! recency order and the counters as one unit; callers serialize access by
//! wrapping the whole store in a single lock, which is what keeps the
//! map/recency bijection atomic.

use std::collections::HashMap;

use crate::cache::{current_timestamp_ms, Entry, Metrics, MetricsSnapshot, RecencyTracker, MAX_KEY_LENGTH};
use crate::error::{CacheError, Result};

// == Cache Store ==
/// Key-value store with LRU eviction and TTL support.
///
/// Invariant: after every operation the key set of `entries` equals the key
/// set tracked by `recency`.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, Entry>,
    /// Recency order of live keys
    recency: RecencyTracker,
    /// Hit/miss/eviction counters
    metrics: Metrics,
    /// Maximum number of entries allowed
    max_size: usize,
}

impl CacheStore {
    // == Constructor ==
    /// Creates a store holding at most `max_size` entries.
    pub fn new(max_size: usize) -> Self {
        Self {
            entries: HashMap::new(),
            recency: RecencyTracker::new(),
            metrics: Metrics::new(),
            max_size,
        }
    }

    // == Get ==
    /// Retrieves a value by key, returning None on a miss.
    ///
    /// An expired entry is removed on the spot (lazy expiration) and counted
    /// as a miss. A live hit moves the key to most-recently-used. Exactly one
    /// of the hit/miss counters is incremented per call.
    pub fn get(&mut self, key: &str) -> Option<String> {
        let Some(entry) = self.entries.get(key) else {
            self.metrics.record_miss();
            return None;
        };

        if entry.is_expired() {
            self.entries.remove(key);
            self.recency.remove(key);
            self.metrics.record_miss();
            return None;
        }

        let value = entry.value.clone();
        self.metrics.record_hit();
        self.recency.touch(key);
        Some(value)
    }

    // == Set ==
    /// Stores a key-value pair with an optional TTL in seconds.
    ///
    /// Overwriting an existing key replaces the value and TTL wholesale,
    /// touches the key and never changes size or triggers eviction. A fresh
    /// insert that pushes the store past `max_size` evicts exactly the
    /// current least-recently-used key.
    ///
    /// A TTL of zero or a negative value means "never expires".
    pub fn set(&mut self, key: String, value: String, ttl_seconds: Option<f64>) -> Result<()> {
        if key.is_empty() || key.len() > MAX_KEY_LENGTH {
            return Err(CacheError::InvalidArgument(format!(
                "key must be between 1 and {} bytes",
                MAX_KEY_LENGTH
            )));
        }

        let previous = self.entries.insert(key.clone(), Entry::new(value, ttl_seconds));
        self.recency.touch(&key);

        // Eviction follows a fresh insert only, never an overwrite
        if previous.is_none() && self.entries.len() > self.max_size {
            if let Some(evicted) = self.recency.pop_lru() {
                self.entries.remove(&evicted);
                self.metrics.record_eviction();
            }
        }

        Ok(())
    }

    // == Delete ==
    /// Removes a key if present. Idempotent; returns whether a key was
    /// removed.
    pub fn delete(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        self.recency.remove(key);
        removed
    }

    // == Length ==
    /// Returns the number of tracked keys, expired-but-unswept included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Metrics ==
    /// Read-only counter snapshot including the current size.
    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot(self.entries.len())
    }

    // == Expired Keys ==
    /// Collects keys whose expiration has passed as of the given instant.
    ///
    /// Scan phase of the janitor sweep; only reads, takes no removal action.
    pub fn expired_keys(&self, asof_ms: u64) -> Vec<String> {
        self.entries
            .iter()
            .filter(|(_, entry)| entry.is_expired_at(asof_ms))
            .map(|(key, _)| key.clone())
            .collect()
    }

    // == Remove If Expired ==
    /// Removes a key only if it is still expired right now.
    ///
    /// Removal phase of the janitor sweep. Re-checks expiration at the moment
    /// of removal rather than trusting the scan result, so a key re-`set`
    /// after the scan snapshot survives. Returns whether the key was removed.
    pub fn remove_if_expired(&mut self, key: &str) -> bool {
        let expired = self
            .entries
            .get(key)
            .is_some_and(|entry| entry.is_expired_at(current_timestamp_ms()));

        if expired {
            self.entries.remove(key);
            self.recency.remove(key);
        }
        expired
    }

    // == Bijection Check ==
    /// Test hook: verifies the map's key set equals the recency key set.
    #[cfg(test)]
    pub(crate) fn bijection_holds(&self) -> bool {
        use std::collections::HashSet;

        let map_keys: HashSet<&String> = self.entries.keys().collect();
        let recency_keys: HashSet<&String> = self.recency.keys().collect();
        map_keys == recency_keys
    }
}
