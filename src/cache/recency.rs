//! Recency Tracker Module
//!
//! Maintains the access/insertion order of live keys for LRU eviction.
//!
//! Keys carry a monotonically increasing stamp; touching a key pushes a new
//! stamp onto the queue and the old queue slot becomes a tombstone that is
//! discarded lazily when it reaches the front. This keeps both move-to-end
//! and remove-oldest amortized O(1), with a periodic compaction pass
//! bounding the queue to a constant factor of the live key count.

use std::collections::{HashMap, VecDeque};

/// Queue slots tolerated beyond twice the live key count before compacting.
const COMPACT_SLACK: usize = 64;

// == Recency Tracker ==
/// Tracks recency order for LRU eviction.
///
/// Front of the queue = least recently used, back = most recently used.
/// The set of keys in `stamps` is exactly the set of live tracked keys.
#[derive(Debug, Default)]
pub struct RecencyTracker {
    /// Current stamp per live key; stale queue slots don't match
    stamps: HashMap<String, u64>,
    /// (stamp, key) in issue order; may contain tombstoned slots
    queue: VecDeque<(u64, String)>,
    /// Monotonic stamp source
    clock: u64,
}

impl RecencyTracker {
    // == Constructor ==
    /// Creates a new empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    // == Touch ==
    /// Marks a key as most recently used, inserting it if untracked.
    pub fn touch(&mut self, key: &str) {
        self.clock += 1;
        self.stamps.insert(key.to_string(), self.clock);
        self.queue.push_back((self.clock, key.to_string()));
        self.maybe_compact();
    }

    // == Remove ==
    /// Stops tracking a key. Returns whether it was tracked.
    ///
    /// The key's queue slot becomes a tombstone, discarded lazily.
    pub fn remove(&mut self, key: &str) -> bool {
        self.stamps.remove(key).is_some()
    }

    // == Pop LRU ==
    /// Removes and returns the least recently used key.
    ///
    /// Returns None if no live keys are tracked.
    pub fn pop_lru(&mut self) -> Option<String> {
        while let Some((stamp, key)) = self.queue.pop_front() {
            if self.stamps.get(&key) == Some(&stamp) {
                self.stamps.remove(&key);
                return Some(key);
            }
            // Tombstone: key was removed or re-touched since this slot
        }
        None
    }

    // == Peek LRU ==
    /// Returns the least recently used key without removing it.
    ///
    /// Discards tombstones from the front as a side effect.
    pub fn peek_lru(&mut self) -> Option<&String> {
        while let Some((stamp, key)) = self.queue.front() {
            if self.stamps.get(key) == Some(stamp) {
                break;
            }
            self.queue.pop_front();
        }
        self.queue.front().map(|(_, key)| key)
    }

    // == Length ==
    /// Returns the number of live tracked keys.
    pub fn len(&self) -> usize {
        self.stamps.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.stamps.is_empty()
    }

    // == Contains ==
    /// Checks whether a key is tracked.
    pub fn contains(&self, key: &str) -> bool {
        self.stamps.contains_key(key)
    }

    // == Keys ==
    /// Iterates over the live tracked keys in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.stamps.keys()
    }

    // == Compaction ==
    /// Rebuilds the queue when tombstones dominate, keeping memory and
    /// pop cost bounded by the live key count.
    fn maybe_compact(&mut self) {
        if self.queue.len() > self.stamps.len() * 2 + COMPACT_SLACK {
            let stamps = &self.stamps;
            self.queue.retain(|(stamp, key)| stamps.get(key) == Some(stamp));
        }
    }
}
