//! Metrics Counters Module
//!
//! Hit/miss/eviction bookkeeping, incremented under the same lock as the
//! operations that produce them and exported as a read-only snapshot.

use serde::Serialize;

// == Metrics ==
/// Monotonic cache counters.
///
/// Exactly one of `hits`/`misses` is incremented per completed `get`.
#[derive(Debug, Clone, Default)]
pub struct Metrics {
    /// Number of successful cache retrievals
    pub hits: u64,
    /// Number of failed cache retrievals (key not found or expired)
    pub misses: u64,
    /// Number of entries evicted by the LRU policy
    pub evictions: u64,
}

impl Metrics {
    // == Constructor ==
    /// Creates counters all at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Record Hit ==
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Eviction ==
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    // == Snapshot ==
    /// Read-only view of the counters together with the current entry count.
    pub fn snapshot(&self, size: usize) -> MetricsSnapshot {
        MetricsSnapshot {
            hits: self.hits,
            misses: self.misses,
            evictions: self.evictions,
            size,
        }
    }
}

// == Metrics Snapshot ==
/// Point-in-time counter values for health and stats collaborators.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    /// Entry count at snapshot time (expired-but-unswept keys included)
    pub size: usize,
}

impl MetricsSnapshot {
    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 before any gets.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_new() {
        let metrics = Metrics::new();
        assert_eq!(metrics.hits, 0);
        assert_eq!(metrics.misses, 0);
        assert_eq!(metrics.evictions, 0);
    }

    #[test]
    fn test_record_counters() {
        let mut metrics = Metrics::new();
        metrics.record_hit();
        metrics.record_hit();
        metrics.record_miss();
        metrics.record_eviction();

        assert_eq!(metrics.hits, 2);
        assert_eq!(metrics.misses, 1);
        assert_eq!(metrics.evictions, 1);
    }

    #[test]
    fn test_snapshot_carries_size() {
        let mut metrics = Metrics::new();
        metrics.record_hit();

        let snapshot = metrics.snapshot(42);
        assert_eq!(snapshot.hits, 1);
        assert_eq!(snapshot.size, 42);
    }

    #[test]
    fn test_hit_rate_no_requests() {
        let metrics = Metrics::new();
        assert_eq!(metrics.snapshot(0).hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate_mixed() {
        let mut metrics = Metrics::new();
        metrics.record_hit();
        metrics.record_miss();
        assert_eq!(metrics.snapshot(1).hit_rate(), 0.5);
    }

    #[test]
    fn test_hit_rate_all_hits() {
        let mut metrics = Metrics::new();
        metrics.record_hit();
        metrics.record_hit();
        assert_eq!(metrics.snapshot(2).hit_rate(), 1.0);
    }
}
