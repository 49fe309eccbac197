//! Cache Module
//!
//! Provides in-memory caching with TTL expiration and LRU eviction.

mod entry;
mod metrics;
mod recency;
mod store;


// Re-export public types
pub use entry::{current_timestamp_ms, Entry};
pub use metrics::{Metrics, MetricsSnapshot};
pub use recency::RecencyTracker;
pub use store::CacheStore;

// == Public Constants ==
/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 4096;
