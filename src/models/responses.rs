//! Response DTOs for the cache service API
//!
//! Defines the structure of outgoing HTTP response bodies. GET responses
//! carry the raw value as plain text and have no DTO here.

use serde::Serialize;

use crate::cache::MetricsSnapshot;

/// Response body for the SET operation (PUT /kv)
#[derive(Debug, Clone, Serialize)]
pub struct SetResponse {
    /// Acknowledgement flag
    pub ok: bool,
    /// The key that was set
    pub key: String,
}

impl SetResponse {
    /// Creates a new SetResponse
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            ok: true,
            key: key.into(),
        }
    }
}

/// Response body for the DELETE operation (DELETE /kv/:key)
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    /// Acknowledgement flag
    pub ok: bool,
    /// The key that was targeted
    pub key: String,
    /// Whether a key was actually removed (delete is idempotent)
    pub removed: bool,
}

impl DeleteResponse {
    /// Creates a new DeleteResponse
    pub fn new(key: impl Into<String>, removed: bool) -> Self {
        Self {
            ok: true,
            key: key.into(),
            removed,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of LRU evictions
    pub evictions: u64,
    /// Current number of entries in the cache
    pub size: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from a metrics snapshot
    pub fn new(snapshot: &MetricsSnapshot) -> Self {
        Self {
            hits: snapshot.hits,
            misses: snapshot.misses,
            evictions: snapshot.evictions,
            size: snapshot.size,
            hit_rate: snapshot.hit_rate(),
        }
    }
}

/// Response body for the health endpoint (GET /healthz)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "ok")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
    /// Current number of entries in the cache
    pub cache_size: usize,
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
}

impl HealthResponse {
    /// Creates a new HealthResponse from a metrics snapshot
    pub fn new(snapshot: &MetricsSnapshot) -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            cache_size: snapshot.size,
            hits: snapshot.hits,
            misses: snapshot.misses,
        }
    }
}
