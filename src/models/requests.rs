//! Request DTOs for the cache service API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.

use serde::Deserialize;

/// Request body for the SET operation (PUT /kv)
///
/// # Fields
/// - `key`: the cache key to store the value under
/// - `value`: the value to store
/// - `ttl_seconds`: optional TTL; absent or null means "never expires"
#[derive(Debug, Clone, Deserialize)]
pub struct SetRequest {
    /// The cache key
    pub key: String,
    /// The value to store
    pub value: String,
    /// Optional TTL in seconds
    #[serde(default)]
    pub ttl_seconds: Option<f64>,
}

impl SetRequest {
    /// Validates the TTL at the service boundary.
    ///
    /// Key length is validated by the store itself, so it is checked exactly
    /// once; the boundary only rejects what the store would silently accept,
    /// a negative TTL.
    pub fn validate(&self) -> Option<String> {
        match self.ttl_seconds {
            Some(ttl) if ttl < 0.0 => Some("ttl_seconds must be non-negative".to_string()),
            Some(ttl) if !ttl.is_finite() => Some("ttl_seconds must be finite".to_string()),
            _ => None,
        }
    }
}

/// Query string for the GET operation (GET /kv?key=...)
#[derive(Debug, Clone, Deserialize)]
pub struct GetQuery {
    /// The cache key to look up
    pub key: String,
}
