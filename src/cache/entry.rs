//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::{SystemTime, UNIX_EPOCH};

// == Cache Entry ==
/// A stored value together with its optional absolute expiration instant.
///
/// Entries are replaced wholesale on overwrite; a fresh `set` always
/// supersedes both the value and the expiration.
#[derive(Debug, Clone)]
pub struct Entry {
    /// The stored value
    pub value: String,
    /// Expiration timestamp (Unix milliseconds), None = never expires
    pub expire_at: Option<u64>,
}

impl Entry {
    // == Constructor ==
    /// Creates a new entry, computing `expire_at` from an optional TTL.
    ///
    /// A TTL of zero or a negative value means "never expires", so callers
    /// cannot create an already-expired entry through this path. An
    /// oversized TTL saturates to the far future instead of wrapping.
    pub fn new(value: String, ttl_seconds: Option<f64>) -> Self {
        let expire_at = match ttl_seconds {
            Some(ttl) if ttl > 0.0 => {
                // The float-to-int cast saturates; the add must too
                Some(current_timestamp_ms().saturating_add((ttl * 1000.0) as u64))
            }
            _ => None,
        };

        Self { value, expire_at }
    }

    // == Is Expired ==
    /// Checks whether the entry has expired as of now.
    ///
    /// Boundary condition: an entry is expired once the current time is
    /// greater than or equal to its expiration time.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(current_timestamp_ms())
    }

    // == Is Expired At ==
    /// Checks expiration against an explicit instant (Unix milliseconds).
    ///
    /// The janitor scans against a snapshot instant and re-validates at
    /// removal time with this method.
    pub fn is_expired_at(&self, asof_ms: u64) -> bool {
        match self.expire_at {
            Some(expire) => asof_ms >= expire,
            None => false,
        }
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}
