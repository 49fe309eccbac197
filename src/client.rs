//! Client Helper Module
//!
//! Client-side companion to the cache service. Logical keys are hashed to a
//! fixed-width identifier before they reach the service, so the store never
//! sees variable-length friendly keys. A logical key can optionally be
//! fanned out across N physical shard-keys (`key::entry{0..N-1}`), one
//! chosen at random per request, to spread hot-key load across the
//! single-lock store. The service is unaware of the fan-out; it only ever
//! sees independent keys.

use rand::Rng;
use sha2::{Digest, Sha256};
use thiserror::Error;

// == Client Error ==
/// Errors returned by [`CacheClient`] operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport failure or non-success HTTP status (other than the 404
    /// that signals a plain miss on GET)
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
}

// == Key Hashing ==
/// Hashes a logical key into a fixed 64-char SHA-256 hex string.
pub fn hash_key(key: &str) -> String {
    hex::encode(Sha256::digest(key.as_bytes()))
}

// == Cache Client ==
/// HTTP client for the cache service with key hashing and optional fan-out.
///
/// With `fanout > 1`, each request targets one randomly chosen shard-key, so
/// a GET can miss a value that a SET placed on a different shard; callers
/// that need every read to hit must either keep `fanout = 1` or populate all
/// shards themselves.
pub struct CacheClient {
    base_url: String,
    http: reqwest::Client,
    fanout: usize,
}

impl CacheClient {
    // == Constructor ==
    /// Creates a client for the service at `base_url`, without fan-out.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
            fanout: 1,
        }
    }

    // == With Fanout ==
    /// Spreads each logical key across `fanout` physical shard-keys
    /// (minimum 1).
    pub fn with_fanout(mut self, fanout: usize) -> Self {
        self.fanout = fanout.max(1);
        self
    }

    // == Physical Key ==
    /// Derives the physical key for one request: pick a shard at random,
    /// then hash.
    fn physical_key(&self, logical_key: &str) -> String {
        let slot = rand::thread_rng().gen_range(0..self.fanout);
        hash_key(&format!("{logical_key}::entry{slot}"))
    }

    // == Get ==
    /// Fetches a value by logical key. A 404 from the service is a plain
    /// miss and maps to `Ok(None)`.
    pub async fn get(&self, logical_key: &str) -> Result<Option<String>, ClientError> {
        let key = self.physical_key(logical_key);
        let response = self
            .http
            .get(format!("{}/kv/{}", self.base_url, key))
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let value = response.error_for_status()?.text().await?;
        Ok(Some(value))
    }

    // == Set ==
    /// Stores a value under the logical key, with an optional TTL in
    /// seconds.
    pub async fn set(
        &self,
        logical_key: &str,
        value: &str,
        ttl_seconds: Option<f64>,
    ) -> Result<(), ClientError> {
        let key = self.physical_key(logical_key);
        let payload = serde_json::json!({
            "key": key,
            "value": value,
            "ttl_seconds": ttl_seconds,
        });

        self.http
            .put(format!("{}/kv", self.base_url))
            .json(&payload)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}
