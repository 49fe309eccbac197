//! API Handlers
//!
//! HTTP request handlers for each cache service endpoint. The handlers own
//! the boundary contract: a store miss becomes 404, boundary validation
//! failures become 400, and a hit returns the raw value as plain text.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use tracing::debug;

use crate::cache::{CacheStore, MAX_KEY_LENGTH};
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{DeleteResponse, GetQuery, HealthResponse, SetRequest, SetResponse, StatsResponse};

/// Application state shared across all handlers.
///
/// The store is guarded by a single RwLock so that map, recency order and
/// counters mutate as one unit.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe cache store
    pub cache: Arc<RwLock<CacheStore>>,
}

impl AppState {
    /// Creates a new AppState with the given cache store.
    pub fn new(cache: CacheStore) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(CacheStore::new(config.max_size))
    }
}

/// Shared lookup used by both GET routes.
///
/// Malformed keys are rejected before touching the store, so they count as
/// bad requests, not misses. Takes the write lock: a read both updates the
/// recency order and may remove a lazily-expired entry.
async fn lookup(state: &AppState, key: &str) -> Result<String> {
    if key.is_empty() || key.len() > MAX_KEY_LENGTH {
        return Err(CacheError::InvalidArgument(format!(
            "key must be between 1 and {} bytes",
            MAX_KEY_LENGTH
        )));
    }

    let mut cache = state.cache.write().await;
    match cache.get(key) {
        Some(value) => {
            debug!(key, "cache hit");
            Ok(value)
        }
        None => {
            debug!(key, "cache miss");
            Err(CacheError::NotFound)
        }
    }
}

/// Handler for GET /kv/:key
///
/// Returns the stored value as plain text, or 404 on a miss.
pub async fn get_handler(State(state): State<AppState>, Path(key): Path<String>) -> Result<String> {
    lookup(&state, &key).await
}

/// Handler for GET /kv?key=...
///
/// Query-string variant of the read endpoint.
pub async fn get_query_handler(
    State(state): State<AppState>,
    Query(query): Query<GetQuery>,
) -> Result<String> {
    lookup(&state, &query.key).await
}

/// Handler for PUT /kv
///
/// Stores a key-value pair with an optional TTL. TTL is validated here;
/// key length is validated by the store.
pub async fn set_handler(
    State(state): State<AppState>,
    Json(req): Json<SetRequest>,
) -> Result<Json<SetResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidArgument(error_msg));
    }

    let size = {
        let mut cache = state.cache.write().await;
        cache.set(req.key.clone(), req.value, req.ttl_seconds)?;
        cache.len()
    };
    debug!(key = %req.key, size, "key set");

    Ok(Json(SetResponse::new(req.key)))
}

/// Handler for DELETE /kv/:key
///
/// Removes a key. Idempotent: deleting an absent key succeeds.
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Json<DeleteResponse> {
    let removed = {
        let mut cache = state.cache.write().await;
        cache.delete(&key)
    };

    Json(DeleteResponse::new(key, removed))
}

/// Handler for GET /healthz
///
/// Returns the health snapshot: status plus cache size and hit/miss counts.
pub async fn healthz_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let cache = state.cache.read().await;
    Json(HealthResponse::new(&cache.metrics()))
}

/// Handler for GET /stats
///
/// Returns the full counter snapshot including evictions and hit rate.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.read().await;
    Json(StatsResponse::new(&cache.metrics()))
}
