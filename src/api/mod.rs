//! API Module
//!
//! HTTP handlers and routing for the cache service REST API.
//!
//! # Endpoints
//! - `PUT /kv` - Store a key-value pair with optional TTL
//! - `GET /kv?key=...` / `GET /kv/:key` - Retrieve a value by key
//! - `DELETE /kv/:key` - Delete a key
//! - `GET /stats` - Counter snapshot
//! - `GET /healthz` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
