//! kvcached - An in-memory key-value cache service
//!
//! Provides a TTL-expiring, LRU-evicting cache behind an HTTP interface,
//! plus a client helper that hashes and fans out logical keys.

pub mod api;
pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use client::CacheClient;
pub use config::Config;
pub use tasks::Janitor;
