//! Background Tasks Module
//!
//! Contains background tasks that run for the lifetime of the service.
//!
//! # Tasks
//! - Janitor: sweeps expired cache entries at a configured interval

mod janitor;

pub use janitor::Janitor;
