//! HTTP middleware for observability.

pub mod access_log;
pub mod metrics;
pub mod tracing;
