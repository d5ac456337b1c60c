//! Infrastructure layer for external integrations.
//!
//! Implements the store contract defined by the domain layer.
//!
//! - [`store`] - Redis and in-memory link stores

pub mod store;
