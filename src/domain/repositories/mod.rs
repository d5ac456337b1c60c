//! Storage trait definitions for the domain layer.
//!
//! Implementations live in `crate::infrastructure::store`; mocks are generated
//! via `mockall` for unit tests.

pub mod link_store;

pub use link_store::{LinkStore, StoreError};

#[cfg(test)]
pub use link_store::MockLinkStore;
