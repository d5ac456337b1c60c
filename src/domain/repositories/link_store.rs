//! Store trait for short link persistence.

use crate::domain::entities::ShortLink;
use async_trait::async_trait;
use thiserror::Error;

/// Errors raised by a [`LinkStore`] backend.
///
/// A missing key is not an error; lookups report it as `Ok(None)`.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store connection error: {0}")]
    Connection(String),

    #[error("store command error: {0}")]
    Command(String),
}

/// Key-value storage for short links with native expiry.
///
/// The key space is flat: key = identifier, value = original URL.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::RedisStore`] - Redis `SET EX` / `GET`
/// - [`crate::infrastructure::store::MemoryStore`] - in-process map for development and tests
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// Writes the record with its TTL. Last write wins.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend rejects or cannot run the write.
    async fn put(&self, link: &ShortLink) -> Result<(), StoreError>;

    /// Looks up the original URL for `id`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` if the record exists
    /// - `Ok(None)` if it never existed or has expired
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on backend failures.
    async fn get(&self, id: &str) -> Result<Option<String>, StoreError>;

    /// Checks whether the backend is reachable.
    async fn health_check(&self) -> bool;
}
