//! Short link record kept in the key-value store.

use std::time::Duration;
use uuid::Uuid;

/// Lifetime of every short link. The store expires the record on its own.
pub const LINK_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Mapping from a short identifier to the original URL.
///
/// Records are write-once: nothing updates or deletes them, they simply
/// disappear from the store once `ttl` has elapsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub id: String,
    pub long_url: String,
    pub ttl: Duration,
}

impl ShortLink {
    /// Creates a record for `long_url` under a fresh random UUID v4 identifier.
    ///
    /// Collisions are not checked for.
    pub fn generate(long_url: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            long_url: long_url.into(),
            ttl: LINK_TTL,
        }
    }
}
