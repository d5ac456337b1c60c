//! Redis-backed link store.

use crate::domain::entities::ShortLink;
use crate::domain::repositories::{LinkStore, StoreError};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, info};

/// Link store on top of Redis.
///
/// Keys are the bare identifiers. Expiry uses `SET ... EX`, so Redis evicts
/// records on its own. The `ConnectionManager` is cloned per call; it
/// multiplexes over a single connection and reconnects on failure.
pub struct RedisStore {
    conn: ConnectionManager,
}

impl RedisStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] if the URI is invalid, the connection
    /// cannot be established, or the PING fails.
    pub async fn connect(redis_uri: &str) -> Result<Self, StoreError> {
        let client = Client::open(redis_uri)
            .map_err(|e| StoreError::Connection(format!("invalid Redis URI: {}", e)))?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| StoreError::Connection(format!("failed to connect to Redis: {}", e)))?;

        let mut conn = manager.clone();
        conn.ping::<()>()
            .await
            .map_err(|e| StoreError::Connection(format!("Redis PING failed: {}", e)))?;

        info!("Connected to Redis");

        Ok(Self { conn: manager })
    }
}

#[async_trait]
impl LinkStore for RedisStore {
    async fn put(&self, link: &ShortLink) -> Result<(), StoreError> {
        let mut conn = self.conn.clone();

        conn.set_ex::<_, _, ()>(link.id.as_str(), link.long_url.as_str(), link.ttl.as_secs())
            .await
            .map_err(|e| StoreError::Command(e.to_string()))?;

        debug!(id = %link.id, ttl_secs = link.ttl.as_secs(), "stored short link");
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<String>, StoreError> {
        let mut conn = self.conn.clone();

        conn.get::<_, Option<String>>(id)
            .await
            .map_err(|e| StoreError::Command(e.to_string()))
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.conn.clone();
        conn.ping::<()>().await.is_ok()
    }
}
