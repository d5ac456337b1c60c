//! In-process link store for development and tests.

use crate::domain::entities::ShortLink;
use crate::domain::repositories::{LinkStore, StoreError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Instant;
use tokio::sync::RwLock;
use tracing::debug;

struct Entry {
    long_url: String,
    expires_at: Instant,
}

/// A [`LinkStore`] kept in a process-local map.
///
/// Expired entries are hidden from reads and removed lazily: a read drops the
/// entry it finds expired, and every write sweeps all expired entries, so the
/// map never outgrows the links written within one TTL. Data is lost on
/// restart and not shared between instances, so this is only meant for local
/// development (no `REDIS_URI`) and for tests.
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, Entry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        debug!("Using MemoryStore (records are not persisted)");
        Self::default()
    }

    /// Number of live (unexpired) records.
    pub async fn len(&self) -> usize {
        let now = Instant::now();
        self.entries
            .read()
            .await
            .values()
            .filter(|e| e.expires_at > now)
            .count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl LinkStore for MemoryStore {
    async fn put(&self, link: &ShortLink) -> Result<(), StoreError> {
        let now = Instant::now();
        let entry = Entry {
            long_url: link.long_url.clone(),
            expires_at: now + link.ttl,
        };

        let mut entries = self.entries.write().await;
        entries.retain(|_, e| e.expires_at > now);
        entries.insert(link.id.clone(), entry);
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<String>, StoreError> {
        {
            let entries = self.entries.read().await;
            match entries.get(id) {
                None => return Ok(None),
                Some(entry) if entry.expires_at > Instant::now() => {
                    return Ok(Some(entry.long_url.clone()));
                }
                Some(_) => {}
            }
        }

        let mut entries = self.entries.write().await;
        if entries
            .get(id)
            .is_some_and(|e| e.expires_at <= Instant::now())
        {
            entries.remove(id);
        }

        Ok(None)
    }

    async fn health_check(&self) -> bool {
        true
    }
}
