#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use snip::application::services::LinkService;
use snip::domain::entities::ShortLink;
use snip::domain::repositories::{LinkStore, StoreError};
use snip::infrastructure::store::MemoryStore;
use snip::routes::router;
use snip::state::AppState;
use metrics_exporter_prometheus::PrometheusHandle;
use snip::telemetry::detached_metrics_handle;
use snip::utils::short_url::Scheme;
use std::sync::Arc;

/// Store whose every operation fails, for exercising 500 paths.
pub struct FailingStore;

#[async_trait]
impl LinkStore for FailingStore {
    async fn put(&self, _link: &ShortLink) -> Result<(), StoreError> {
        Err(StoreError::Command("connection reset by peer".to_string()))
    }

    async fn get(&self, _id: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Command("connection reset by peer".to_string()))
    }

    async fn health_check(&self) -> bool {
        false
    }
}

pub fn create_test_state(store: Arc<dyn LinkStore>, dev_mode: bool) -> AppState {
    create_test_state_with_metrics(store, dev_mode, detached_metrics_handle().unwrap())
}

pub fn create_test_state_with_metrics(
    store: Arc<dyn LinkStore>,
    dev_mode: bool,
    metrics: PrometheusHandle,
) -> AppState {
    let link_service = Arc::new(LinkService::new(store));

    AppState::new(link_service, Scheme::for_dev_mode(dev_mode), metrics)
}

/// Full router over a fresh memory store, which is returned for inspection.
pub fn memory_server(dev_mode: bool) -> (TestServer, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let state = create_test_state(store.clone(), dev_mode);

    (TestServer::new(router(state)).unwrap(), store)
}

/// Memory-store server whose `/metrics` renders through `metrics`.
pub fn metrics_server(metrics: PrometheusHandle) -> TestServer {
    let state = create_test_state_with_metrics(Arc::new(MemoryStore::new()), false, metrics);
    TestServer::new(router(state)).unwrap()
}

pub fn failing_server() -> TestServer {
    let state = create_test_state(Arc::new(FailingStore), false);
    TestServer::new(router(state)).unwrap()
}

/// Last path segment of a short URL.
pub fn id_from_short_url(short_url: &str) -> String {
    short_url.rsplit('/').next().unwrap().to_string()
}
