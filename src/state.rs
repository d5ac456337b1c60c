//! Shared application state.

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;

use crate::application::services::LinkService;
use crate::utils::short_url::Scheme;

/// State injected into every handler.
///
/// Built once at startup; cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    /// Scheme for generated short URLs, fixed by configuration.
    pub link_scheme: Scheme,
    pub metrics: PrometheusHandle,
}

impl AppState {
    pub fn new(
        link_service: Arc<LinkService>,
        link_scheme: Scheme,
        metrics: PrometheusHandle,
    ) -> Self {
        Self {
            link_service,
            link_scheme,
            metrics,
        }
    }
}
