//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`         - Landing page
//! - `POST /shorten`  - Create a short link (form field `url`)
//! - `GET  /s/{id}`   - Redirect to the original URL
//! - `GET  /s`        - Rejected: empty identifier
//! - `GET  /metrics`  - Prometheus metrics
//! - `GET  /health`   - Store health check
//!
//! # Middleware
//!
//! - **Metrics** - Request counter and latency histogram per matched route
//! - **Access log** - One structured line per request
//! - **Tracing** - Request span
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{
    health_handler, metrics_handler, missing_id_handler, redirect_handler, shorten_handler,
};
use crate::api::middleware::{access_log, metrics, tracing};
use crate::state::AppState;
use crate::web::handlers::home_handler;
use axum::routing::{get, post};
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the router with all routes and middleware.
///
/// Trailing slashes are not normalised here; see [`app_router`].
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/shorten", post(shorten_handler))
        .route("/s", get(missing_id_handler))
        .route("/s/", get(missing_id_handler))
        .route("/s/{id}", get(redirect_handler))
        .route("/metrics", get(metrics_handler))
        .route("/health", get(health_handler))
        .route_layer(middleware::from_fn(metrics::layer))
        .with_state(state)
        .layer(middleware::from_fn(access_log::layer))
        .layer(tracing::layer())
}

/// Constructs the served application: [`router`] behind trailing-slash trimming,
/// so `/s/abc/` resolves like `/s/abc`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
