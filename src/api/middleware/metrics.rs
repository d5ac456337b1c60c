//! Per-request Prometheus metrics.

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;

pub const REQUESTS_TOTAL: &str = "urlshortener_requests_total";
pub const REQUEST_DURATION_SECONDS: &str = "urlshortener_request_duration_seconds";

/// Records a request counter and a latency histogram.
///
/// Labels are `method`, `path` and `status`. `path` is the matched route
/// template (`/s/{id}`, not `/s/<uuid>`) so identifiers do not become label
/// values. Requests that matched no route are not recorded, since their raw
/// path is client-controlled.
///
/// Install with `route_layer` so [`MatchedPath`] is available:
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/s/{id}", get(redirect_handler))
///     .route_layer(axum::middleware::from_fn(metrics::layer));
/// ```
pub async fn layer(req: Request, next: Next) -> Response {
    let Some(path) = req
        .extensions()
        .get::<MatchedPath>()
        .map(|matched| matched.as_str().to_owned())
    else {
        return next.run(req).await;
    };

    let start = Instant::now();
    let method = req.method().to_string();

    let response = next.run(req).await;

    let latency = start.elapsed().as_secs_f64();
    let status = response.status().as_u16().to_string();

    let labels = [("method", method), ("path", path), ("status", status)];

    metrics::counter!(REQUESTS_TOTAL, &labels).increment(1);
    metrics::histogram!(REQUEST_DURATION_SECONDS, &labels).record(latency);

    response
}
