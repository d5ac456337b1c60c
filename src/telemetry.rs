//! Logging and metrics setup, done once at process start.

use anyhow::{Context, Result};
use metrics_exporter_prometheus::{
    Matcher, PrometheusBuilder, PrometheusHandle, PrometheusRecorder,
};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use crate::api::middleware::metrics::REQUEST_DURATION_SECONDS;

const UPKEEP_INTERVAL: Duration = Duration::from_secs(5);

const LATENCY_BUCKETS: &[f64] = &[
    0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
];

/// Installs the global tracing subscriber.
///
/// `log_level` is an `EnvFilter` directive (e.g. `info` or `snip=debug,tower_http=info`);
/// `log_format` selects `json` or `text` output.
///
/// # Errors
///
/// Returns an error if the filter cannot be parsed or a subscriber is already set.
pub fn init_tracing(log_level: &str, log_format: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level)
        .with_context(|| format!("invalid log filter '{}'", log_level))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = if log_format == "json" {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {}", e))
}

/// Builds the Prometheus recorder and installs it as the global `metrics` recorder.
///
/// Must be called from within a Tokio runtime: a background task performs
/// periodic upkeep on the recorder.
///
/// # Errors
///
/// Returns an error if a global recorder is already installed.
pub fn install_metrics_recorder() -> Result<PrometheusHandle> {
    let handle = prometheus_builder()?
        .install_recorder()
        .context("failed to install Prometheus recorder")?;

    let upkeep = handle.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(UPKEEP_INTERVAL);
        loop {
            interval.tick().await;
            upkeep.run_upkeep();
        }
    });

    Ok(handle)
}

/// Builds a Prometheus recorder without installing it globally.
///
/// Used where a render handle is needed but no process-wide recorder should
/// be set (admin tooling, tests).
pub fn detached_metrics_handle() -> Result<PrometheusHandle> {
    Ok(build_metrics_recorder()?.handle())
}

/// Builds a Prometheus recorder with the service's histogram buckets.
///
/// The caller decides how it is installed, e.g. with
/// [`metrics::set_default_local_recorder`] to scope it to one thread.
pub fn build_metrics_recorder() -> Result<PrometheusRecorder> {
    Ok(prometheus_builder()?.build_recorder())
}

fn prometheus_builder() -> Result<PrometheusBuilder> {
    PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full(REQUEST_DURATION_SECONDS.to_string()),
            LATENCY_BUCKETS,
        )
        .context("invalid histogram buckets")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detached_handle_renders() {
        let handle = detached_metrics_handle().unwrap();

        // Nothing is recorded through a detached recorder.
        assert!(!handle.render().contains("urlshortener_requests_total"));
    }

    #[test]
    fn test_local_recorder_uses_latency_buckets() {
        let recorder = build_metrics_recorder().unwrap();
        let handle = recorder.handle();

        metrics::with_local_recorder(&recorder, || {
            metrics::histogram!(REQUEST_DURATION_SECONDS, "path" => "/").record(0.003);
        });

        let rendered = handle.render();
        assert!(rendered.contains("urlshortener_request_duration_seconds_bucket"));
        assert!(rendered.contains("le=\"0.005\""));
    }

    #[test]
    fn test_init_tracing_rejects_bad_filter() {
        assert!(init_tracing("snip=notalevel", "text").is_err());
    }
}
