//! HTTP server initialization and lifecycle.
//!
//! Connects the store, wires the shared state, serves the router and drains
//! in-flight requests on shutdown.

use crate::application::services::LinkService;
use crate::config::Config;
use crate::domain::repositories::LinkStore;
use crate::infrastructure::store::{MemoryStore, RedisStore};
use crate::routes::app_router;
use crate::state::AppState;
use crate::telemetry;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tokio::sync::oneshot;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Prometheus recorder
/// - Link store (Redis, or memory in development mode)
/// - Axum HTTP server
///
/// On SIGINT/SIGTERM the listener stops accepting connections and in-flight
/// requests get [`Config::shutdown_grace`] to finish.
///
/// # Errors
///
/// Returns an error if:
/// - The store cannot be reached
/// - Server bind fails
/// - Server runtime error occurs
/// - In-flight requests outlive the shutdown grace period
pub async fn run(config: Config) -> Result<()> {
    let metrics = telemetry::install_metrics_recorder()?;

    let store = connect_store(&config).await?;
    let link_service = Arc::new(LinkService::new(store));

    let state = AppState::new(link_service, config.link_scheme(), metrics);
    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr()
        .parse()
        .with_context(|| format!("invalid listen address '{}'", config.listen_addr()))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("Listening on http://{addr}");

    let (stop_tx, stop_rx) = oneshot::channel::<()>();

    let server = axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(async move {
        let _ = stop_rx.await;
    });

    let mut server_task = tokio::spawn(server.into_future());

    tokio::select! {
        result = &mut server_task => {
            result.context("server task panicked")?.context("server error")?;
            return Ok(());
        }
        _ = shutdown_signal() => {}
    }

    let grace = config.shutdown_grace();
    tracing::info!("Draining in-flight requests (up to {}s)", grace.as_secs());
    let _ = stop_tx.send(());

    match tokio::time::timeout(grace, server_task).await {
        Ok(result) => {
            result.context("server task panicked")?.context("server error")?;
            tracing::info!("Server stopped");
            Ok(())
        }
        Err(_) => anyhow::bail!(
            "graceful shutdown did not finish within {}s",
            grace.as_secs()
        ),
    }
}

/// Picks the store backend.
///
/// Redis when a URI is configured; otherwise the in-memory store, which
/// [`Config::validate`] only allows in development mode.
async fn connect_store(config: &Config) -> Result<Arc<dyn LinkStore>> {
    match config.redis_uri {
        Some(ref uri) => {
            let store = RedisStore::connect(uri)
                .await
                .context("failed to connect to store")?;
            tracing::info!("Store: Redis");
            Ok(Arc::new(store))
        }
        None => {
            tracing::warn!("REDIS_URI not set, using in-memory store; links are lost on restart");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}

/// Resolves on Ctrl+C, or SIGTERM on unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
