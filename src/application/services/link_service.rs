//! Link creation and resolution service.

use std::sync::Arc;

use crate::domain::entities::ShortLink;
use crate::domain::repositories::LinkStore;
use crate::error::AppError;
use tracing::error;

pub const LINKS_CREATED_TOTAL: &str = "urlshortener_links_created_total";
pub const REDIRECTS_TOTAL: &str = "urlshortener_redirects_total";

/// Service for creating and resolving short links.
///
/// Holds the one store client shared by every request.
pub struct LinkService {
    store: Arc<dyn LinkStore>,
}

impl LinkService {
    pub fn new(store: Arc<dyn LinkStore>) -> Self {
        Self { store }
    }

    /// Stores `long_url` under a new random identifier with the fixed TTL.
    ///
    /// The URL is not validated beyond being non-empty and is stored verbatim.
    /// Store failures are logged and not retried.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if `long_url` is empty
    /// - [`AppError::Internal`] if the store write fails
    pub async fn shorten(&self, long_url: &str) -> Result<ShortLink, AppError> {
        if long_url.is_empty() {
            return Err(AppError::bad_request("url cannot be empty"));
        }

        let link = ShortLink::generate(long_url);

        self.store.put(&link).await.map_err(|e| {
            error!(error = %e, id = %link.id, "failed to set shortened url");
            AppError::internal("failed to set shortened url")
        })?;

        metrics::counter!(LINKS_CREATED_TOTAL).increment(1);

        Ok(link)
    }

    /// Returns the original URL stored under `id`.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if `id` is empty
    /// - [`AppError::NotFound`] if the record is missing or expired
    /// - [`AppError::Internal`] on store failures (logged)
    pub async fn resolve(&self, id: &str) -> Result<String, AppError> {
        if id.is_empty() {
            return Err(AppError::bad_request("short url cannot be empty"));
        }

        match self.store.get(id).await {
            Ok(Some(url)) => {
                metrics::counter!(REDIRECTS_TOTAL, "outcome" => "found").increment(1);
                Ok(url)
            }
            Ok(None) => {
                metrics::counter!(REDIRECTS_TOTAL, "outcome" => "not_found").increment(1);
                Err(AppError::not_found("url not found"))
            }
            Err(e) => {
                error!(error = %e, id = %id, "failed to get shortened url");
                Err(AppError::internal("failed to retrieve url"))
            }
        }
    }

    /// Reports whether the underlying store answers.
    pub async fn store_healthy(&self) -> bool {
        self.store.health_check().await
    }
}
