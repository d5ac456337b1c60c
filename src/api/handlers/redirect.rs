//! Handlers for short URL redirects.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short identifier to its original URL.
///
/// # Endpoint
///
/// `GET /s/{id}`
///
/// # Response
///
/// `302 Found` with `Location` set to the stored URL, replayed verbatim.
///
/// # Errors
///
/// - 404 if the identifier was never created or has expired
/// - 500 on store errors, or if the stored URL is not a valid header value
pub async fn redirect_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let long_url = state.link_service.resolve(&id).await?;

    let location = HeaderValue::try_from(long_url.as_str()).map_err(|e| {
        error!(error = %e, id = %id, "stored url is not a valid Location header");
        AppError::internal("failed to retrieve url")
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

/// Rejects `GET /s` and `GET /s/`, which carry no identifier.
pub async fn missing_id_handler() -> AppError {
    AppError::bad_request("short url cannot be empty")
}
