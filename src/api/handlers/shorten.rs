//! Handler for the link shortening endpoint.

use axum::{
    extract::State,
    http::{HeaderMap, Uri},
};
use validator::Validate;

use crate::api::dto::shorten::ShortenForm;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::extract_host::extract_host;
use crate::utils::short_url::build_short_url;

/// Shortens the submitted URL.
///
/// # Endpoint
///
/// `POST /shorten` with field `url` (urlencoded or multipart body, or query string)
///
/// # Response
///
/// `200 OK`, `text/plain` body with the public short URL:
///
/// ```text
/// https://short.ly/s/0f8e4c2a-3b1d-4e6f-9a7c-5d2b8e1f4a60
/// ```
///
/// The scheme is `https` unless development mode is on; the host is taken
/// from the request.
///
/// # Errors
///
/// - 400 if `url` is empty, missing or unreadable, or the request carries no host
/// - 500 if the store write fails
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    form: ShortenForm,
) -> Result<String, AppError> {
    form.validate()?;

    let host = extract_host(&headers, &uri)?;

    let link = state.link_service.shorten(&form.url).await?;

    Ok(build_short_url(state.link_scheme, &host, &link.id))
}
