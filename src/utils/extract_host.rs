//! Host extraction from HTTP requests.

use crate::AppError;
use axum::http::{HeaderMap, Uri, header};

/// Returns the host the client addressed, port included.
///
/// Reads the `Host` header first and falls back to the authority of the
/// request URI (HTTP/2 requests carry `:authority` instead of `Host`).
/// The value is returned verbatim so generated links point back at exactly
/// the host and port the client used.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if:
/// - Neither a `Host` header nor a URI authority is present
/// - The header value contains invalid UTF-8 or is blank
pub fn extract_host(headers: &HeaderMap, uri: &Uri) -> Result<String, AppError> {
    let host = match headers.get(header::HOST) {
        Some(value) => value
            .to_str()
            .map_err(|_| AppError::bad_request("invalid host header"))?
            .trim()
            .to_string(),
        None => uri
            .authority()
            .map(|a| a.as_str().to_string())
            .ok_or_else(|| AppError::bad_request("missing host header"))?,
    };

    if host.is_empty() {
        return Err(AppError::bad_request("missing host header"));
    }

    Ok(host)
}
