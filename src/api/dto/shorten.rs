//! Form payload for the shortening endpoint.

use axum::{
    Form,
    extract::{FromRequest, Multipart, Query, Request},
    http::header,
};
use serde::Deserialize;
use std::convert::Infallible;
use validator::Validate;

/// The `url` field of `POST /shorten`.
///
/// Read from an `application/x-www-form-urlencoded` or `multipart/form-data`
/// body, then from the query string. A body value wins over a query value.
/// A missing field, a body of any other type, or a body that cannot be
/// parsed all yield an empty `url`, so they share the 400 response of an
/// explicitly empty field.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ShortenForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "url cannot be empty"))]
    pub url: String,
}

impl<S> FromRequest<S> for ShortenForm
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let query_url = Query::<ShortenForm>::try_from_uri(req.uri())
            .map(|Query(form)| form.url)
            .unwrap_or_default();

        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let body_url = if content_type.starts_with("application/x-www-form-urlencoded") {
            Form::<ShortenForm>::from_request(req, state)
                .await
                .map(|Form(form)| form.url)
                .unwrap_or_default()
        } else if content_type.starts_with("multipart/form-data") {
            match Multipart::from_request(req, state).await {
                Ok(multipart) => url_from_multipart(multipart).await.unwrap_or_default(),
                Err(_) => String::new(),
            }
        } else {
            String::new()
        };

        let url = if body_url.is_empty() {
            query_url
        } else {
            body_url
        };

        Ok(Self { url })
    }
}

/// Text of the first `url` part; `None` if absent or the body is malformed.
async fn url_from_multipart(mut multipart: Multipart) -> Option<String> {
    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() == Some("url") {
            return field.text().await.ok();
        }
    }

    None
}
