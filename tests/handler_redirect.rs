mod common;

use axum::http::StatusCode;
use std::future::IntoFuture;

#[tokio::test]
async fn test_shorten_then_redirect() {
    let (server, _store) = common::memory_server(false);

    let short_url = server
        .post("/shorten")
        .add_header("Host", "short.ly")
        .form(&[("url", "https://example.com")])
        .await
        .text();
    let id = common::id_from_short_url(&short_url);

    let response = server.get(&format!("/s/{id}")).await;

    assert_eq!(response.status_code(), StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://example.com");
}

#[tokio::test]
async fn test_redirect_replays_url_verbatim() {
    let (server, _store) = common::memory_server(false);
    let long_url = "https://example.com/a/b?q=1&r=two#frag";

    let short_url = server
        .post("/shorten")
        .add_header("Host", "short.ly")
        .form(&[("url", long_url)])
        .await
        .text();
    let id = common::id_from_short_url(&short_url);

    let response = server.get(&format!("/s/{id}")).await;

    assert_eq!(response.status_code(), StatusCode::FOUND);
    assert_eq!(response.header("location"), long_url);
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (server, _store) = common::memory_server(false);

    let response = server
        .get("/s/6f1c2d3e-0000-4000-8000-000000000000")
        .await;

    response.assert_status_not_found();
    assert_eq!(response.text(), "url not found");
}

#[tokio::test]
async fn test_redirect_empty_id() {
    let (server, _store) = common::memory_server(false);

    let response = server.get("/s").await;
    response.assert_status_bad_request();
    assert_eq!(response.text(), "short url cannot be empty");

    let response = server.get("/s/").await;
    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_redirect_store_failure() {
    let server = common::failing_server();

    let response = server.get("/s/anything").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.text(), "failed to retrieve url");
}

#[tokio::test]
async fn test_concurrent_shortens_are_independent() {
    let (server, store) = common::memory_server(false);

    let first = server
        .post("/shorten")
        .add_header("Host", "short.ly")
        .form(&[("url", "https://one.example")]);
    let second = server
        .post("/shorten")
        .add_header("Host", "short.ly")
        .form(&[("url", "https://two.example")]);

    let (first, second) = tokio::join!(first.into_future(), second.into_future());

    let first_id = common::id_from_short_url(&first.text());
    let second_id = common::id_from_short_url(&second.text());
    assert_ne!(first_id, second_id);
    assert_eq!(store.len().await, 2);

    let response = server.get(&format!("/s/{first_id}")).await;
    assert_eq!(response.header("location"), "https://one.example");

    let response = server.get(&format!("/s/{second_id}")).await;
    assert_eq!(response.header("location"), "https://two.example");
}
