mod common;

use axum::http::StatusCode;
use snip::telemetry::build_metrics_recorder;

#[tokio::test]
async fn test_home_renders_form() {
    let (server, _store) = common::memory_server(false);

    let response = server.get("/").await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("action=\"/shorten\""));
    assert!(body.contains("name=\"url\""));
}

#[tokio::test]
async fn test_metrics_endpoint() {
    let (server, _store) = common::memory_server(false);

    let response = server.get("/metrics").await;

    response.assert_status_ok();
    let content_type = response.header("content-type");
    assert!(content_type.to_str().unwrap().starts_with("text/plain"));
}

#[tokio::test]
async fn test_metrics_record_route_templates() {
    let recorder = build_metrics_recorder().unwrap();
    let server = common::metrics_server(recorder.handle());
    let _guard = metrics::set_default_local_recorder(&recorder);

    let shortened = server
        .post("/shorten")
        .add_header("Host", "short.ly")
        .form(&[("url", "https://example.com")])
        .await;
    shortened.assert_status_ok();
    let id = common::id_from_short_url(&shortened.text());

    server
        .get(&format!("/s/{id}"))
        .await
        .assert_status(StatusCode::FOUND);
    server
        .get("/s/00000000-0000-0000-0000-000000000000")
        .await
        .assert_status(StatusCode::NOT_FOUND);
    server.get("/nope").await.assert_status(StatusCode::NOT_FOUND);

    let body = server.get("/metrics").await.text();

    let requests: Vec<&str> = body
        .lines()
        .filter(|l| l.starts_with("urlshortener_requests_total{"))
        .collect();
    assert!(
        requests
            .iter()
            .any(|l| l.contains("path=\"/s/{id}\"") && l.contains("status=\"302\""))
    );
    assert!(
        requests
            .iter()
            .any(|l| l.contains("path=\"/shorten\"") && l.contains("method=\"POST\""))
    );
    assert!(!body.contains(&id));
    assert!(!body.contains("00000000-0000"));
    assert!(!body.contains("/nope"));

    assert!(body.contains("urlshortener_request_duration_seconds_bucket"));
    assert!(body.contains("urlshortener_links_created_total 1"));
    assert!(body.contains("urlshortener_redirects_total{outcome=\"found\"} 1"));
    assert!(body.contains("urlshortener_redirects_total{outcome=\"not_found\"} 1"));
}

#[tokio::test]
async fn test_unknown_route() {
    let (server, _store) = common::memory_server(false);

    let response = server.get("/nope").await;

    response.assert_status(StatusCode::NOT_FOUND);
}
