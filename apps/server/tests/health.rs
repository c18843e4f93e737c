use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
};
use coinswap_market_data::StaticPriceProvider;
use coinswap_server::{api::app_router, build_state_with_provider, config::Config, AppState};
use tempfile::{tempdir, TempDir};
use tower::ServiceExt;

async fn build_test_router(provider: StaticPriceProvider) -> (axum::Router, TempDir) {
    let (app, _, tmp) = build_test_app(provider).await;
    (app, tmp)
}

async fn build_test_app(provider: StaticPriceProvider) -> (axum::Router, Arc<AppState>, TempDir) {
    let tmp = tempdir().unwrap();
    let config = Config {
        prefs_path: tmp.path().join("preferences.json"),
        icon_base_url: "http://127.0.0.1:1/icons".to_string(),
        ..Config::default()
    };
    let state = build_state_with_provider(&config, Arc::new(provider))
        .await
        .unwrap();
    (app_router(state.clone(), &config), state, tmp)
}

fn snapshot() -> StaticPriceProvider {
    StaticPriceProvider::from_json(
        r#"[
            {"currency": "ETH", "date": "2023-08-29T07:10:52.000Z", "price": 2000},
            {"currency": "USDC", "date": "2023-08-29T07:10:40.000Z", "price": 1}
        ]"#,
    )
    .unwrap()
}

async fn send(app: &axum::Router, method: Method, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

#[tokio::test]
async fn healthz_reports_token_count() {
    let (app, _tmp) = build_test_router(snapshot()).await;
    let (status, body) = send(&app, Method::GET, "/api/v1/healthz").await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["tokenCount"], 2);
}

#[tokio::test]
async fn failed_price_load_still_serves() {
    let (app, _tmp) = build_test_router(StaticPriceProvider::failing("HTTP 500")).await;

    let (status, body) = send(&app, Method::GET, "/api/v1/tokens").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"[]");

    let (_, body) = send(&app, Method::GET, "/api/v1/notifications").await;
    let toasts: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(toasts[0]["type"], "error");
    assert_eq!(toasts[0]["message"], "Failed to load token prices.");
}

#[tokio::test]
async fn theme_defaults_and_toggles() {
    let (app, tmp) = build_test_router(snapshot()).await;

    let (_, body) = send(&app, Method::GET, "/api/v1/settings/theme").await;
    assert_eq!(body, br#"{"theme":"dark"}"#);

    let (status, body) = send(&app, Method::POST, "/api/v1/settings/theme/toggle").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, br#"{"theme":"light"}"#);

    let saved = std::fs::read_to_string(tmp.path().join("preferences.json")).unwrap();
    assert!(saved.contains("\"light\""));

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::PUT)
                .uri("/api/v1/settings/theme")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"theme":"dark"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let (_, body) = send(&app, Method::GET, "/api/v1/settings/theme").await;
    assert_eq!(body, br#"{"theme":"dark"}"#);
}

#[tokio::test]
async fn missing_icon_serves_placeholder() {
    let (app, _tmp) = build_test_router(snapshot()).await;
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/v1/icons/ETH")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "image/svg+xml"
    );
}

#[tokio::test]
async fn unknown_icon_symbols_are_not_looked_up() {
    let (app, state, _tmp) = build_test_app(snapshot()).await;

    for i in 0..50 {
        let uri = format!("/api/v1/icons/JUNK{}", i);
        let (status, body) = send(&app, Method::GET, &uri).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.starts_with(b"<svg"));
    }
    assert_eq!(state.icon_resolver.cached_count(), 0);

    send(&app, Method::GET, "/api/v1/icons/ETH").await;
    send(&app, Method::GET, "/api/v1/icons/USDC").await;
    assert_eq!(state.icon_resolver.cached_count(), 2);
}
