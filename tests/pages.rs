//! In-process router tests for the static pages and middleware.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt;

use app_web::{AppConfig, HttpServer};

mod common;

fn setup() -> axum::Router {
    HttpServer::new(AppConfig::default()).unwrap().router()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_landing_page() {
    let response = setup()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/html"));

    let body = body_text(response).await;
    assert!(body.contains("Welcome to the App"));
    assert!(body.contains("Getting started with Next.js and Flask"));
}

#[tokio::test]
async fn test_landing_page_is_stable() {
    let app = setup();
    let mut bodies = Vec::new();
    for _ in 0..5 {
        let response = app
            .clone()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        bodies.push(body_text(response).await);
    }
    assert!(bodies.windows(2).all(|w| w[0] == w[1]));
}

#[tokio::test]
async fn test_unknown_path_is_404() {
    let response = setup()
        .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("404"));
}

#[tokio::test]
async fn test_request_id_generated() {
    let response = setup()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let id = response.headers()["x-request-id"].to_str().unwrap();
    assert_eq!(id.len(), 36);
}

#[tokio::test]
async fn test_request_id_propagated() {
    let response = setup()
        .oneshot(
            Request::builder()
                .uri("/")
                .header("x-request-id", "trace-me-42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers()["x-request-id"], "trace-me-42");
}

#[tokio::test]
async fn test_invalid_config_rejected() {
    let mut config = AppConfig::default();
    config.upstream.health_url = "https://backend/health".into();
    assert!(HttpServer::new(config).is_err());
}

#[tokio::test]
async fn test_served_over_tcp() {
    let (addr, shutdown) = common::spawn_app(common::config_for(common::unused_addr())).await;

    let res = common::client()
        .get(format!("http://{}/", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    assert!(res.text().await.unwrap().contains("Welcome to the App"));

    shutdown.trigger();
}
