//! Shared helpers for HTTP-level integration tests.
//!
//! Requests are sent straight to the router with `tower::ServiceExt`, no TCP
//! listener involved.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use resume_api::config::Config;
use resume_api::routes::{build_cors_layer, build_router};
use resume_api::service::ResumeResultService;
use resume_api::state::AppState;

/// Build a test `Config` with the dev-default CORS origin.
pub fn test_config() -> Config {
    Config {
        database_url: String::new(),
        port: 0,
        cors_origin: "http://localhost:3000".to_string(),
        rust_log: "info".to_string(),
    }
}

/// Build the application router over the given pool, with the same CORS
/// layer production uses, so tests exercise the real middleware stack.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        service: ResumeResultService::new(pool),
        config: config.clone(),
    };
    build_router(state).layer(build_cors_layer(&config))
}

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    send_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response {
    send_json(app, Method::PUT, uri, body).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

async fn send_json(app: Router, method: Method, uri: &str, body: Value) -> Response {
    app.oneshot(
        Request::builder()
            .method(method)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Read the whole response body and parse it as JSON.
pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Save one record through the API and return its assigned id.
pub async fn seed_record(pool: &PgPool, body: Value) -> i64 {
    let app = build_test_app(pool.clone());
    let response = post_json(app, "/resume", body).await;
    let json = body_json(response).await;
    assert_eq!(json["success"], true, "seed save must succeed: {json}");
    json["data"]["id"].as_i64().unwrap()
}
