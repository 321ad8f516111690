#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use snipstash::router::init_router;
use snipstash::snipstash_config::JwtConfig;
use snipstash::snipstash_db::memory::{MemoryItemStore, MemoryUserStore};
use snipstash::snipstash_db::{ItemStore, UserStore};
use snipstash::state::AppState;

pub const TEST_SECRET: &str = "integration-test-secret";

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_SECRET.to_string(),
        access_token_expiry: 3600,
    }
}

/// Router backed by fresh in-memory stores.
pub fn setup_test_app() -> axum::Router {
    setup_test_app_with(
        Arc::new(MemoryUserStore::new()),
        Arc::new(MemoryItemStore::new()),
    )
}

pub fn setup_test_app_with(users: Arc<dyn UserStore>, items: Arc<dyn ItemStore>) -> axum::Router {
    init_router(AppState::new(users, items, test_jwt_config()))
}

pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn send(app: &axum::Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Sends the request and returns status plus parsed JSON body.
pub async fn call(app: &axum::Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = send(app, request).await;
    let status = response.status();
    (status, body_json(response).await)
}

pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}
