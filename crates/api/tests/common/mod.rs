#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use tracker_api::config::{Environment, ServerConfig, StoreBackend};
use tracker_api::router::build_app_router;
use tracker_api::state::AppState;
use tracker_db::{MemoryStore, Store};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: None,
        store_backend: StoreBackend::Memory,
        cors_origins: vec!["http://localhost:5173".to_string()],
        environment: Environment::Production,
    }
}

/// Build the full application router over a fresh in-memory store.
///
/// The store handle is returned too so tests can seed data or close it to
/// simulate an unavailable backend.
pub fn build_test_app() -> (Router, Arc<MemoryStore>) {
    build_test_app_with(test_config())
}

pub fn build_test_app_with(config: ServerConfig) -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let state = AppState {
        store: Arc::clone(&store) as Arc<dyn Store>,
        config: Arc::new(config),
    };
    (build_app_router(state), store)
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn delete(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::PUT, uri, body).await
}

async fn send_json(
    app: &Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Create a project through the API and return its `data` object.
pub async fn create_project(app: &Router, title: &str) -> serde_json::Value {
    let response = post_json(app, "/api/projects", serde_json::json!({ "title": title })).await;
    assert_eq!(response.status(), 201);
    body_json(response).await["data"].clone()
}

/// Create a task through the API and return its `data` object.
pub async fn create_task(app: &Router, title: &str, project_id: &str) -> serde_json::Value {
    let response = post_json(
        app,
        "/api/tasks",
        serde_json::json!({ "title": title, "projectId": project_id }),
    )
    .await;
    assert_eq!(response.status(), 201);
    body_json(response).await["data"].clone()
}
