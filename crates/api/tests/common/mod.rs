#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use itemreg_api::config::{LogFormat, ServerConfig};
use itemreg_api::router::build_app_router;
use itemreg_api::state::AppState;
use itemreg_core::item::ItemSchema;
use serde_json::Value;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults for the given schema.
pub fn test_config(schema: ItemSchema) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        schema,
        require_read_body: true,
        log_format: LogFormat::Text,
    }
}

/// Build the full application router (same middleware stack as production)
/// over fresh, empty registries.
pub fn build_test_app(config: ServerConfig) -> Router {
    build_app_router(AppState::new(config))
}

/// Simple-schema app with the read-body requirement on.
pub fn simple_app() -> Router {
    build_test_app(test_config(ItemSchema::Simple))
}

/// Validated-schema app with the read-body requirement on.
pub fn stock_app() -> Router {
    build_test_app(test_config(ItemSchema::Validated))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<&Value>) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(json).unwrap())
        }
        None => Body::empty(),
    };
    app.clone().oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

/// GET with a JSON body (the item read endpoint takes one).
pub async fn get_json(app: &Router, uri: &str, body: &Value) -> Response<Body> {
    send(app, Method::GET, uri, Some(body)).await
}

pub async fn post_json(app: &Router, uri: &str, body: &Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: &Router, uri: &str, body: &Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

/// Send a raw body string with a JSON content type.
pub async fn send_raw(app: &Router, method: Method, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
