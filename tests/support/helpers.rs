// tests/support/helpers.rs
use std::sync::Arc;

use axum::{
    Router,
    body::{self, Body},
    http::{Method, Request, StatusCode, header},
    response::Response,
};
use blog_core::application::{dates::DateNormalizer, services::ApplicationServices};
use blog_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use tower::util::ServiceExt as _;

use super::mocks::{BlogStore, FixedClock, PlainPasswordHasher};

/// Router wired to `store` for every repository port.
pub fn make_test_router(store: &Arc<BlogStore>) -> Router {
    let services = Arc::new(ApplicationServices::new(
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        Arc::new(PlainPasswordHasher),
        Arc::new(FixedClock),
        DateNormalizer::default(),
    ));

    build_router(HttpState { services }, &[])
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    app.clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap()
}

pub async fn json_body(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Sends the request and returns the status with the parsed JSON body.
pub async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let resp = send(app, method, uri, body).await;
    let status = resp.status();
    (status, json_body(resp).await)
}

/// Asserts the common error body shape and returns it for further checks.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, message: &str) -> Value {
    assert_eq!(resp.status(), expected_status);
    let json = json_body(resp).await;
    assert_eq!(json["error"], Value::Bool(true));
    assert_eq!(json["status"], expected_status.as_u16());
    assert_eq!(json["message"], message);
    json
}
