#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header::CONTENT_TYPE},
};
use order::{
    abstract_trait::random::DynRandomSource,
    chaos::{ChaosConfig, ThreadRandom},
    di::DependenciesInjectDeps,
    handler::AppRouter,
    state::AppState,
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

pub fn app_with(deps: DependenciesInjectDeps, chaos: ChaosConfig, random: DynRandomSource) -> Router {
    AppRouter::build(Arc::new(AppState::new(deps, chaos, random)))
}

/// In-memory store, no simulated faults.
pub fn app() -> Router {
    app_with(
        DependenciesInjectDeps::in_memory(),
        ChaosConfig::disabled(),
        Arc::new(ThreadRandom),
    )
}

pub async fn send_raw(
    app: &Router,
    method: Method,
    uri: &str,
    content_type: Option<&str>,
    body: impl Into<Body>,
) -> (StatusCode, String) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header(CONTENT_TYPE, content_type);
    }

    let response = app
        .clone()
        .oneshot(builder.body(body.into()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

/// Sends an optional JSON body and parses the reply. An empty reply parses as `Null`.
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, text) = match body {
        Some(body) => {
            send_raw(app, method, uri, Some("application/json"), body.to_string()).await
        }
        None => send_raw(app, method, uri, None, Body::empty()).await,
    };

    let json = if text.is_empty() {
        Value::Null
    } else {
        serde_json::from_str(&text).unwrap()
    };

    (status, json)
}

pub async fn create(app: &Router, body: Value) -> Value {
    let (status, json) = send(app, Method::POST, "/orders", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "unexpected create reply: {json}");
    json
}
