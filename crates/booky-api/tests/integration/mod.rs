//! Integration Test Framework
//!
//! Common utilities for integration tests:
//! - App state over the in-memory backend and the bundled seed
//! - Request helpers returning status and parsed JSON body

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use booky_api::{AppState, create_router};
use booky_config::Config;
use booky_store::{CatalogStore, MemoryBackend, SqliteBackend, TransientStore};
use serde_json::Value;
use tower::ServiceExt;

/// Test state with an empty in-memory catalogue and the bundled seed
pub fn create_test_state() -> AppState {
    create_test_state_with_catalog(Arc::new(MemoryBackend::new()))
}

/// Test state over a private in-memory SQLite catalogue
pub fn create_sqlite_test_state() -> AppState {
    create_test_state_with_catalog(Arc::new(SqliteBackend::open_in_memory().unwrap()))
}

pub fn create_test_state_with_catalog(catalog: Arc<dyn CatalogStore>) -> AppState {
    AppState::new(
        catalog,
        Arc::new(TransientStore::bundled().unwrap()),
        Arc::new(Config::default()),
    )
}

pub fn create_test_app(state: &AppState) -> Router {
    create_router(state.clone())
}

/// Send a request and return the status plus the parsed JSON body
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&json).unwrap())
        },
        None => Body::empty(),
    };

    let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        // Framework rejections (e.g. malformed JSON bodies) reply with plain text
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, "GET", uri, None).await
}

/// Find the record with `key == value` in a JSON array
pub fn find<'a>(records: &'a Value, key: &str, value: &Value) -> Option<&'a Value> {
    records.as_array()?.iter().find(|record| &record[key] == value)
}
