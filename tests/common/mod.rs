//! Common test utilities

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use serde_json::Value;

use pokemon_review_api::api::{self, AppState};
use pokemon_review_api::service::{PokemonService, ReviewService};
use pokemon_review_api::store::MemoryStore;

/// Build the application router on fresh in-memory stores, with the same
/// /api prefix the binary serves.
pub fn test_app() -> Router {
    let store = Arc::new(MemoryStore::new());
    let state = AppState {
        pokemon: PokemonService::new(store.clone()),
        reviews: ReviewService::new(store.clone(), store),
    };

    Router::new()
        .nest("/api", api::create_router())
        .with_state(state)
}

/// Build a JSON request
pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request")
}

/// Build a bodyless request
pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("Failed to build request")
}

/// Read a response body as JSON, asserting the expected status first
pub async fn read_json(response: Response<Body>, expected: StatusCode) -> Value {
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    assert_eq!(
        status,
        expected,
        "unexpected status, body: {}",
        String::from_utf8_lossy(&body)
    );

    serde_json::from_slice(&body).expect("Body is not valid JSON")
}
