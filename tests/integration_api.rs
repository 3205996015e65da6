//! API Integration Tests
//!
//! Drive the full router over in-memory stores.

use axum::body::{to_bytes, Body};
use axum::http::StatusCode;
use serde_json::{json, Value};
use tower::util::ServiceExt;

mod common;

use common::{empty_request, json_request, read_json, test_app};

#[tokio::test]
async fn test_pokemon_crud_e2e() {
    let app = test_app();

    // 1. Create
    let req = json_request(
        "POST",
        "/api/pokemon/create",
        &json!({"name": "pikachu", "type": "electric"}),
    );
    let response = app.clone().oneshot(req).await.unwrap();
    let created = read_json(response, StatusCode::CREATED).await;
    let id = created["id"].as_i64().unwrap();
    assert!(id > 0);
    assert_eq!(created["name"], "pikachu");
    assert_eq!(created["type"], "electric");

    // 2. Read back
    let req = empty_request("GET", &format!("/api/pokemon/{}", id));
    let response = app.clone().oneshot(req).await.unwrap();
    let fetched = read_json(response, StatusCode::OK).await;
    assert_eq!(fetched, created);

    // 3. Update
    let req = json_request(
        "PUT",
        &format!("/api/pokemon/{}/update", id),
        &json!({"name": "raichu", "type": "electric"}),
    );
    let response = app.clone().oneshot(req).await.unwrap();
    let updated = read_json(response, StatusCode::OK).await;
    assert_eq!(updated["id"], id);
    assert_eq!(updated["name"], "raichu");

    // 4. Read reflects the update
    let req = empty_request("GET", &format!("/api/pokemon/{}", id));
    let response = app.clone().oneshot(req).await.unwrap();
    let fetched = read_json(response, StatusCode::OK).await;
    assert_eq!(fetched["name"], "raichu");

    // 5. Delete, empty 200 body
    let req = empty_request("DELETE", &format!("/api/pokemon/{}/delete", id));
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(body.is_empty());

    // 6. Terminal read fails
    let req = empty_request("GET", &format!("/api/pokemon/{}", id));
    let response = app.clone().oneshot(req).await.unwrap();
    let error = read_json(response, StatusCode::NOT_FOUND).await;
    assert_eq!(error["error_code"], "pokemon_not_found");
}

#[tokio::test]
async fn test_pokemon_listing_and_pagination() {
    let app = test_app();

    // Identical payloads are fine; duplicates are allowed
    for _ in 0..3 {
        let req = json_request(
            "POST",
            "/api/pokemon/create",
            &json!({"name": "pikachu", "type": "electric"}),
        );
        let response = app.clone().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    // Default paging: everything on one page
    let req = empty_request("GET", "/api/pokemon");
    let response = app.clone().oneshot(req).await.unwrap();
    let page = read_json(response, StatusCode::OK).await;
    assert_eq!(page["content"].as_array().unwrap().len(), 3);
    assert_eq!(page["pageNo"], 1);
    assert_eq!(page["pageSize"], 10);
    assert_eq!(page["totalElements"], 3);
    assert_eq!(page["totalPages"], 1);
    assert_eq!(page["last"], true);

    // Two-page split; the query-string names land in the envelope
    let req = empty_request("GET", "/api/pokemon?pageNo=1&pageSize=2");
    let response = app.clone().oneshot(req).await.unwrap();
    let page = read_json(response, StatusCode::OK).await;
    assert_eq!(page["content"].as_array().unwrap().len(), 2);
    assert_eq!(page["pageNo"], 1);
    assert_eq!(page["pageSize"], 2);
    assert_eq!(page["totalPages"], 2);
    assert_eq!(page["last"], false);

    let req = empty_request("GET", "/api/pokemon?pageNo=2&pageSize=2");
    let response = app.clone().oneshot(req).await.unwrap();
    let page = read_json(response, StatusCode::OK).await;
    assert_eq!(page["content"].as_array().unwrap().len(), 1);
    assert_eq!(page["last"], true);

    // Out-of-range page sizes are clamped, and the clamped size is echoed
    let req = empty_request("GET", "/api/pokemon?pageNo=1&pageSize=0");
    let response = app.clone().oneshot(req).await.unwrap();
    let page = read_json(response, StatusCode::OK).await;
    assert_eq!(page["pageSize"], 1);
    assert_eq!(page["content"].as_array().unwrap().len(), 1);

    let req = empty_request("GET", "/api/pokemon?pageNo=1&pageSize=1000");
    let response = app.clone().oneshot(req).await.unwrap();
    let page = read_json(response, StatusCode::OK).await;
    assert_eq!(page["pageSize"], 100);
    assert_eq!(page["content"].as_array().unwrap().len(), 3);

    // Pages are one-indexed
    let req = empty_request("GET", "/api/pokemon?pageNo=0&pageSize=2");
    let response = app.clone().oneshot(req).await.unwrap();
    let error = read_json(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(error["error_code"], "invalid_request");

    // Absurdly large page numbers are a client error, not a server fault
    let req = empty_request(
        "GET",
        &format!("/api/pokemon?pageNo={}&pageSize=100", i64::MAX),
    );
    let response = app.clone().oneshot(req).await.unwrap();
    let error = read_json(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(error["error_code"], "invalid_request");
}

#[tokio::test]
async fn test_review_crud_e2e() {
    let app = test_app();
    let pokemon_id = create_pokemon(&app).await;

    // 1. Create
    let req = json_request(
        "POST",
        &format!("/api/pokemon/{}/reviews", pokemon_id),
        &json!({"title": "title", "content": "content", "stars": 5}),
    );
    let response = app.clone().oneshot(req).await.unwrap();
    let created = read_json(response, StatusCode::CREATED).await;
    let review_id = created["id"].as_i64().unwrap();
    assert!(review_id > 0);
    assert_eq!(created["title"], "title");
    assert_eq!(created["content"], "content");
    assert_eq!(created["stars"], 5);

    // 2. Listed under the parent
    let req = empty_request("GET", &format!("/api/pokemon/{}/reviews", pokemon_id));
    let response = app.clone().oneshot(req).await.unwrap();
    let reviews = read_json(response, StatusCode::OK).await;
    let reviews = reviews.as_array().unwrap();
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0], created);

    // 3. Read by id
    let req = empty_request(
        "GET",
        &format!("/api/pokemon/{}/reviews/{}", pokemon_id, review_id),
    );
    let response = app.clone().oneshot(req).await.unwrap();
    let fetched = read_json(response, StatusCode::OK).await;
    assert_eq!(fetched, created);

    // 4. Update
    let req = json_request(
        "PUT",
        &format!("/api/pokemon/{}/reviews/{}", pokemon_id, review_id),
        &json!({"title": "better", "content": "much better", "stars": 4}),
    );
    let response = app.clone().oneshot(req).await.unwrap();
    let updated = read_json(response, StatusCode::OK).await;
    assert_eq!(updated["id"], review_id);
    assert_eq!(updated["title"], "better");
    assert_eq!(updated["stars"], 4);

    // 5. Delete, empty 200 body
    let req = empty_request(
        "DELETE",
        &format!("/api/pokemon/{}/reviews/{}", pokemon_id, review_id),
    );
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(body.is_empty());

    // 6. Terminal read fails
    let req = empty_request(
        "GET",
        &format!("/api/pokemon/{}/reviews/{}", pokemon_id, review_id),
    );
    let response = app.clone().oneshot(req).await.unwrap();
    let error = read_json(response, StatusCode::NOT_FOUND).await;
    assert_eq!(error["error_code"], "review_not_found");
}

#[tokio::test]
async fn test_review_ownership_mismatch() {
    let app = test_app();
    let owner_id = create_pokemon(&app).await;
    let other_id = create_pokemon(&app).await;

    let req = json_request(
        "POST",
        &format!("/api/pokemon/{}/reviews", owner_id),
        &json!({"title": "title", "content": "content", "stars": 5}),
    );
    let response = app.clone().oneshot(req).await.unwrap();
    let created = read_json(response, StatusCode::CREATED).await;
    let review_id = created["id"].as_i64().unwrap();

    // Reads, updates and deletes through the wrong parent are all rejected
    let req = empty_request(
        "GET",
        &format!("/api/pokemon/{}/reviews/{}", other_id, review_id),
    );
    let response = app.clone().oneshot(req).await.unwrap();
    let error = read_json(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(error["error_code"], "review_not_owned");

    let req = json_request(
        "PUT",
        &format!("/api/pokemon/{}/reviews/{}", other_id, review_id),
        &json!({"title": "x", "content": "y", "stars": 1}),
    );
    let response = app.clone().oneshot(req).await.unwrap();
    let error = read_json(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(error["error_code"], "review_not_owned");

    let req = empty_request(
        "DELETE",
        &format!("/api/pokemon/{}/reviews/{}", other_id, review_id),
    );
    let response = app.clone().oneshot(req).await.unwrap();
    let error = read_json(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(error["error_code"], "review_not_owned");

    // The review is untouched under its real parent
    let req = empty_request(
        "GET",
        &format!("/api/pokemon/{}/reviews/{}", owner_id, review_id),
    );
    let response = app.clone().oneshot(req).await.unwrap();
    let fetched = read_json(response, StatusCode::OK).await;
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_create_review_missing_parent() {
    let app = test_app();

    let req = json_request(
        "POST",
        "/api/pokemon/99/reviews",
        &json!({"title": "title", "content": "content", "stars": 5}),
    );
    let response = app.clone().oneshot(req).await.unwrap();
    let error = read_json(response, StatusCode::NOT_FOUND).await;
    assert_eq!(error["error_code"], "pokemon_not_found");
}

#[tokio::test]
async fn test_delete_pokemon_removes_its_reviews() {
    let app = test_app();
    let pokemon_id = create_pokemon(&app).await;

    let req = json_request(
        "POST",
        &format!("/api/pokemon/{}/reviews", pokemon_id),
        &json!({"title": "title", "content": "content", "stars": 5}),
    );
    let response = app.clone().oneshot(req).await.unwrap();
    let created = read_json(response, StatusCode::CREATED).await;
    let review_id = created["id"].as_i64().unwrap();

    let req = empty_request("DELETE", &format!("/api/pokemon/{}/delete", pokemon_id));
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Listing under the dead parent is empty, and the review itself is gone
    let req = empty_request("GET", &format!("/api/pokemon/{}/reviews", pokemon_id));
    let response = app.clone().oneshot(req).await.unwrap();
    let reviews = read_json(response, StatusCode::OK).await;
    assert_eq!(reviews, Value::Array(vec![]));

    let req = empty_request(
        "GET",
        &format!("/api/pokemon/{}/reviews/{}", pokemon_id, review_id),
    );
    let response = app.clone().oneshot(req).await.unwrap();
    let error = read_json(response, StatusCode::NOT_FOUND).await;
    assert_eq!(error["error_code"], "review_not_found");
}

/// Create a pikachu and return its id
async fn create_pokemon(app: &axum::Router) -> i64 {
    let req = json_request(
        "POST",
        "/api/pokemon/create",
        &json!({"name": "pikachu", "type": "electric"}),
    );
    let response = app.clone().oneshot(req).await.unwrap();
    let created = read_json(response, StatusCode::CREATED).await;
    created["id"].as_i64().unwrap()
}
