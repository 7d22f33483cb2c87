//! Author routes, including the author/book detach edit

use axum::http::StatusCode;
use serde_json::json;

use crate::framework::*;

#[tokio::test]
async fn test_create_and_list_authors() {
    let state = create_test_state();
    let app = create_test_app(&state);

    let body = json!({ "newAuthor": { "id": 10, "name": "Grace", "books": ["rust-101"] } });
    let (status, created) = send(&app, "POST", "/author/new", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["author"]["id"], 10);
    assert_eq!(created["message"], "Author was added!");

    let (_, authors) = get(&app, "/author").await;
    assert_eq!(authors, json!([{ "id": 10, "name": "Grace", "books": ["rust-101"] }]));

    // Persistent authors are not visible to the transient id lookup
    let (_, body) = get(&app, "/author/is/10").await;
    assert_eq!(body["error"], "No author found with id 10");
}

#[tokio::test]
async fn test_create_author_requires_name() {
    let state = create_test_state();
    let app = create_test_app(&state);

    let body = json!({ "newAuthor": { "id": 10, "name": "" } });
    let (status, _) = send(&app, "POST", "/author/new", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_author_by_id() {
    let state = create_test_state();
    let app = create_test_app(&state);

    let (_, body) = get(&app, "/author/is/2").await;
    assert_eq!(body["author"][0]["name"], "Elon Musk");

    let (_, body) = get(&app, "/author/is/2abc").await;
    assert_eq!(body["author"][0]["name"], "Elon Musk");

    let (status, body) = get(&app, "/author/is/not-a-number").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["error"].as_str().unwrap().contains("not-a-number"));
}

#[tokio::test]
async fn test_authors_of_book() {
    let state = create_test_state();
    let app = create_test_app(&state);

    let (_, body) = get(&app, "/author/book/12345Book").await;
    assert_eq!(body["authors"].as_array().unwrap().len(), 2);

    let (_, body) = get(&app, "/author/book/unknown").await;
    assert_eq!(body["error"], "No author found for the book of unknown");
}

#[tokio::test]
async fn test_detach_author_updates_both_sides_and_is_idempotent() {
    let state = create_test_state();
    let app = create_test_app(&state);

    let (status, first) = send(&app, "DELETE", "/book/delete/author/12345Book/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["message"], "Author was deleted!");

    let book = find(&first["book"], "ISBN", &json!("12345Book")).unwrap();
    assert_eq!(book["author"], json!([2]));
    let author = find(&first["author"], "id", &json!(1)).unwrap();
    assert!(!author["books"].as_array().unwrap().contains(&json!("12345Book")));

    let (_, second) = send(&app, "DELETE", "/book/delete/author/12345Book/1", None).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_detach_with_bad_author_id_changes_nothing() {
    let state = create_test_state();
    let app = create_test_app(&state);
    let before = state.transient.snapshot().await;

    let (status, _) = send(&app, "DELETE", "/book/delete/author/12345Book/abc", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(state.transient.snapshot().await, before);
}

#[tokio::test]
async fn test_detach_reads_numeric_prefix_of_author_id() {
    let state = create_test_state();
    let app = create_test_app(&state);

    let (_, body) = send(&app, "DELETE", "/book/delete/author/12345Book/1x", None).await;

    let book = find(&body["book"], "ISBN", &json!("12345Book")).unwrap();
    assert_eq!(book["author"], json!([2]));
    let author = find(&body["author"], "id", &json!(1)).unwrap();
    assert_eq!(author["books"], json!(["secretBook"]));
}
