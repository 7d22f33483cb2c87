//! Book routes: persistent lookups, transient language search and delete

use axum::http::StatusCode;
use serde_json::json;

use crate::framework::*;

fn new_book(isbn: &str, category: &[&str]) -> serde_json::Value {
    json!({
        "newBook": {
            "ISBN": isbn,
            "title": "Getting Started with Rust",
            "pubDate": "2022-03-01",
            "language": "english",
            "numPage": 320,
            "author": [1],
            "publications": 1,
            "category": category
        }
    })
}

#[tokio::test]
async fn test_unknown_isbn_returns_error_payload() {
    let state = create_test_state();
    let app = create_test_app(&state);

    for isbn in ["nope", "12345Book", "978-0-00-000000-0"] {
        let (status, body) = get(&app, &format!("/is/{}", isbn)).await;
        assert_eq!(status, StatusCode::OK);
        let message = body["error"].as_str().unwrap();
        assert!(message.contains(isbn), "message {:?} should name {}", message, isbn);
    }
}

#[tokio::test]
async fn test_create_then_get_by_isbn() {
    let state = create_test_state();
    let app = create_test_app(&state);

    let (status, body) = send(&app, "POST", "/book/new", Some(new_book("rust-101", &["tech"]))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["books"]["ISBN"], "rust-101");
    assert_eq!(body["message"], "Book was added!");

    let (status, body) = get(&app, "/is/rust-101").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["book"]["ISBN"], "rust-101");
    assert_eq!(body["book"]["numPage"], 320);

    let (_, body) = get(&app, "/").await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_then_get_with_sqlite_catalog() {
    let state = create_sqlite_test_state();
    let app = create_test_app(&state);

    send(&app, "POST", "/book/new", Some(new_book("sql-1", &["db"]))).await;

    let (_, body) = get(&app, "/is/sql-1").await;
    assert_eq!(body["book"]["ISBN"], "sql-1");
}

#[tokio::test]
async fn test_get_by_category() {
    let state = create_test_state();
    let app = create_test_app(&state);

    send(&app, "POST", "/book/new", Some(new_book("a", &["fiction"]))).await;
    send(&app, "POST", "/book/new", Some(new_book("b", &["tech", "space"]))).await;

    let (_, body) = get(&app, "/c/space").await;
    assert_eq!(body["book"]["ISBN"], "b");

    let (status, body) = get(&app, "/c/poetry").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["error"], "No book found for the category of poetry");
}

#[tokio::test]
async fn test_create_rejects_empty_isbn() {
    let state = create_test_state();
    let app = create_test_app(&state);

    let (status, body) = send(&app, "POST", "/book/new", Some(new_book("", &[]))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("ISBN"));

    let (_, body) = get(&app, "/").await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_rejects_malformed_body() {
    let state = create_test_state();
    let app = create_test_app(&state);

    let (status, _) = send(&app, "POST", "/book/new", Some(json!({ "book": {} }))).await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn test_language_is_substring_match() {
    let state = create_test_state();
    let app = create_test_app(&state);

    let (status, body) = get(&app, "/l/en").await;
    assert_eq!(status, StatusCode::OK);
    let books = body["book"].as_array().unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0]["language"], "english");

    let (_, body) = get(&app, "/l/hin").await;
    assert_eq!(body["book"][0]["ISBN"], "secretBook");

    let (_, body) = get(&app, "/l/klingon").await;
    assert!(body["error"].as_str().unwrap().contains("klingon"));
}

#[tokio::test]
async fn test_language_search_ignores_persistent_catalog() {
    let state = create_test_state();
    let app = create_test_app(&state);

    let mut book = new_book("persisted-only", &[]);
    book["newBook"]["language"] = json!("esperanto");
    send(&app, "POST", "/book/new", Some(book)).await;

    let (_, body) = get(&app, "/l/esperanto").await;
    assert!(body.get("error").is_some());
}

#[tokio::test]
async fn test_delete_book_keeps_order_and_persistent_copy() {
    let state = create_test_state();
    let app = create_test_app(&state);
    send(&app, "POST", "/book/new", Some(new_book("12345Book", &[]))).await;

    let before: Vec<String> = state
        .transient
        .snapshot()
        .await
        .books
        .into_iter()
        .map(|b| b.isbn)
        .filter(|isbn| isbn != "12345Book")
        .collect();

    let (status, body) = send(&app, "DELETE", "/book/delete/12345Book", None).await;
    assert_eq!(status, StatusCode::OK);
    let after: Vec<String> = body["books"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["ISBN"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(after, before);

    // The persistent catalogue is untouched
    let (_, body) = get(&app, "/is/12345Book").await;
    assert_eq!(body["book"]["ISBN"], "12345Book");
}
