//! Publication routes, including the publication/book attach edit

use axum::http::StatusCode;
use serde_json::json;

use crate::framework::*;

#[tokio::test]
async fn test_publication_lookups() {
    let state = create_test_state();
    let app = create_test_app(&state);

    let (_, body) = get(&app, "/publications/is/1").await;
    assert_eq!(body["publication"][0]["name"], "writex");

    let (_, body) = get(&app, "/publications/is/99").await;
    assert_eq!(body["error"], "No publication found with id 99");

    let (_, body) = get(&app, "/publications/book/secretBook").await;
    assert_eq!(body["publication"][0]["id"], 2);

    let (_, body) = get(&app, "/publications/book/unknown").await;
    assert!(body["error"].as_str().unwrap().contains("unknown"));
}

#[tokio::test]
async fn test_new_publication_goes_to_transient_store() {
    let state = create_test_state();
    let app = create_test_app(&state);

    let body = json!({ "id": 3, "name": "inkwell", "books": [] });
    let (status, list) = send(&app, "POST", "/publication/new", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(find(&list, "id", &json!(3)).is_some());

    let (_, body) = get(&app, "/publications/is/3").await;
    assert_eq!(body["publication"][0]["name"], "inkwell");

    // The persistent listing does not see it
    let (_, persisted) = get(&app, "/publications").await;
    assert_eq!(persisted, json!([]));
}

#[tokio::test]
async fn test_new_publication_body_is_stored_as_given() {
    let state = create_test_state();
    let app = create_test_app(&state);

    let (status, list) = send(&app, "POST", "/publication/new", Some(json!({ "id": 4 }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(find(&list, "id", &json!(4)).unwrap()["name"], "");
}

#[tokio::test]
async fn test_persistent_publications_listing() {
    let state = create_test_state();
    state
        .catalog
        .insert_publication(booky_types::Publication {
            id: 5,
            name: "archive".to_string(),
            books: vec![],
        })
        .await
        .unwrap();
    let app = create_test_app(&state);

    let (_, body) = get(&app, "/publications").await;
    assert_eq!(body[0]["name"], "archive");
}

#[tokio::test]
async fn test_attach_publication_updates_both_sides() {
    let state = create_test_state();
    let app = create_test_app(&state);

    let (status, body) = send(
        &app,
        "PUT",
        "/publication/update/book/12345Book",
        Some(json!({ "pubId": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Successfully updated publications");

    let publication = find(&body["publications"], "id", &json!(2)).unwrap();
    assert!(publication["books"].as_array().unwrap().contains(&json!("12345Book")));
    let book = find(&body["books"], "ISBN", &json!("12345Book")).unwrap();
    assert_eq!(book["publications"], 2);

    let (_, body) = get(&app, "/publications/book/12345Book").await;
    assert_eq!(body["publication"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_attach_unknown_publication_leaves_book_alone() {
    let state = create_test_state();
    let app = create_test_app(&state);
    let before = state.transient.snapshot().await;

    let (status, body) = send(
        &app,
        "PUT",
        "/publication/update/book/12345Book",
        Some(json!({ "pubId": 404 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Successfully updated publications");

    let book = find(&body["books"], "ISBN", &json!("12345Book")).unwrap();
    assert_eq!(book["publications"], 1);
    assert_eq!(state.transient.snapshot().await, before);
}

#[tokio::test]
async fn test_attach_unknown_book_still_updates_publication() {
    let state = create_test_state();
    let app = create_test_app(&state);
    let before = state.transient.snapshot().await;

    let (status, body) = send(
        &app,
        "PUT",
        "/publication/update/book/ghostBook",
        Some(json!({ "pubId": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.get("error").is_none());
    assert_eq!(body["message"], "Successfully updated publications");

    let publication = find(&body["publications"], "id", &json!(1)).unwrap();
    assert_eq!(publication["books"], json!(["12345Book", "ghostBook"]));
    assert_eq!(state.transient.snapshot().await.books, before.books);
}

#[tokio::test]
async fn test_attach_twice_lists_isbn_twice() {
    let state = create_test_state();
    let app = create_test_app(&state);

    // The seed already lists 12345Book on publication 1
    send(&app, "PUT", "/publication/update/book/12345Book", Some(json!({ "pubId": 1 }))).await;

    let (_, body) = get(&app, "/publications/is/1").await;
    assert_eq!(body["publication"][0]["books"], json!(["12345Book", "12345Book"]));
}

#[tokio::test]
async fn test_reset_discards_transient_edits() {
    let state = create_test_state();
    let app = create_test_app(&state);
    let seed = state.transient.snapshot().await;

    send(&app, "DELETE", "/book/delete/secretBook", None).await;
    send(&app, "PUT", "/publication/update/book/12345Book", Some(json!({ "pubId": 2 }))).await;

    state.transient.reset().await;
    assert_eq!(state.transient.snapshot().await, seed);
}
