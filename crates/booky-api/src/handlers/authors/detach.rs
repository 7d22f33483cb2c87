//! Detach an author from a book

use axum::{
    Json,
    extract::{Path, State},
};
use booky_types::{Author, Book};
use serde::{Deserialize, Serialize};

use crate::{AppState, handlers::utils::parse_id};

#[derive(Debug, Deserialize)]
pub struct DetachPath {
    pub isbn: String,
    pub author_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DetachAuthorResponse {
    pub book: Vec<Book>,
    pub author: Vec<Author>,
    pub message: String,
}

/// `DELETE /book/delete/author/{isbn}/{author_id}`
///
/// Drops the author id from the book and the ISBN from the author, both in
/// the transient store. Repeating the call changes nothing further.
#[tracing::instrument(skip(state))]
pub async fn detach_author(
    State(state): State<AppState>,
    Path(path): Path<DetachPath>,
) -> Json<DetachAuthorResponse> {
    let snapshot = state.transient.detach_author(&path.isbn, parse_id(&path.author_id)).await;

    Json(DetachAuthorResponse {
        book: snapshot.books,
        author: snapshot.authors,
        message: "Author was deleted!".to_string(),
    })
}
