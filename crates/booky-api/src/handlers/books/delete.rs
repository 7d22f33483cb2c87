//! Delete book endpoint

use axum::{
    Json,
    extract::{Path, State},
};
use booky_types::Book;
use serde::{Deserialize, Serialize};

use crate::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteBookResponse {
    pub books: Vec<Book>,
}

/// `DELETE /book/delete/{isbn}`
///
/// Removes the book from the transient store only; the persistent catalogue
/// keeps it. Returns the remaining transient books in their original order.
#[tracing::instrument(skip(state))]
pub async fn delete_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> Json<DeleteBookResponse> {
    let books = state.transient.remove_book(&isbn).await;
    Json(DeleteBookResponse { books })
}
