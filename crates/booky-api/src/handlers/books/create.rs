//! Create book endpoint

use axum::{Json, extract::State};
use booky_types::{Book, NewBookRequest};
use serde::{Deserialize, Serialize};

use crate::{AppState, Result};

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateBookResponse {
    pub books: Book,
    pub message: String,
}

/// `POST /book/new` with body `{"newBook": {...}}`
///
/// The book goes to the persistent catalogue only. Duplicate ISBNs are not
/// rejected.
#[tracing::instrument(skip(state))]
pub async fn create_book(
    State(state): State<AppState>,
    Json(request): Json<NewBookRequest>,
) -> Result<Json<CreateBookResponse>> {
    let book = request.new_book;
    book.validate()?;

    let created = state.catalog.insert_book(book).await?;
    tracing::info!(isbn = %created.isbn, "Book created");

    Ok(Json(CreateBookResponse { books: created, message: "Book was added!".to_string() }))
}
