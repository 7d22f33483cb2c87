//! List all books endpoint

use axum::{Json, extract::State};
use booky_types::Book;

use crate::{AppState, Result};

/// `GET /`: every book in the persistent catalogue
#[tracing::instrument(skip(state))]
pub async fn list_books(State(state): State<AppState>) -> Result<Json<Vec<Book>>> {
    let books = state.catalog.list_books().await?;
    tracing::debug!(count = books.len(), "Listed books");
    Ok(Json(books))
}
