//! Book lookup endpoints
//!
//! ISBN and category lookups read the persistent catalogue and return the
//! first match. Language lookups scan the transient store and return every
//! book whose language contains the requested text.

use axum::{
    Json,
    extract::{Path, State},
};
use booky_store::BookFilter;
use booky_types::Book;
use serde::{Deserialize, Serialize};

use crate::{AppState, Result, handlers::utils::Lookup};

#[derive(Debug, Serialize, Deserialize)]
pub struct BookResponse {
    pub book: Book,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BooksResponse {
    pub book: Vec<Book>,
}

/// `GET /is/{isbn}`
#[tracing::instrument(skip(state))]
pub async fn get_book_by_isbn(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> Result<Json<Lookup<BookResponse>>> {
    let found = state.catalog.find_book(&BookFilter::Isbn(isbn.clone())).await?;

    Ok(Json(match found {
        Some(book) => Lookup::Found(BookResponse { book }),
        None => Lookup::missing(format!("No book found for the ISBN of {}", isbn)),
    }))
}

/// `GET /c/{category}`
#[tracing::instrument(skip(state))]
pub async fn get_book_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<Lookup<BookResponse>>> {
    let found = state.catalog.find_book(&BookFilter::Category(category.clone())).await?;

    Ok(Json(match found {
        Some(book) => Lookup::Found(BookResponse { book }),
        None => Lookup::missing(format!("No book found for the category of {}", category)),
    }))
}

/// `GET /l/{language}`
#[tracing::instrument(skip(state))]
pub async fn get_books_by_language(
    State(state): State<AppState>,
    Path(language): Path<String>,
) -> Json<Lookup<BooksResponse>> {
    let books = state.transient.books_by_language(&language).await;

    Json(Lookup::from_matches(
        books,
        |book| BooksResponse { book },
        || format!("No book found for the language of {}", language),
    ))
}
