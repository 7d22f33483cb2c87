//! Author lookup endpoints (transient store)

use axum::{
    Json,
    extract::{Path, State},
};
use booky_types::Author;
use serde::{Deserialize, Serialize};

use crate::{
    AppState,
    handlers::utils::{Lookup, parse_id},
};

#[derive(Debug, Serialize, Deserialize)]
pub struct AuthorByIdResponse {
    pub author: Vec<Author>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AuthorsByBookResponse {
    pub authors: Vec<Author>,
}

/// `GET /author/is/{id}`
#[tracing::instrument(skip(state))]
pub async fn get_author_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<Lookup<AuthorByIdResponse>> {
    let authors = state.transient.authors_by_id(parse_id(&id)).await;

    Json(Lookup::from_matches(
        authors,
        |author| AuthorByIdResponse { author },
        || format!("No author found with id {}", id),
    ))
}

/// `GET /author/book/{isbn}`: authors whose book list holds the ISBN
#[tracing::instrument(skip(state))]
pub async fn get_authors_by_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> Json<Lookup<AuthorsByBookResponse>> {
    let authors = state.transient.authors_of_book(&isbn).await;

    Json(Lookup::from_matches(
        authors,
        |authors| AuthorsByBookResponse { authors },
        || format!("No author found for the book of {}", isbn),
    ))
}
