//! Publication lookup endpoints (transient store)

use axum::{
    Json,
    extract::{Path, State},
};
use booky_types::Publication;
use serde::{Deserialize, Serialize};

use crate::{
    AppState,
    handlers::utils::{Lookup, parse_id},
};

#[derive(Debug, Serialize, Deserialize)]
pub struct PublicationsResponse {
    pub publication: Vec<Publication>,
}

/// `GET /publications/is/{id}`
#[tracing::instrument(skip(state))]
pub async fn get_publication_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<Lookup<PublicationsResponse>> {
    let publications = state.transient.publications_by_id(parse_id(&id)).await;

    Json(Lookup::from_matches(
        publications,
        |publication| PublicationsResponse { publication },
        || format!("No publication found with id {}", id),
    ))
}

/// `GET /publications/book/{isbn}`
#[tracing::instrument(skip(state))]
pub async fn get_publications_by_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> Json<Lookup<PublicationsResponse>> {
    let publications = state.transient.publications_of_book(&isbn).await;

    Json(Lookup::from_matches(
        publications,
        |publication| PublicationsResponse { publication },
        || format!("No publication found for the book {}", isbn),
    ))
}
