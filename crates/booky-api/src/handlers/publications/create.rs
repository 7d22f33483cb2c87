//! Create publication endpoint
//!
//! Unlike books and authors, new publications go to the transient store.
//! They are not visible through `GET /publications` and do not survive a
//! restart. The body is stored as given: there is no name check.

use axum::{Json, extract::State};
use booky_types::Publication;

use crate::AppState;

/// `POST /publication/new` with the publication as the body
///
/// Returns the full transient publication list.
#[tracing::instrument(skip(state))]
pub async fn create_publication(
    State(state): State<AppState>,
    Json(publication): Json<Publication>,
) -> Json<Vec<Publication>> {
    Json(state.transient.push_publication(publication).await)
}
