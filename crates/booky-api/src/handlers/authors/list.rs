//! List all authors endpoint

use axum::{Json, extract::State};
use booky_types::Author;

use crate::{AppState, Result};

/// `GET /author`: every author in the persistent catalogue
#[tracing::instrument(skip(state))]
pub async fn list_authors(State(state): State<AppState>) -> Result<Json<Vec<Author>>> {
    Ok(Json(state.catalog.list_authors().await?))
}
