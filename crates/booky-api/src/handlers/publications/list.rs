//! List all publications endpoint

use axum::{Json, extract::State};
use booky_types::Publication;

use crate::{AppState, Result};

/// `GET /publications`: every publication in the persistent catalogue
#[tracing::instrument(skip(state))]
pub async fn list_publications(State(state): State<AppState>) -> Result<Json<Vec<Publication>>> {
    Ok(Json(state.catalog.list_publications().await?))
}
