//! Create author endpoint

use axum::{Json, extract::State};
use booky_types::{Author, NewAuthorRequest};
use serde::{Deserialize, Serialize};

use crate::{AppState, Result};

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateAuthorResponse {
    pub author: Author,
    pub message: String,
}

/// `POST /author/new` with body `{"newAuthor": {...}}`
#[tracing::instrument(skip(state))]
pub async fn create_author(
    State(state): State<AppState>,
    Json(request): Json<NewAuthorRequest>,
) -> Result<Json<CreateAuthorResponse>> {
    let author = request.new_author;
    author.validate()?;

    let created = state.catalog.insert_author(author).await?;
    tracing::info!(id = created.id, "Author created");

    Ok(Json(CreateAuthorResponse { author: created, message: "Author was added!".to_string() }))
}
