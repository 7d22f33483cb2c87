//! Attach a publication to a book

use axum::{
    Json,
    extract::{Path, State},
};
use booky_types::{AttachPublicationRequest, Book, Publication};
use serde::{Deserialize, Serialize};

use crate::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct AttachPublicationResponse {
    pub books: Vec<Book>,
    pub publications: Vec<Publication>,
    pub message: String,
}

/// `PUT /publication/update/book/{isbn}` with body `{"pubId": <id>}`
///
/// Appends the ISBN to the publication's book list and sets the book's
/// publication id. The sides are applied independently: an unknown ISBN
/// still updates the publication, and an unknown id leaves the book alone.
/// Either way the full transient book and publication lists come back.
#[tracing::instrument(skip(state))]
pub async fn attach_publication(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
    Json(request): Json<AttachPublicationRequest>,
) -> Json<AttachPublicationResponse> {
    let snapshot = state.transient.attach_publication(&isbn, request.pub_id).await;

    Json(AttachPublicationResponse {
        books: snapshot.books,
        publications: snapshot.publications,
        message: "Successfully updated publications".to_string(),
    })
}
