//! # Booky API - REST Layer
//!
//! Routes requests for books, authors and publications to one of two
//! stores. Plain listings and single-record lookups go to the persistent
//! catalogue; relationship lookups and edits go to the transient store.

use std::sync::Arc;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use booky_config::Config;
use booky_store::{CatalogStore, TransientStore};
use booky_types::{StoreError, ValidationError};
use serde::Serialize;
use thiserror::Error;
use tower_http::{compression::CompressionLayer, cors::CorsLayer};
use tracing::info;

pub mod handlers;
pub mod health;

use handlers::{authors, books, publications};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::InvalidRequest(err.to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Internal(format!("Store error: {}", err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        (status, Json(ErrorResponse { error: self.to_string() })).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub type Result<T> = std::result::Result<T, ApiError>;

/// Application state
#[derive(Clone)]
pub struct AppState {
    /// Persistent catalogue
    pub catalog: Arc<dyn CatalogStore>,
    /// Transient relational store, seeded at startup
    pub transient: Arc<TransientStore>,
    pub config: Arc<Config>,
    pub health_tracker: Arc<health::HealthTracker>,
}

impl AppState {
    pub fn new(
        catalog: Arc<dyn CatalogStore>,
        transient: Arc<TransientStore>,
        config: Arc<Config>,
    ) -> Self {
        Self { catalog, transient, config, health_tracker: Arc::new(health::HealthTracker::new()) }
    }
}

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check_handler))
        // Books
        .route("/", get(books::list::list_books))
        .route("/is/{isbn}", get(books::get::get_book_by_isbn))
        .route("/c/{category}", get(books::get::get_book_by_category))
        .route("/l/{language}", get(books::get::get_books_by_language))
        .route("/book/new", post(books::create::create_book))
        .route("/book/delete/{isbn}", delete(books::delete::delete_book))
        .route("/book/delete/author/{isbn}/{author_id}", delete(authors::detach::detach_author))
        // Authors
        .route("/author", get(authors::list::list_authors))
        .route("/author/is/{id}", get(authors::get::get_author_by_id))
        .route("/author/book/{isbn}", get(authors::get::get_authors_by_book))
        .route("/author/new", post(authors::create::create_author))
        // Publications
        .route("/publications", get(publications::list::list_publications))
        .route("/publications/is/{id}", get(publications::get::get_publication_by_id))
        .route("/publications/book/{isbn}", get(publications::get::get_publications_by_book))
        .route("/publication/new", post(publications::create::create_publication))
        .route(
            "/publication/update/book/{isbn}",
            put(publications::attach::attach_publication),
        )
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
}

/// Graceful shutdown signal handler
///
/// Waits for SIGTERM or SIGINT (Ctrl+C).
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }

    info!("Shutdown signal received, draining connections...");
}

/// Start the REST API server
pub async fn serve(state: AppState) -> anyhow::Result<()> {
    let addr = format!("{}:{}", state.config.server.host, state.config.server.port);

    state.health_tracker.set_ready(true);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server is up and running on {}", addr);

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    info!("Server stopped");
    Ok(())
}
