//! Startup wiring
//!
//! Builds both stores from configuration and assembles the API state:
//!
//! 1. Open the persistent catalogue named by `store.backend`
//! 2. Load the transient seed (`transient.seed_path` or the bundled fixture)
//! 3. Wrap everything in an [`AppState`]

use std::sync::Arc;

use anyhow::{Context, Result};
use booky_api::AppState;
use booky_config::Config;
use booky_store::{StorageFactory, TransientStore, seed};

/// Build the application state described by `config`
pub fn build_state(config: Config) -> Result<AppState> {
    let catalog =
        StorageFactory::from_settings(&config.store.backend, config.store.connection_string.clone())
            .with_context(|| format!("Failed to open {} store", config.store.backend))?;
    tracing::info!(backend = catalog.backend_name(), "Persistent store ready");

    let snapshot = seed::load(config.transient.seed_path.as_deref())
        .context("Failed to load transient seed")?;
    tracing::info!(
        books = snapshot.books.len(),
        authors = snapshot.authors.len(),
        publications = snapshot.publications.len(),
        "Transient store seeded"
    );

    Ok(AppState::new(catalog, Arc::new(TransientStore::new(snapshot)), Arc::new(config)))
}
