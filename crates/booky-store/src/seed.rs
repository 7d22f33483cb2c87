//! Seed data for the transient store
//!
//! The bundled fixture is compiled into the binary; a replacement can be
//! supplied as a JSON file with the same shape.

use std::path::Path;

use booky_types::{StoreError, StoreResult};

use crate::transient::Snapshot;

const BUNDLED_SEED: &str = include_str!("../fixtures/seed.json");

/// The fixture shipped with the crate
pub fn bundled() -> StoreResult<Snapshot> {
    Ok(serde_json::from_str(BUNDLED_SEED)?)
}

/// Load a seed from a JSON file
pub fn from_path(path: &Path) -> StoreResult<Snapshot> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        StoreError::Internal(format!("Failed to read seed file {}: {}", path.display(), e))
    })?;
    Ok(serde_json::from_str(&raw)?)
}

/// Load the seed named in configuration, falling back to the bundled fixture
pub fn load(path: Option<&Path>) -> StoreResult<Snapshot> {
    match path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading transient seed from file");
            from_path(path)
        },
        None => bundled(),
    }
}
