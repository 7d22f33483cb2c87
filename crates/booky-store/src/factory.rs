//! Storage factory for creating persistent-store backends
//!
//! Keeps backend selection out of the binary and the API layer.

use std::{str::FromStr, sync::Arc};

use booky_types::{StoreError, StoreResult};

use crate::{CatalogStore, memory::MemoryBackend, sqlite::SqliteBackend};

/// Storage backend type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendType {
    /// In-memory storage (for testing and development)
    Memory,
    /// SQLite document tables (file or `:memory:`)
    Sqlite,
}

impl FromStr for BackendType {
    type Err = StoreError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" => Ok(BackendType::Memory),
            "sqlite" => Ok(BackendType::Sqlite),
            _ => Err(StoreError::Internal(format!("Unknown backend type: {}", s))),
        }
    }
}

impl BackendType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendType::Memory => "memory",
            BackendType::Sqlite => "sqlite",
        }
    }
}

/// Configuration for the persistent-store backend
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub backend: BackendType,
    /// Database location (required for sqlite)
    pub connection_string: Option<String>,
}

/// Storage factory for creating backend instances
pub struct StorageFactory;

impl StorageFactory {
    /// Create a storage backend from configuration
    pub fn create(config: StorageConfig) -> StoreResult<Arc<dyn CatalogStore>> {
        let store: Arc<dyn CatalogStore> = match config.backend {
            BackendType::Memory => Arc::new(MemoryBackend::new()),
            BackendType::Sqlite => {
                let location = config.connection_string.as_deref().ok_or_else(|| {
                    StoreError::Internal("sqlite backend requires a connection string".to_string())
                })?;
                Arc::new(SqliteBackend::open(location)?)
            },
        };

        tracing::info!(backend = config.backend.as_str(), "Persistent store created");
        Ok(store)
    }

    /// Create a storage backend from its configured name
    pub fn from_settings(
        backend: &str,
        connection_string: Option<String>,
    ) -> StoreResult<Arc<dyn CatalogStore>> {
        let backend = BackendType::from_str(backend)?;
        Self::create(StorageConfig { backend, connection_string })
    }
}
