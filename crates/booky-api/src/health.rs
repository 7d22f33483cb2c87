//! Health check endpoint
//!
//! Reports uptime and whether the persistent catalogue answers.

use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::{Duration, Instant},
};

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use booky_store::CatalogStore;
use serde::{Deserialize, Serialize};

/// Health check status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

/// Component health status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentStatus {
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub service: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub storage: ComponentStatus,
}

/// Health tracker for the service
#[derive(Clone)]
pub struct HealthTracker {
    started: Instant,
    ready: Arc<AtomicBool>,
}

impl Default for HealthTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl HealthTracker {
    pub fn new() -> Self {
        Self { started: Instant::now(), ready: Arc::new(AtomicBool::new(false)) }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started.elapsed().as_secs()
    }

    pub fn set_ready(&self, ready: bool) {
        self.ready.store(ready, Ordering::Release);
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// Probe the persistent store and summarise
    pub async fn check_health(&self, store: &Arc<dyn CatalogStore>) -> HealthResponse {
        let storage = match tokio::time::timeout(Duration::from_secs(1), store.ping()).await {
            Ok(Ok(())) => ComponentStatus {
                status: HealthStatus::Healthy,
                message: Some(format!("{} store operational", store.backend_name())),
            },
            Ok(Err(e)) => ComponentStatus {
                status: HealthStatus::Unhealthy,
                message: Some(format!("Storage error: {}", e)),
            },
            Err(_) => ComponentStatus {
                status: HealthStatus::Degraded,
                message: Some("Storage timeout".to_string()),
            },
        };

        let status = if storage.status == HealthStatus::Unhealthy {
            HealthStatus::Unhealthy
        } else if !self.is_ready() || storage.status == HealthStatus::Degraded {
            HealthStatus::Degraded
        } else {
            HealthStatus::Healthy
        };

        HealthResponse {
            status,
            service: "booky".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_seconds: self.uptime_seconds(),
            storage,
        }
    }
}

/// `GET /health`
pub async fn health_check_handler(State(state): State<crate::AppState>) -> impl IntoResponse {
    let health = state.health_tracker.check_health(&state.catalog).await;

    match health.status {
        HealthStatus::Healthy | HealthStatus::Degraded => (StatusCode::OK, Json(health)),
        HealthStatus::Unhealthy => (StatusCode::SERVICE_UNAVAILABLE, Json(health)),
    }
}
