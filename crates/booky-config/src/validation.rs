//! Configuration validation
//!
//! Validates configuration values and ensures consistency

use thiserror::Error;

use crate::{Config, ObservabilityConfig, ServerConfig, StoreConfig};

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid port number: {0}")]
    InvalidPort(u16),

    #[error("Invalid host: {0:?}")]
    InvalidHost(String),

    #[error("Invalid log level: {0} (must be one of: trace, debug, info, warn, error)")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0} (must be one of: pretty, compact, json)")]
    InvalidLogFormat(String),

    #[error("Invalid backend: {0} (must be one of: memory, sqlite)")]
    InvalidBackend(String),

    #[error("Missing connection string for backend: {0}")]
    MissingConnectionString(String),

    #[error("Multiple validation errors: {0:?}")]
    Multiple(Vec<ValidationError>),
}

/// Validation result type
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validate complete configuration
pub fn validate(config: &Config) -> ValidationResult<()> {
    let mut errors: Vec<ValidationError> = [
        validate_server(&config.server),
        validate_store(&config.store),
        validate_observability(&config.observability),
    ]
    .into_iter()
    .filter_map(Result::err)
    .collect();

    match errors.len() {
        0 => Ok(()),
        1 => Err(errors.remove(0)),
        _ => Err(ValidationError::Multiple(errors)),
    }
}

/// Validate server configuration
pub fn validate_server(config: &ServerConfig) -> ValidationResult<()> {
    if config.port == 0 {
        return Err(ValidationError::InvalidPort(config.port));
    }

    if config.host.trim().is_empty() {
        return Err(ValidationError::InvalidHost(config.host.clone()));
    }

    Ok(())
}

/// Validate store configuration
pub fn validate_store(config: &StoreConfig) -> ValidationResult<()> {
    match config.backend.to_lowercase().as_str() {
        "memory" => Ok(()),
        "sqlite" => {
            if config.connection_string.as_deref().is_none_or(str::is_empty) {
                return Err(ValidationError::MissingConnectionString(config.backend.clone()));
            }
            Ok(())
        },
        _ => Err(ValidationError::InvalidBackend(config.backend.clone())),
    }
}

/// Validate observability configuration
pub fn validate_observability(config: &ObservabilityConfig) -> ValidationResult<()> {
    let level = config.log_level.to_lowercase();
    if !["trace", "debug", "info", "warn", "error"].contains(&level.as_str()) {
        return Err(ValidationError::InvalidLogLevel(config.log_level.clone()));
    }

    let format = config.log_format.to_lowercase();
    if !["pretty", "compact", "json"].contains(&format.as_str()) {
        return Err(ValidationError::InvalidLogFormat(config.log_format.clone()));
    }

    Ok(())
}
