//! # Booky Config - Configuration Management
//!
//! Handles configuration loading from files and environment variables.
//!
//! Sources are layered: serde defaults, then an optional config file, then
//! `BOOKY__`-prefixed environment variables, e.g.
//! `BOOKY__STORE__CONNECTION_STRING=/var/lib/booky/catalog.db`.

pub mod validation;

use std::path::{Path, PathBuf};

use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

pub use validation::{ValidationError, ValidationResult};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub transient: TransientConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port() }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

/// Persistent store settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Backend type: "memory" or "sqlite"
    #[serde(default = "default_backend")]
    pub backend: String,

    /// Database location for backends that need one
    pub connection_string: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { backend: default_backend(), connection_string: None }
    }
}

fn default_backend() -> String {
    "memory".to_string()
}

/// Transient relational store settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransientConfig {
    /// JSON seed file; the bundled fixture is used when unset
    pub seed_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// "pretty", "compact" or "json"
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self { log_level: default_log_level(), log_format: default_log_format() }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Config {
    /// Validate the whole configuration
    pub fn validate(&self) -> ValidationResult<()> {
        validation::validate(self)
    }
}

/// Load configuration from file and environment
pub fn load<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let builder = ConfigBuilder::builder()
        .add_source(File::from(path.as_ref()).required(false))
        .add_source(Environment::with_prefix("BOOKY").separator("__").try_parsing(true))
        .build()?;

    builder.try_deserialize()
}

/// Load configuration, falling back to defaults
///
/// A broken file does not stop startup: the defaults are used and the load
/// error is handed back so it can be reported once logging is up.
pub fn load_or_default<P: AsRef<Path>>(path: P) -> (Config, Option<ConfigError>) {
    match load(path) {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    }
}
