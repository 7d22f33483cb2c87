//! Structured logging utilities for Booky
//!
//! Provides logging initialisation with selectable output formats.

use std::str::FromStr;

use tracing::Span;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable format with colors (for development)
    Pretty,
    /// Compact format without colors
    Compact,
    /// JSON format (for production)
    Json,
}

#[allow(clippy::derivable_impls)]
impl Default for LogFormat {
    fn default() -> Self {
        #[cfg(debug_assertions)]
        {
            LogFormat::Pretty
        }
        #[cfg(not(debug_assertions))]
        {
            LogFormat::Json
        }
    }
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            other => Err(anyhow::anyhow!("Unknown log format: {}", other)),
        }
    }
}

/// Configuration for logging behavior
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Output format
    pub format: LogFormat,
    /// Whether to include file/line numbers
    pub include_location: bool,
    /// Whether to include target module
    pub include_target: bool,
    /// Whether to log span events (new/close)
    pub log_spans: bool,
    /// Fallback filter when `RUST_LOG` is unset (e.g., "info,booky=debug")
    pub filter: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            include_location: cfg!(debug_assertions),
            include_target: true,
            log_spans: false,
            filter: None,
        }
    }
}

impl LogConfig {
    /// Build a config from the configured level and format names
    pub fn from_settings(level: &str, format: &str) -> anyhow::Result<Self> {
        Ok(Self {
            format: format.parse()?,
            filter: Some(level.to_lowercase()),
            ..Self::default()
        })
    }
}

/// Initialize structured logging
///
/// `RUST_LOG` takes precedence over the configured filter.
pub fn init_logging(config: LogConfig) -> anyhow::Result<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(config.filter.as_deref().unwrap_or("info"))?,
    };

    let fmt_span = if config.log_spans { FmtSpan::NEW | FmtSpan::CLOSE } else { FmtSpan::NONE };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(config.include_target)
        .with_file(config.include_location)
        .with_line_number(config.include_location)
        .with_span_events(fmt_span);

    match config.format {
        LogFormat::Pretty => {
            subscriber
                .pretty()
                .try_init()
                .map_err(|e| anyhow::anyhow!("Failed to initialize pretty logger: {}", e))?;
        },
        LogFormat::Compact => {
            subscriber
                .compact()
                .try_init()
                .map_err(|e| anyhow::anyhow!("Failed to initialize compact logger: {}", e))?;
        },
        LogFormat::Json => {
            subscriber
                .json()
                .try_init()
                .map_err(|e| anyhow::anyhow!("Failed to initialize JSON logger: {}", e))?;
        },
    }

    tracing::info!(format = ?config.format, "Logging initialized");

    Ok(())
}

/// Helper to create a span for store operations
pub fn store_span(operation: &str, collection: &str) -> Span {
    tracing::debug_span!(
        "store",
        operation = operation,
        collection = collection,
        matched = tracing::field::Empty,
    )
}
