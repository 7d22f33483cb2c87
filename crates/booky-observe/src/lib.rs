//! # Booky Observe - Observability Layer
//!
//! Structured logging through `tracing`, plus span helpers shared by the
//! store and API crates.

#![deny(unsafe_code)]

pub mod logging;

pub use logging::{LogConfig, LogFormat, init_logging, store_span};
