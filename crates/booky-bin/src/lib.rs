//! # Booky Server Library
//!
//! Startup wiring shared by the `booky` binary and its tests.

pub mod initialization;
