//! Shared handler utilities

pub mod lookup;

pub use lookup::{Lookup, parse_id};
