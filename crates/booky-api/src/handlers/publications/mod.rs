//! Publication routes

pub mod attach;
pub mod create;
pub mod get;
pub mod list;
