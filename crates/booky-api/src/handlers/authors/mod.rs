//! Author routes

pub mod create;
pub mod detach;
pub mod get;
pub mod list;
