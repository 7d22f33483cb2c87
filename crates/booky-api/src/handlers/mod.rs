//! Request handlers, one module per entity kind

pub mod authors;
pub mod books;
pub mod publications;
pub mod utils;
