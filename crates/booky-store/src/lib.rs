//! # Booky Store - Storage Layer
//!
//! Two independent stores model the same catalogue:
//!
//! - the persistent store ([`CatalogStore`]), a document collection per
//!   entity kind that outlives the process;
//! - the transient relational store ([`TransientStore`]), an in-process
//!   copy seeded at startup that carries the cross-reference edits.
//!
//! Nothing reconciles the two. Edits made to one are never visible in the
//! other.

use async_trait::async_trait;
use booky_types::{Author, Book, Publication, StoreResult};

pub mod factory;
pub mod memory;
pub mod seed;
pub mod sqlite;
pub mod transient;

pub use factory::{BackendType, StorageConfig, StorageFactory};
pub use memory::MemoryBackend;
pub use sqlite::SqliteBackend;
pub use transient::{Snapshot, TransientStore};

/// Single-record lookup over the books collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookFilter {
    /// Exact ISBN match
    Isbn(String),
    /// Book whose category list contains this exact value
    Category(String),
}

impl BookFilter {
    pub fn matches(&self, book: &Book) -> bool {
        match self {
            BookFilter::Isbn(isbn) => book.isbn == *isbn,
            BookFilter::Category(category) => book.in_category(category),
        }
    }
}

/// The persistent catalogue interface
///
/// Inserts perform no duplicate-key checks. Reads return records in
/// insertion order; `find_book` yields the first match.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn insert_book(&self, book: Book) -> StoreResult<Book>;

    async fn list_books(&self) -> StoreResult<Vec<Book>>;

    async fn find_book(&self, filter: &BookFilter) -> StoreResult<Option<Book>>;

    async fn insert_author(&self, author: Author) -> StoreResult<Author>;

    async fn list_authors(&self) -> StoreResult<Vec<Author>>;

    async fn insert_publication(&self, publication: Publication) -> StoreResult<Publication>;

    async fn list_publications(&self) -> StoreResult<Vec<Publication>>;

    /// Cheap liveness check used by the health endpoint
    async fn ping(&self) -> StoreResult<()>;

    /// Backend name for logs and health output
    fn backend_name(&self) -> &'static str;
}
