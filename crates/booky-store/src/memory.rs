//! In-memory persistent-store backend for testing and development

use std::sync::Arc;

use async_trait::async_trait;
use booky_types::{Author, Book, Publication, StoreResult};
use tokio::sync::RwLock;
use tracing::Instrument;

use crate::{BookFilter, CatalogStore};

/// In-memory catalogue; collections keep insertion order
#[derive(Clone, Default)]
pub struct MemoryBackend {
    data: Arc<RwLock<Collections>>,
}

#[derive(Default)]
struct Collections {
    books: Vec<Book>,
    authors: Vec<Author>,
    publications: Vec<Publication>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CatalogStore for MemoryBackend {
    async fn insert_book(&self, book: Book) -> StoreResult<Book> {
        let mut data = self.data.write().await;
        data.books.push(book.clone());
        tracing::debug!(isbn = %book.isbn, "Book inserted");
        Ok(book)
    }

    async fn list_books(&self) -> StoreResult<Vec<Book>> {
        Ok(self.data.read().await.books.clone())
    }

    async fn find_book(&self, filter: &BookFilter) -> StoreResult<Option<Book>> {
        let span = booky_observe::store_span("find_book", "books");
        let found = async {
            let data = self.data.read().await;
            data.books.iter().find(|book| filter.matches(book)).cloned()
        }
        .instrument(span.clone())
        .await;

        span.record("matched", found.is_some());
        Ok(found)
    }

    async fn insert_author(&self, author: Author) -> StoreResult<Author> {
        let mut data = self.data.write().await;
        data.authors.push(author.clone());
        tracing::debug!(id = author.id, "Author inserted");
        Ok(author)
    }

    async fn list_authors(&self) -> StoreResult<Vec<Author>> {
        Ok(self.data.read().await.authors.clone())
    }

    async fn insert_publication(&self, publication: Publication) -> StoreResult<Publication> {
        let mut data = self.data.write().await;
        data.publications.push(publication.clone());
        tracing::debug!(id = publication.id, "Publication inserted");
        Ok(publication)
    }

    async fn list_publications(&self) -> StoreResult<Vec<Publication>> {
        Ok(self.data.read().await.publications.clone())
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
