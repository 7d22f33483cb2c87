//! Transient relational store
//!
//! An in-process copy of the catalogue, seeded once at startup and mutated
//! in place by the relationship routes. It is never written back to the
//! persistent store and is lost on restart.
//!
//! All state sits behind one `RwLock`. Each relationship edit touches both
//! sides of a reference under a single write guard, so readers see either
//! the state before the edit or the state after it.

use booky_types::{Author, Book, Publication};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// Full contents of the transient store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub books: Vec<Book>,
    #[serde(default)]
    pub authors: Vec<Author>,
    #[serde(default)]
    pub publications: Vec<Publication>,
}

pub struct TransientStore {
    seed: Snapshot,
    state: RwLock<Snapshot>,
}

impl TransientStore {
    pub fn new(seed: Snapshot) -> Self {
        Self { state: RwLock::new(seed.clone()), seed }
    }

    /// A store seeded from the bundled fixture
    pub fn bundled() -> booky_types::StoreResult<Self> {
        Ok(Self::new(crate::seed::bundled()?))
    }

    /// Copy of the current contents
    pub async fn snapshot(&self) -> Snapshot {
        self.state.read().await.clone()
    }

    /// Restore the seed, discarding every edit
    pub async fn reset(&self) {
        *self.state.write().await = self.seed.clone();
        tracing::debug!("Transient store reset to seed");
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    /// Books whose language contains `language` as a substring
    pub async fn books_by_language(&self, language: &str) -> Vec<Book> {
        let state = self.state.read().await;
        state.books.iter().filter(|book| book.language.contains(language)).cloned().collect()
    }

    /// Authors with the given id; `None` (an unparseable id) matches nothing
    pub async fn authors_by_id(&self, id: Option<i64>) -> Vec<Author> {
        let Some(id) = id else {
            return Vec::new();
        };
        let state = self.state.read().await;
        state.authors.iter().filter(|author| author.id == id).cloned().collect()
    }

    /// Authors whose book list contains `isbn`
    pub async fn authors_of_book(&self, isbn: &str) -> Vec<Author> {
        let state = self.state.read().await;
        state.authors.iter().filter(|author| lists(&author.books, isbn)).cloned().collect()
    }

    /// Publications with the given id; `None` matches nothing
    pub async fn publications_by_id(&self, id: Option<i64>) -> Vec<Publication> {
        let Some(id) = id else {
            return Vec::new();
        };
        let state = self.state.read().await;
        state.publications.iter().filter(|publication| publication.id == id).cloned().collect()
    }

    /// Publications whose book list contains `isbn`
    pub async fn publications_of_book(&self, isbn: &str) -> Vec<Publication> {
        let state = self.state.read().await;
        state
            .publications
            .iter()
            .filter(|publication| lists(&publication.books, isbn))
            .cloned()
            .collect()
    }

    // ------------------------------------------------------------------
    // Writes
    // ------------------------------------------------------------------

    /// Append a publication and return the full publication list
    pub async fn push_publication(&self, publication: Publication) -> Vec<Publication> {
        let mut state = self.state.write().await;
        tracing::debug!(id = publication.id, "Publication appended to transient store");
        state.publications.push(publication);
        state.publications.clone()
    }

    /// Record `isbn` on publication `pub_id` and point the book at it
    ///
    /// The two sides are independent. Every publication with the id gets the
    /// ISBN appended, even when it already lists it or no book has that
    /// ISBN. Books with the ISBN take the new id only when a publication with
    /// that id exists, so an unknown id leaves the book untouched.
    pub async fn attach_publication(&self, isbn: &str, pub_id: i64) -> Snapshot {
        let mut state = self.state.write().await;

        let mut publications_updated = 0;
        for publication in state.publications.iter_mut().filter(|p| p.id == pub_id) {
            publication.books.push(isbn.to_string());
            publications_updated += 1;
        }

        let mut books_updated = 0;
        if publications_updated > 0 {
            for book in state.books.iter_mut().filter(|b| b.isbn == isbn) {
                book.publications = Some(pub_id);
                books_updated += 1;
            }
        }

        tracing::debug!(isbn, pub_id, publications_updated, books_updated, "Publication attached");
        state.clone()
    }

    /// Remove `author_id` from the book and `isbn` from the author
    ///
    /// Each side is a no-op when the reference is already absent, so the
    /// edit is idempotent. `None` (an unparseable id) changes nothing.
    pub async fn detach_author(&self, isbn: &str, author_id: Option<i64>) -> Snapshot {
        let mut state = self.state.write().await;

        if let Some(author_id) = author_id {
            for book in state.books.iter_mut().filter(|b| b.isbn == isbn) {
                book.author.retain(|id| *id != author_id);
            }
            for author in state.authors.iter_mut().filter(|a| a.id == author_id) {
                author.books.retain(|book| book != isbn);
            }
            tracing::debug!(isbn, author_id, "Author detached from book");
        }

        state.clone()
    }

    /// Drop every book with `isbn`, keeping the order of the rest
    pub async fn remove_book(&self, isbn: &str) -> Vec<Book> {
        let mut state = self.state.write().await;
        let before = state.books.len();
        state.books.retain(|book| book.isbn != isbn);
        tracing::debug!(isbn, removed = before - state.books.len(), "Book removed");
        state.books.clone()
    }
}

fn lists(isbns: &[String], isbn: &str) -> bool {
    isbns.iter().any(|candidate| candidate == isbn)
}
