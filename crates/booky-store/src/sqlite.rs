//! SQLite document-store backend
//!
//! Each collection is a table holding the JSON document next to its key
//! column. Keys are not unique; `seq` preserves insertion order.

use std::{
    path::Path,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use booky_types::{Author, Book, Publication, StoreError, StoreResult};
use rusqlite::{Connection, OptionalExtension, params};
use serde::{Serialize, de::DeserializeOwned};

use crate::{BookFilter, CatalogStore};

const SCHEMA_SQL: &str = "
CREATE TABLE IF NOT EXISTS books (
    seq INTEGER PRIMARY KEY AUTOINCREMENT,
    isbn TEXT NOT NULL,
    doc TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_books_isbn ON books(isbn);
CREATE TABLE IF NOT EXISTS authors (
    seq INTEGER PRIMARY KEY AUTOINCREMENT,
    id INTEGER NOT NULL,
    doc TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS publications (
    seq INTEGER PRIMARY KEY AUTOINCREMENT,
    id INTEGER NOT NULL,
    doc TEXT NOT NULL
);
";

fn db_err(err: rusqlite::Error) -> StoreError {
    StoreError::Database(err.to_string())
}

/// SQLite-backed catalogue
#[derive(Clone)]
pub struct SqliteBackend {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteBackend {
    /// Open (or create) a database file; `":memory:"` opens a private in-memory database
    pub fn open(location: &str) -> StoreResult<Self> {
        let conn = if location == ":memory:" {
            Connection::open_in_memory()
        } else {
            Connection::open(Path::new(location))
        }
        .map_err(db_err)?;

        conn.execute_batch(SCHEMA_SQL).map_err(db_err)?;
        tracing::info!(location = location, "SQLite catalogue opened");

        Ok(Self { conn: Arc::new(Mutex::new(conn)) })
    }

    pub fn open_in_memory() -> StoreResult<Self> {
        Self::open(":memory:")
    }

    /// Run `f` against the connection on the blocking pool
    async fn with_conn<T, F>(&self, f: F) -> StoreResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> StoreResult<T> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let conn = conn
                .lock()
                .map_err(|_| StoreError::Internal("SQLite connection lock poisoned".to_string()))?;
            f(&conn)
        })
        .await
        .map_err(|e| StoreError::Internal(format!("SQLite task failed: {}", e)))?
    }

    async fn insert_doc<T>(&self, table: &'static str, key: KeyValue, record: T) -> StoreResult<T>
    where
        T: Serialize + Send + 'static,
    {
        let doc = serde_json::to_string(&record)?;
        self.with_conn(move |conn| {
            let sql = format!("INSERT INTO {table} ({}, doc) VALUES (?1, ?2)", key.column());
            match key {
                KeyValue::Text(_, value) => conn.execute(&sql, params![value, doc]),
                KeyValue::Int(_, value) => conn.execute(&sql, params![value, doc]),
            }
            .map_err(db_err)?;
            Ok(record)
        })
        .await
    }

    async fn list_docs<T>(&self, table: &'static str) -> StoreResult<Vec<T>>
    where
        T: DeserializeOwned + Send + 'static,
    {
        self.with_conn(move |conn| {
            let mut stmt =
                conn.prepare(&format!("SELECT doc FROM {table} ORDER BY seq")).map_err(db_err)?;
            let docs = stmt
                .query_map([], |row| row.get::<_, String>(0))
                .map_err(db_err)?
                .collect::<Result<Vec<_>, _>>()
                .map_err(db_err)?;

            docs.iter().map(|doc| serde_json::from_str(doc).map_err(StoreError::from)).collect()
        })
        .await
    }
}

/// Key column and value for an inserted document
enum KeyValue {
    Text(&'static str, String),
    Int(&'static str, i64),
}

impl KeyValue {
    fn column(&self) -> &'static str {
        match self {
            KeyValue::Text(column, _) | KeyValue::Int(column, _) => column,
        }
    }
}

#[async_trait]
impl CatalogStore for SqliteBackend {
    async fn insert_book(&self, book: Book) -> StoreResult<Book> {
        let key = KeyValue::Text("isbn", book.isbn.clone());
        self.insert_doc("books", key, book).await
    }

    async fn list_books(&self) -> StoreResult<Vec<Book>> {
        self.list_docs("books").await
    }

    async fn find_book(&self, filter: &BookFilter) -> StoreResult<Option<Book>> {
        let filter = filter.clone();
        self.with_conn(move |conn| {
            let doc: Option<String> = match &filter {
                BookFilter::Isbn(isbn) => conn
                    .query_row(
                        "SELECT doc FROM books WHERE isbn = ?1 ORDER BY seq LIMIT 1",
                        params![isbn],
                        |row| row.get::<_, String>(0),
                    )
                    .optional(),
                BookFilter::Category(category) => conn
                    .query_row(
                        "SELECT doc FROM books
                         WHERE EXISTS (
                             SELECT 1 FROM json_each(books.doc, '$.category')
                             WHERE json_each.value = ?1
                         )
                         ORDER BY seq LIMIT 1",
                        params![category],
                        |row| row.get::<_, String>(0),
                    )
                    .optional(),
            }
            .map_err(db_err)?;

            doc.map(|doc| serde_json::from_str(&doc).map_err(StoreError::from)).transpose()
        })
        .await
    }

    async fn insert_author(&self, author: Author) -> StoreResult<Author> {
        let key = KeyValue::Int("id", author.id);
        self.insert_doc("authors", key, author).await
    }

    async fn list_authors(&self) -> StoreResult<Vec<Author>> {
        self.list_docs("authors").await
    }

    async fn insert_publication(&self, publication: Publication) -> StoreResult<Publication> {
        let key = KeyValue::Int("id", publication.id);
        self.insert_doc("publications", key, publication).await
    }

    async fn list_publications(&self) -> StoreResult<Vec<Publication>> {
        self.list_docs("publications").await
    }

    async fn ping(&self) -> StoreResult<()> {
        self.with_conn(|conn| conn.query_row("SELECT 1", [], |_| Ok(())).map_err(db_err)).await
    }

    fn backend_name(&self) -> &'static str {
        "sqlite"
    }
}
