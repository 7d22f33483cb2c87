//! # Booky Types
//!
//! Shared type definitions for the Booky catalogue.
//!
//! Records are kept flat: every cross reference is an identifier (ISBN for
//! books, numeric `id` for authors and publications), never a nested record.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Entity Records
// ============================================================================

/// A book, keyed by ISBN
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    #[serde(rename = "ISBN")]
    pub isbn: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub pub_date: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub num_page: u32,
    /// Ids of the authors who wrote this book
    #[serde(default)]
    pub author: Vec<i64>,
    /// Id of the publication this book belongs to
    #[serde(default, alias = "publication")]
    pub publications: Option<i64>,
    #[serde(default)]
    pub category: Vec<String>,
}

impl Book {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.isbn.trim().is_empty() {
            return Err(ValidationError::EmptyIsbn);
        }
        Ok(())
    }

    /// Whether `category` is one of this book's categories
    pub fn in_category(&self, category: &str) -> bool {
        self.category.iter().any(|c| c == category)
    }
}

/// An author, keyed by numeric id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    /// ISBNs of the books this author wrote
    #[serde(default)]
    pub books: Vec<String>,
}

impl Author {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName { kind: EntityKind::Author, id: self.id });
        }
        Ok(())
    }
}

/// A publication (publisher), keyed by numeric id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    /// ISBNs of the books issued by this publication
    #[serde(default)]
    pub books: Vec<String>,
}

/// The three kinds of record held by both stores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Book,
    Author,
    Publication,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Book => write!(f, "book"),
            EntityKind::Author => write!(f, "author"),
            EntityKind::Publication => write!(f, "publication"),
        }
    }
}

// ============================================================================
// Request Payloads
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBookRequest {
    #[serde(rename = "newBook")]
    pub new_book: Book,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAuthorRequest {
    #[serde(rename = "newAuthor")]
    pub new_author: Author,
}

/// Body of the attach-publication update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttachPublicationRequest {
    #[serde(rename = "pubId")]
    pub pub_id: i64,
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Book ISBN cannot be empty")]
    EmptyIsbn,

    #[error("{kind} {id} must have a name")]
    EmptyName { kind: EntityKind, id: i64 },
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
