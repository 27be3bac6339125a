//! # Catalog Model
//!
//! Book entity, its closed genre set, and the unvalidated draft that
//! callers submit for create and update.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::CatalogError;

/// Store-assigned book identifier
///
/// Serialized as a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(u64);

impl BookId {
    /// Wrap a raw identifier
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Raw integer value
    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// The identifier following this one
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for BookId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Book genre
///
/// The set is closed; anything else is rejected at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Genre {
    Fiction,
    NonFiction,
    SciFi,
    Fantasy,
    Mystery,
    Thriller,
    Romance,
    Horror,
    Biography,
    History,
    Poetry,
}

impl Genre {
    /// Every accepted genre, in declaration order
    pub const ALL: [Genre; 11] = [
        Genre::Fiction,
        Genre::NonFiction,
        Genre::SciFi,
        Genre::Fantasy,
        Genre::Mystery,
        Genre::Thriller,
        Genre::Romance,
        Genre::Horror,
        Genre::Biography,
        Genre::History,
        Genre::Poetry,
    ];

    /// Wire name of the genre
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Fiction => "FICTION",
            Genre::NonFiction => "NON_FICTION",
            Genre::SciFi => "SCI_FI",
            Genre::Fantasy => "FANTASY",
            Genre::Mystery => "MYSTERY",
            Genre::Thriller => "THRILLER",
            Genre::Romance => "ROMANCE",
            Genre::Horror => "HORROR",
            Genre::Biography => "BIOGRAPHY",
            Genre::History => "HISTORY",
            Genre::Poetry => "POETRY",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Genre {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Genre::ALL
            .iter()
            .copied()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| {
                let accepted: Vec<&str> = Genre::ALL.iter().map(|g| g.as_str()).collect();
                CatalogError::invalid(format!(
                    "unknown genre '{}', expected one of: {}",
                    s,
                    accepted.join(", ")
                ))
            })
    }
}

/// A stored book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub publication_year: i32,
    pub genre: Genre,
}

/// Validated book fields, without an identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub publication_year: i32,
    pub genre: Genre,
}

impl NewBook {
    /// Attach an identifier, producing the stored form
    pub fn with_id(self, id: BookId) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            publication_year: self.publication_year,
            genre: self.genre,
        }
    }
}

/// Book fields as submitted by a caller
///
/// Field types are enforced by deserialization; the genre stays raw text
/// until [`BookDraft::validate`] checks it against [`Genre`]. A client
/// supplied `id` is accepted and ignored, the store assigns identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub title: String,
    pub author: String,
    pub publication_year: i32,
    pub genre: String,
}

impl BookDraft {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        publication_year: i32,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            author: author.into(),
            publication_year,
            genre: genre.into(),
        }
    }

    /// Check the draft and convert it into validated fields
    pub fn validate(self) -> Result<NewBook, CatalogError> {
        let genre = self.genre.parse::<Genre>()?;
        Ok(NewBook {
            title: self.title,
            author: self.author,
            publication_year: self.publication_year,
            genre,
        })
    }
}

impl From<&Book> for BookDraft {
    fn from(book: &Book) -> Self {
        Self {
            id: Some(book.id.as_u64()),
            title: book.title.clone(),
            author: book.author.clone(),
            publication_year: book.publication_year,
            genre: book.genre.as_str().to_string(),
        }
    }
}
