//! # Catalog Errors
//!
//! Error types raised by the book store.

use thiserror::Error;

use super::model::BookId;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Book store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// No book is stored under the identifier
    #[error("Book not found: {0}")]
    NotFound(BookId),

    /// Draft carries a value outside the accepted domain (e.g. unknown genre)
    #[error("Invalid book data: {0}")]
    InvalidInput(String),

    /// Store state is unusable (poisoned lock)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CatalogError {
    /// Shorthand for an invalid input error
    pub fn invalid(msg: impl Into<String>) -> Self {
        CatalogError::InvalidInput(msg.into())
    }

    /// Returns true if this error is a missing identifier
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_id() {
        let err = CatalogError::NotFound(BookId::new(42));
        assert_eq!(err.to_string(), "Book not found: 42");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_invalid_input_message() {
        let err = CatalogError::invalid("unknown genre 'POEMS'");
        assert!(err.to_string().contains("POEMS"));
        assert!(!err.is_not_found());
    }
}
