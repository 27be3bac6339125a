//! # Book Store
//!
//! In-memory keyed collection of books.
//!
//! # Invariants
//!
//! - Identifiers are assigned from a monotonic counter and never reused,
//!   even after the highest identifier is deleted.
//! - Because identifiers only grow, id order is insertion order, so the
//!   `BTreeMap` lists books in the order they were created.
//! - The map and the counter sit behind one lock; an identifier is
//!   assigned and inserted under a single write guard.
//! - Drafts are validated before the lock is taken. A rejected call
//!   leaves both the map and the counter untouched.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::errors::{CatalogError, CatalogResult};
use super::model::{Book, BookDraft, BookId, NewBook};
use super::seed::seed_books;

/// Mutable state guarded by the store lock
#[derive(Debug)]
struct Shelf {
    books: BTreeMap<BookId, Book>,
    next_id: BookId,
}

impl Shelf {
    fn empty() -> Self {
        Self {
            books: BTreeMap::new(),
            next_id: BookId::new(1),
        }
    }

    fn insert(&mut self, fields: NewBook) -> Book {
        let id = self.next_id;
        self.next_id = id.next();

        let book = fields.with_id(id);
        self.books.insert(id, book.clone());
        book
    }
}

/// Book store shared by the HTTP handlers
#[derive(Debug)]
pub struct BookStore {
    shelf: RwLock<Shelf>,
}

impl BookStore {
    /// Create an empty store; the first book gets id 1
    pub fn new() -> Self {
        Self {
            shelf: RwLock::new(Shelf::empty()),
        }
    }

    /// Create a store holding the three seed books (ids 1..=3)
    pub fn seeded() -> Self {
        let mut shelf = Shelf::empty();
        for fields in seed_books() {
            shelf.insert(fields);
        }
        Self {
            shelf: RwLock::new(shelf),
        }
    }

    fn read(&self) -> CatalogResult<RwLockReadGuard<'_, Shelf>> {
        self.shelf
            .read()
            .map_err(|_| CatalogError::Internal("Lock poisoned".to_string()))
    }

    fn write(&self) -> CatalogResult<RwLockWriteGuard<'_, Shelf>> {
        self.shelf
            .write()
            .map_err(|_| CatalogError::Internal("Lock poisoned".to_string()))
    }

    /// All books keyed by id, in insertion order
    pub fn list(&self) -> CatalogResult<BTreeMap<BookId, Book>> {
        Ok(self.read()?.books.clone())
    }

    /// Look up a single book
    pub fn get(&self, id: BookId) -> CatalogResult<Book> {
        self.read()?
            .books
            .get(&id)
            .cloned()
            .ok_or(CatalogError::NotFound(id))
    }

    /// Validate a draft, assign the next id and store it
    pub fn create(&self, draft: BookDraft) -> CatalogResult<Book> {
        let fields = draft.validate()?;
        Ok(self.write()?.insert(fields))
    }

    /// Replace every field of the book at `id`, keeping `id`
    pub fn update(&self, id: BookId, draft: BookDraft) -> CatalogResult<Book> {
        let fields = draft.validate()?;

        let mut shelf = self.write()?;
        let slot = shelf.books.get_mut(&id).ok_or(CatalogError::NotFound(id))?;
        *slot = fields.with_id(id);
        Ok(slot.clone())
    }

    /// Remove the book at `id`, returning it
    pub fn delete(&self, id: BookId) -> CatalogResult<Book> {
        self.write()?
            .books
            .remove(&id)
            .ok_or(CatalogError::NotFound(id))
    }

    /// Number of stored books
    pub fn len(&self) -> CatalogResult<usize> {
        Ok(self.read()?.books.len())
    }

    pub fn is_empty(&self) -> CatalogResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl Default for BookStore {
    fn default() -> Self {
        Self::new()
    }
}
