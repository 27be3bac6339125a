//! # Catalog
//!
//! The data-access layer: an in-memory store of book records keyed by a
//! store-assigned identifier.
//!
//! The HTTP layer owns an `Arc<BookStore>` constructed at startup and
//! translates [`CatalogError`] into transport status codes.

mod errors;
mod model;
mod seed;
mod store;

pub use errors::{CatalogError, CatalogResult};
pub use model::{Book, BookDraft, BookId, Genre, NewBook};
pub use seed::seed_books;
pub use store::BookStore;
