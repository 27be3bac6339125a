//! Catalog Invariant Tests
//!
//! Book store behavior as seen by the HTTP layer:
//! - Seeding and insertion order
//! - Monotonic identifier assignment
//! - NotFound / InvalidInput outcomes
//! - Concurrent writers do not lose updates

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use bookshelf::catalog::{BookDraft, BookId, BookStore, CatalogError, Genre};

// =============================================================================
// Helper Functions
// =============================================================================

fn draft(title: &str, genre: &str) -> BookDraft {
    BookDraft::new(title, "Terry Pratchett", 1983, genre)
}

// =============================================================================
// Seeding & Listing
// =============================================================================

/// A seeded store lists exactly the three seed books, in order.
#[test]
fn test_seeded_list_returns_three_books_in_order() {
    let store = BookStore::seeded();
    let books = store.list().unwrap();

    let ids: Vec<u64> = books.keys().map(|id| id.as_u64()).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    let titles: Vec<&str> = books.values().map(|b| b.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "The Hobbit",
            "The Lord of the Rings",
            "The Return of the King"
        ]
    );

    assert_eq!(books[&BookId::new(1)].genre, Genre::SciFi);
    assert_eq!(books[&BookId::new(2)].genre, Genre::Fantasy);
    assert_eq!(books[&BookId::new(3)].publication_year, 1955);
}

/// Listing keeps creation order across many inserts.
#[test]
fn test_list_preserves_insertion_order() {
    let store = BookStore::seeded();
    for i in 0..12 {
        store.create(draft(&format!("Discworld {}", i), "FANTASY")).unwrap();
    }

    let books = store.list().unwrap();
    let titles: Vec<String> = books.values().skip(3).map(|b| b.title.clone()).collect();
    let expected: Vec<String> = (0..12).map(|i| format!("Discworld {}", i)).collect();
    assert_eq!(titles, expected);
}

// =============================================================================
// Create & Get
// =============================================================================

/// New identifiers exceed every existing identifier.
#[test]
fn test_create_assigns_greater_id() {
    let store = BookStore::seeded();
    let max_before = store.list().unwrap().keys().max().copied().unwrap();

    let book = store.create(draft("The Colour of Magic", "FANTASY")).unwrap();
    assert!(book.id > max_before);
}

/// A created book round-trips through get.
#[test]
fn test_created_book_round_trips() {
    let store = BookStore::seeded();
    let created = store.create(draft("Mort", "FANTASY")).unwrap();

    let fetched = store.get(created.id).unwrap();
    assert_eq!(fetched, created);
    assert_eq!(fetched.title, "Mort");
    assert_eq!(fetched.author, "Terry Pratchett");
    assert_eq!(fetched.publication_year, 1983);
    assert_eq!(fetched.genre, Genre::Fantasy);
}

#[test]
fn test_get_missing_is_not_found() {
    let store = BookStore::seeded();
    assert_eq!(
        store.get(BookId::new(999)),
        Err(CatalogError::NotFound(BookId::new(999)))
    );
}

#[test]
fn test_create_with_unknown_genre_is_invalid_input() {
    let store = BookStore::seeded();
    let result = store.create(draft("Sourcery", "COMEDY"));

    assert!(matches!(result, Err(CatalogError::InvalidInput(_))));
    assert_eq!(store.len().unwrap(), 3);
}

// =============================================================================
// Update
// =============================================================================

#[test]
fn test_update_missing_is_not_found() {
    let store = BookStore::seeded();
    let result = store.update(BookId::new(42), draft("Eric", "FANTASY"));
    assert_eq!(result, Err(CatalogError::NotFound(BookId::new(42))));
}

/// Update overwrites every field and keeps the identifier.
#[test]
fn test_update_overwrites_all_fields() {
    let store = BookStore::seeded();
    let id = BookId::new(1);

    let replacement = BookDraft::new("Small Gods", "T. Pratchett", 1992, "FICTION");
    let updated = store.update(id, replacement).unwrap();

    assert_eq!(updated.id, id);
    assert_eq!(updated.title, "Small Gods");
    assert_eq!(updated.author, "T. Pratchett");
    assert_eq!(updated.publication_year, 1992);
    assert_eq!(updated.genre, Genre::Fiction);
    assert_eq!(store.get(id).unwrap(), updated);

    // Position in the listing is unchanged
    let first = store.list().unwrap().into_values().next().unwrap();
    assert_eq!(first.title, "Small Gods");
}

// =============================================================================
// Delete
// =============================================================================

#[test]
fn test_delete_then_get_is_not_found() {
    let store = BookStore::seeded();
    let id = BookId::new(2);

    store.delete(id).unwrap();
    assert_eq!(store.get(id), Err(CatalogError::NotFound(id)));
    assert_eq!(store.len().unwrap(), 2);
}

#[test]
fn test_delete_twice_is_not_found() {
    let store = BookStore::seeded();
    let id = BookId::new(3);

    assert!(store.delete(id).is_ok());
    assert_eq!(store.delete(id), Err(CatalogError::NotFound(id)));
}

/// Deleting the highest id does not free it for reuse.
#[test]
fn test_ids_not_reused_after_delete() {
    let store = BookStore::seeded();
    let created = store.create(draft("Pyramids", "FANTASY")).unwrap();
    assert_eq!(created.id, BookId::new(4));

    store.delete(created.id).unwrap();

    let next = store.create(draft("Guards! Guards!", "FANTASY")).unwrap();
    assert_eq!(next.id, BookId::new(5));
}

// =============================================================================
// Concurrency
// =============================================================================

/// Concurrent creates never hand out the same identifier.
#[test]
fn test_concurrent_creates_get_unique_ids() {
    let store = Arc::new(BookStore::new());
    let threads = 8;
    let per_thread = 50;

    let handles: Vec<_> = (0..threads)
        .map(|t| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                (0..per_thread)
                    .map(|i| {
                        store
                            .create(draft(&format!("t{}-{}", t, i), "MYSTERY"))
                            .unwrap()
                            .id
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut seen = HashSet::new();
    for handle in handles {
        for id in handle.join().unwrap() {
            assert!(seen.insert(id), "duplicate id {}", id);
        }
    }

    assert_eq!(seen.len(), threads * per_thread);
    assert_eq!(store.len().unwrap(), threads * per_thread);
}
