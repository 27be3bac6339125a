//! Seed data loaded into a fresh store at startup.

use super::model::{Genre, NewBook};

/// The three books present when the server starts
pub fn seed_books() -> Vec<NewBook> {
    vec![
        NewBook {
            title: "The Hobbit".to_string(),
            author: "J.R.R. Tolkien".to_string(),
            publication_year: 1937,
            genre: Genre::SciFi,
        },
        NewBook {
            title: "The Lord of the Rings".to_string(),
            author: "J.R.R. Tolkien".to_string(),
            publication_year: 1954,
            genre: Genre::Fantasy,
        },
        NewBook {
            title: "The Return of the King".to_string(),
            author: "J.R.R. Tolkien".to_string(),
            publication_year: 1955,
            genre: Genre::Fantasy,
        },
    ]
}
