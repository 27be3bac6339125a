//! Observable events
//!
//! Events are explicit and typed; the logger only accepts these.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Process startup begins
    BootStart,
    /// Configuration resolved
    ConfigLoaded,
    /// Seed books loaded into the store
    CatalogSeeded,
    /// Listener bound, ready for requests
    Serving,
    /// Server stopped accepting requests
    ShutdownComplete,
    /// Server failed to start or crashed
    ServerFailed,

    // Catalog writes
    BookCreated,
    BookUpdated,
    BookDeleted,

    /// Request answered with a 4xx/5xx status
    RequestRejected,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "BOOKSHELF_STARTUP_BEGIN",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::CatalogSeeded => "CATALOG_SEEDED",
            Event::Serving => "BOOKSHELF_SERVING",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",
            Event::ServerFailed => "SERVER_FAILED",
            Event::BookCreated => "BOOK_CREATED",
            Event::BookUpdated => "BOOK_UPDATED",
            Event::BookDeleted => "BOOK_DELETED",
            Event::RequestRejected => "REQUEST_REJECTED",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
