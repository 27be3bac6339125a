//! Catalog metrics
//!
//! Counters only, reset on process start. Relaxed atomics: values are
//! exact per counter but not mutually consistent across counters.
//!
//! The current book count is not a counter; the store owns it and the
//! caller passes it in when taking a snapshot.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Operational counters for one server instance
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    books_created: AtomicU64,
    books_updated: AtomicU64,
    books_deleted: AtomicU64,
    /// Single-book reads, hit or miss
    lookups: AtomicU64,
    lookups_missed: AtomicU64,
    /// Requests answered with an error status
    requests_rejected: AtomicU64,
}

impl MetricsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_created(&self) {
        self.books_created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_updated(&self) {
        self.books_updated.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_deleted(&self) {
        self.books_deleted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_lookup(&self, found: bool) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        if !found {
            self.lookups_missed.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_rejected(&self) {
        self.requests_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Copy every counter, alongside the store's current book count
    pub fn snapshot(&self, books: u64) -> MetricsSnapshot {
        MetricsSnapshot {
            books_created: self.books_created.load(Ordering::Relaxed),
            books_updated: self.books_updated.load(Ordering::Relaxed),
            books_deleted: self.books_deleted.load(Ordering::Relaxed),
            lookups: self.lookups.load(Ordering::Relaxed),
            lookups_missed: self.lookups_missed.load(Ordering::Relaxed),
            requests_rejected: self.requests_rejected.load(Ordering::Relaxed),
            books,
        }
    }
}

/// Point-in-time copy of every counter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub books_created: u64,
    pub books_updated: u64,
    pub books_deleted: u64,
    pub lookups: u64,
    pub lookups_missed: u64,
    pub requests_rejected: u64,
    /// Books in the store when the snapshot was taken
    pub books: u64,
}
