//! Observability for bookshelf
//!
//! - Structured logging (JSON lines)
//! - Atomic counters
//!
//! Observability is read-only: it never alters the outcome of a request,
//! and a failed log write is dropped silently.
//!
//! ```ignore
//! use bookshelf::observability::{Event, Logger, MetricsRegistry};
//!
//! Logger::info(Event::BookCreated, &[("id", "4")]);
//!
//! let metrics = MetricsRegistry::new();
//! metrics.record_created();
//! ```

mod events;
mod logger;
mod metrics;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};

/// Log a lifecycle event with no fields
pub fn log_event(event: Event) {
    Logger::info(event, &[]);
}
