//! # bookshelf HTTP Server Module
//!
//! Axum server exposing the book catalog.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/books/*` - Book CRUD (prefix configurable)
//! - `/observability/*` - Health and metrics

pub mod book_routes;
pub mod config;
pub mod errors;
pub mod observability_routes;
pub mod server;

pub use book_routes::CatalogState;
pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use server::HttpServer;
