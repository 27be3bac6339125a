//! bookshelf - a small in-memory book catalog served over HTTP
//!
//! - `catalog`: the book store and its data model
//! - `http_server`: axum routes translating store outcomes to HTTP
//! - `observability`: JSON-line logging and counters
//! - `cli`: configuration loading and the `serve` entry point

pub mod catalog;
pub mod cli;
pub mod http_server;
pub mod observability;
