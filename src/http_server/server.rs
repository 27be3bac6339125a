//! # HTTP Server
//!
//! Builds the router around an explicitly constructed [`BookStore`] and
//! serves it until Ctrl-C.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::catalog::BookStore;
use crate::observability::{log_event, Event, Logger, MetricsRegistry};

use super::book_routes::{book_routes, CatalogState};
use super::config::HttpServerConfig;
use super::observability_routes::{health_routes, observability_routes};

/// HTTP server for the book catalog
pub struct HttpServer {
    config: HttpServerConfig,
    store: Arc<BookStore>,
    metrics: Arc<MetricsRegistry>,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default())
    }

    /// Create a server whose store is seeded according to `config.seed`
    pub fn with_config(config: HttpServerConfig) -> Self {
        let store = if config.seed {
            BookStore::seeded()
        } else {
            BookStore::new()
        };
        Self::with_store(config, Arc::new(store))
    }

    /// Create a server around an existing store
    pub fn with_store(config: HttpServerConfig, store: Arc<BookStore>) -> Self {
        let metrics = Arc::new(MetricsRegistry::new());
        let router = Self::build_router(&config, store.clone(), metrics.clone());
        Self {
            config,
            store,
            metrics,
            router,
        }
    }

    fn build_router(
        config: &HttpServerConfig,
        store: Arc<BookStore>,
        metrics: Arc<MetricsRegistry>,
    ) -> Router {
        let catalog_state = Arc::new(CatalogState::new(store, metrics));

        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        let router = Router::new()
            .merge(health_routes())
            .nest("/observability", observability_routes(catalog_state.clone()));

        let router = if config.books_at_root() {
            router.merge(book_routes(catalog_state))
        } else {
            router.nest(&config.books_prefix, book_routes(catalog_state))
        };

        router.layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// The store the routes operate on
    pub fn store(&self) -> Arc<BookStore> {
        self.store.clone()
    }

    pub fn metrics(&self) -> Arc<MetricsRegistry> {
        self.metrics.clone()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until Ctrl-C
    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid socket address '{}': {}", self.config.socket_addr(), e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;

        let addr = addr.to_string();
        Logger::info(
            Event::Serving,
            &[
                ("addr", addr.as_str()),
                ("books_prefix", self.config.books_prefix.as_str()),
            ],
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        log_event(Event::ShutdownComplete);
        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

async fn shutdown_signal() {
    // A failed signal handler install means we just run until killed
    let _ = tokio::signal::ctrl_c().await;
}
