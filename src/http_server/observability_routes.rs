//! Observability HTTP Routes
//!
//! Health check and metrics snapshot.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::observability::MetricsSnapshot;

use super::book_routes::CatalogState;
use super::errors::ApiResult;

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Create observability routes
///
/// Metrics read the book count from the catalog's store on every request.
pub fn observability_routes(state: Arc<CatalogState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .with_state(state)
}

/// Health check route at the root
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_handler))
}

async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}

async fn metrics_handler(
    State(state): State<Arc<CatalogState>>,
) -> ApiResult<Json<MetricsSnapshot>> {
    Ok(Json(state.metrics_snapshot()?))
}
