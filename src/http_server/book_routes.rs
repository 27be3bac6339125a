//! Book HTTP Routes
//!
//! Thin handlers mapping the five book endpoints onto [`BookStore`].
//!
//! | Method | Path    | Success | Errors        |
//! |--------|---------|---------|---------------|
//! | GET    | `/`     | 200     |               |
//! | POST   | `/`     | 201     | 400, 422      |
//! | GET    | `/{id}` | 200     | 404, 422      |
//! | PUT    | `/{id}` | 200     | 400, 404, 422 |
//! | DELETE | `/{id}` | 204     | 404, 422      |

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::catalog::{Book, BookDraft, BookId, BookStore, CatalogResult};
use crate::observability::{Event, Logger, MetricsRegistry, MetricsSnapshot};

use super::errors::{ApiError, ApiResult};

// ==================
// Shared State
// ==================

/// Catalog state shared across handlers
pub struct CatalogState {
    pub store: Arc<BookStore>,
    pub metrics: Arc<MetricsRegistry>,
}

impl CatalogState {
    pub fn new(store: Arc<BookStore>, metrics: Arc<MetricsRegistry>) -> Self {
        Self { store, metrics }
    }

    /// Counters plus the live book count read from the store
    pub fn metrics_snapshot(&self) -> CatalogResult<MetricsSnapshot> {
        let books = self.store.len()? as u64;
        Ok(self.metrics.snapshot(books))
    }

    /// Count and log an error before it is returned to the client
    fn reject(&self, operation: &str, err: impl Into<ApiError>) -> ApiError {
        let err = err.into();
        let status = err.status_code().as_u16().to_string();
        let reason = err.to_string();

        self.metrics.record_rejected();
        Logger::warn(
            Event::RequestRejected,
            &[
                ("operation", operation),
                ("reason", reason.as_str()),
                ("status", status.as_str()),
            ],
        );
        err
    }
}

// ==================
// Book Routes
// ==================

/// Create book routes, relative to the mount point
pub fn book_routes(state: Arc<CatalogState>) -> Router {
    Router::new()
        .route("/", get(list_books_handler).post(create_book_handler))
        .route(
            "/:id",
            get(get_book_handler)
                .put(update_book_handler)
                .delete(delete_book_handler),
        )
        .with_state(state)
}

// ==================
// Extraction Helpers
// ==================

fn book_id(
    state: &CatalogState,
    operation: &str,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<BookId> {
    let raw = match path {
        Ok(Path(raw)) => raw,
        Err(rejection) => {
            return Err(state.reject(
                operation,
                ApiError::MalformedPayload(rejection.body_text()),
            ))
        }
    };

    // Negative integers are well-formed but can never be stored
    u64::try_from(raw)
        .map(BookId::new)
        .map_err(|_| state.reject(operation, ApiError::UnknownId(raw)))
}

fn book_draft(
    state: &CatalogState,
    operation: &str,
    payload: Result<Json<BookDraft>, JsonRejection>,
) -> ApiResult<BookDraft> {
    match payload {
        Ok(Json(draft)) => Ok(draft),
        Err(rejection) => Err(state.reject(
            operation,
            ApiError::MalformedPayload(rejection.body_text()),
        )),
    }
}

// ==================
// Handlers
// ==================

async fn list_books_handler(
    State(state): State<Arc<CatalogState>>,
) -> ApiResult<Json<BTreeMap<BookId, Book>>> {
    let books = state.store.list().map_err(|e| state.reject("list", e))?;
    Ok(Json(books))
}

async fn create_book_handler(
    State(state): State<Arc<CatalogState>>,
    payload: Result<Json<BookDraft>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Book>)> {
    let draft = book_draft(&state, "create", payload)?;

    let book = state
        .store
        .create(draft)
        .map_err(|e| state.reject("create", e))?;

    state.metrics.record_created();
    let id = book.id.to_string();
    Logger::info(
        Event::BookCreated,
        &[("genre", book.genre.as_str()), ("id", id.as_str())],
    );

    Ok((StatusCode::CREATED, Json(book)))
}

async fn get_book_handler(
    State(state): State<Arc<CatalogState>>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Book>> {
    let id = book_id(&state, "get", path).map_err(|err| {
        if err.status_code() == StatusCode::NOT_FOUND {
            state.metrics.record_lookup(false);
        }
        err
    })?;

    let result = state.store.get(id);
    state.metrics.record_lookup(result.is_ok());

    let book = result.map_err(|e| state.reject("get", e))?;
    Ok(Json(book))
}

async fn update_book_handler(
    State(state): State<Arc<CatalogState>>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<BookDraft>, JsonRejection>,
) -> ApiResult<Json<Book>> {
    let id = book_id(&state, "update", path)?;
    let draft = book_draft(&state, "update", payload)?;

    let book = state
        .store
        .update(id, draft)
        .map_err(|e| state.reject("update", e))?;

    state.metrics.record_updated();
    let id = book.id.to_string();
    Logger::info(Event::BookUpdated, &[("id", id.as_str())]);

    Ok(Json(book))
}

async fn delete_book_handler(
    State(state): State<Arc<CatalogState>>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<StatusCode> {
    let id = book_id(&state, "delete", path)?;

    state
        .store
        .delete(id)
        .map_err(|e| state.reject("delete", e))?;

    state.metrics.record_deleted();
    let id = id.to_string();
    Logger::info(Event::BookDeleted, &[("id", id.as_str())]);

    Ok(StatusCode::NO_CONTENT)
}
