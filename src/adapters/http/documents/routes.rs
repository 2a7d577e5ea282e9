//! HTTP routes for document endpoints.

use axum::{routing::get, Router};

use super::handlers::{get_document, list_documents, DocumentHandlers};

/// Creates the document router.
///
/// Routes:
/// - `GET /api/documents` - Category listing
/// - `GET /api/documents/:name` - Detail lookup by key or name
pub fn document_routes(handlers: DocumentHandlers) -> Router {
    Router::new()
        .route("/api/documents", get(list_documents))
        .route("/api/documents/:name", get(get_document))
        .with_state(handlers)
}
