//! HTTP handlers for document endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::catalog::{DocumentStore, TOTAL_TEMPLATES};

use super::dto::{DocumentListResponse, DocumentLookupResponse};

#[derive(Clone)]
pub struct DocumentHandlers {
    documents: Arc<DocumentStore>,
}

impl DocumentHandlers {
    pub fn new(documents: Arc<DocumentStore>) -> Self {
        Self { documents }
    }
}

/// GET /api/documents - List document categories
pub async fn list_documents(State(handlers): State<DocumentHandlers>) -> Response {
    let response = DocumentListResponse {
        categories: handlers.documents.categories().to_vec(),
        total_templates: TOTAL_TEMPLATES,
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// GET /api/documents/:name - Look up one document
pub async fn get_document(
    State(handlers): State<DocumentHandlers>,
    Path(name): Path<String>,
) -> Response {
    let lookup = handlers.documents.find_details(&name);
    if lookup.is_err() {
        tracing::debug!(name = %name, "document lookup missed");
    }
    (StatusCode::OK, Json(DocumentLookupResponse::from(lookup))).into_response()
}
