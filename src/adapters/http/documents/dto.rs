//! HTTP DTOs for document endpoints.

use serde::Serialize;

use crate::domain::catalog::{DocumentCategory, DocumentNotFound, DocumentRecord};

/// The document library listing.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentListResponse {
    pub categories: Vec<DocumentCategory>,
    pub total_templates: u32,
}

/// Result of a document detail lookup.
///
/// A miss is not an HTTP error: it carries `found: false` and a hint.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum DocumentLookupResponse {
    Found {
        found: bool,
        document: DocumentRecord,
    },
    Missing {
        found: bool,
        message: String,
        suggestion: String,
    },
}

impl From<Result<&DocumentRecord, DocumentNotFound>> for DocumentLookupResponse {
    fn from(lookup: Result<&DocumentRecord, DocumentNotFound>) -> Self {
        match lookup {
            Ok(document) => DocumentLookupResponse::Found {
                found: true,
                document: document.clone(),
            },
            Err(miss) => DocumentLookupResponse::Missing {
                found: false,
                message: miss.to_string(),
                suggestion: miss.suggestion.to_string(),
            },
        }
    }
}
