//! HTTP adapter for the document library.

mod dto;
mod handlers;
mod routes;

pub use dto::{DocumentListResponse, DocumentLookupResponse};
pub use handlers::DocumentHandlers;
pub use routes::document_routes;
