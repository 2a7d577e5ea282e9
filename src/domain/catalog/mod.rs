//! Document catalog module.
//!
//! Static knowledge about the legal templates the assistant sells, plus the
//! two lookups the rest of the system needs: keyword matching for chat
//! messages and name resolution for the detail endpoint.

mod record;
mod store;

pub use record::{DocumentCategory, DocumentRecord};
pub use store::{DocumentNotFound, DocumentStore, LOOKUP_SUGGESTION, TOTAL_TEMPLATES};
