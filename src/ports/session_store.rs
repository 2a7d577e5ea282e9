//! Session store port.
//!
//! Chat sessions live outside the conversation flow. The request handler
//! loads a session, runs the flow, and writes the session back through this
//! port.

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::session::Session;
use async_trait::async_trait;

/// Storage for chat sessions.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Find a session by its ID.
    ///
    /// Returns `None` if not found.
    async fn find(&self, id: &SessionId) -> Result<Option<Session>, DomainError>;

    /// Insert or replace a session.
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    async fn save(&self, session: &Session) -> Result<(), DomainError>;

    /// Remove a session. Returns whether one existed.
    async fn delete(&self, id: &SessionId) -> Result<bool, DomainError>;

    /// Number of stored sessions.
    async fn count(&self) -> Result<usize, DomainError>;
}
