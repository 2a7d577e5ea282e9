//! ClearSessionHandler - Command handler for deleting a session.

use std::sync::Arc;

use crate::application::handlers::SessionLocks;
use crate::domain::foundation::SessionId;
use crate::domain::session::SessionError;
use crate::ports::SessionStore;

/// Command to delete a session.
#[derive(Debug, Clone)]
pub struct ClearSessionCommand {
    pub session_id: SessionId,
}

/// Handler for deleting sessions. Deleting an unknown id is not an error.
///
/// Shares its [`SessionLocks`] with the chat handler so a clear never
/// interleaves with an in-flight turn on the same id.
pub struct ClearSessionHandler {
    store: Arc<dyn SessionStore>,
    locks: Arc<SessionLocks>,
}

impl ClearSessionHandler {
    pub fn new(store: Arc<dyn SessionStore>, locks: Arc<SessionLocks>) -> Self {
        Self { store, locks }
    }

    /// Returns whether a session was actually removed.
    pub async fn handle(&self, cmd: ClearSessionCommand) -> Result<bool, SessionError> {
        let _guard = self.locks.acquire(&cmd.session_id).await;
        let existed = self.store.delete(&cmd.session_id).await?;
        if existed {
            tracing::info!(session_id = %cmd.session_id, "session cleared");
        }
        Ok(existed)
    }
}
