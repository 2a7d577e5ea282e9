//! Per-session serialization.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

use crate::domain::foundation::SessionId;

/// Hands out one async lock per session id, so at most one mutation (a chat
/// turn or a clear) is in flight per session. Different ids never contend.
///
/// Build one per process and share it between every handler that writes
/// sessions.
#[derive(Debug, Default)]
pub struct SessionLocks {
    locks: Mutex<HashMap<SessionId, Arc<AsyncMutex<()>>>>,
}

impl SessionLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for exclusive access to `id`. Access ends when the guard drops.
    pub async fn acquire(&self, id: &SessionId) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
            // Entries only the map still references are idle.
            locks.retain(|_, lock| Arc::strong_count(lock) > 1);
            locks.entry(id.clone()).or_default().clone()
        };
        lock.lock_owned().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn same_id_is_exclusive() {
        let locks = Arc::new(SessionLocks::new());
        let id = SessionId::parse("s-1").unwrap();

        let guard = locks.acquire(&id).await;
        let waiter = {
            let locks = locks.clone();
            let id = id.clone();
            tokio::spawn(async move {
                let _guard = locks.acquire(&id).await;
            })
        };

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!waiter.is_finished());

        drop(guard);
        waiter.await.unwrap();
    }

    #[tokio::test]
    async fn different_ids_do_not_contend() {
        let locks = SessionLocks::new();
        let _a = locks.acquire(&SessionId::parse("a").unwrap()).await;
        let b = tokio::time::timeout(
            Duration::from_millis(50),
            locks.acquire(&SessionId::parse("b").unwrap()),
        )
        .await;
        assert!(b.is_ok());
    }

    #[tokio::test]
    async fn idle_entries_are_pruned() {
        let locks = SessionLocks::new();
        drop(locks.acquire(&SessionId::parse("a").unwrap()).await);
        let _b = locks.acquire(&SessionId::parse("b").unwrap()).await;

        let map = locks.locks.lock().unwrap();
        assert_eq!(map.len(), 1);
        assert!(map.contains_key(&SessionId::parse("b").unwrap()));
    }
}
