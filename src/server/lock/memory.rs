use std::{collections::HashMap, sync::Arc, time::Duration};

use async_trait::async_trait;
use tokio::{sync::Mutex, time::Instant};

use super::{LockGuard, LockManager};
use crate::server::error::Error;

/// Process-local lock manager.
///
/// Suitable for single-node deployments and tests. Expired entries are replaced lazily on the
/// next acquisition of the same key.
#[derive(Clone, Default)]
pub struct MemoryLockManager {
    locks: Arc<Mutex<HashMap<String, (String, Instant)>>>,
}

impl MemoryLockManager {
    /// Creates a new [`MemoryLockManager`] with no locks held
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LockManager for MemoryLockManager {
    async fn try_acquire(&self, key: &str, ttl: Duration) -> Result<Option<LockGuard>, Error> {
        let mut locks = self.locks.lock().await;
        let now = Instant::now();

        if let Some((_, expires_at)) = locks.get(key) {
            if *expires_at > now {
                return Ok(None);
            }
        }

        let guard = LockGuard::new(key.to_string());
        locks.insert(key.to_string(), (guard.owner().to_string(), now + ttl));

        Ok(Some(guard))
    }

    async fn release(&self, guard: LockGuard) -> Result<bool, Error> {
        let mut locks = self.locks.lock().await;

        match locks.get(guard.key()) {
            Some((owner, expires_at)) if owner == guard.owner() && *expires_at > Instant::now() => {
                locks.remove(guard.key());
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
