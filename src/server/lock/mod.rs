//! Named, expiring locks for keeping jobs from overlapping.
//!
//! A lock is acquired with a time-to-live and is released either explicitly or when the TTL
//! runs out, so a crashed worker never blocks a key forever. Acquisition never waits: if the
//! key is already held the caller gets `None` and is expected to drop its work.
//!
//! - [`RedisLockManager`] shares locks across processes through Valkey/Redis
//! - [`MemoryLockManager`] keeps locks inside the current process

mod lua;
mod memory;
mod redis;

pub use memory::MemoryLockManager;
pub use redis::RedisLockManager;

use std::time::Duration;

use async_trait::async_trait;

use crate::server::error::Error;

/// Proof of a held lock, required to release it.
///
/// The owner token ensures a run whose lock already expired cannot release a lock that has
/// since been acquired by another run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockGuard {
    key: String,
    owner: String,
}

impl LockGuard {
    pub(crate) fn new(key: String) -> Self {
        Self {
            key,
            owner: format!("{:016x}", rand::random::<u64>()),
        }
    }

    /// Name of the locked key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Random token identifying this holder.
    pub fn owner(&self) -> &str {
        &self.owner
    }
}

/// Expiring mutual exclusion keyed by name with drop-if-busy semantics.
#[async_trait]
pub trait LockManager: Send + Sync {
    /// Attempts to acquire `key` for at most `ttl`.
    ///
    /// # Returns
    /// - `Ok(Some(LockGuard))` - The lock is now held by the caller
    /// - `Ok(None)` - The lock is held by someone else
    /// - `Err(Error)` - The lock backend could not be reached
    async fn try_acquire(&self, key: &str, ttl: Duration) -> Result<Option<LockGuard>, Error>;

    /// Releases a held lock.
    ///
    /// # Returns
    /// - `Ok(true)` - The lock was released
    /// - `Ok(false)` - The lock had already expired or belongs to another holder
    /// - `Err(Error)` - The lock backend could not be reached
    async fn release(&self, guard: LockGuard) -> Result<bool, Error>;
}
