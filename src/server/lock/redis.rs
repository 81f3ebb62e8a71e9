use std::time::Duration;

use async_trait::async_trait;
use fred::{
    prelude::*,
    types::{Expiration, SetOptions},
};

use super::{lua::RELEASE_LOCK_SCRIPT, LockGuard, LockManager};
use crate::server::error::Error;

/// Lock manager backed by Valkey/Redis.
///
/// Acquisition is a single `SET key owner NX PX ttl`, so the lock and its expiry are created
/// atomically. Release runs a compare-and-delete script keyed on the owner token.
#[derive(Clone)]
pub struct RedisLockManager {
    pool: Pool,
}

impl RedisLockManager {
    /// Creates a new [`RedisLockManager`] using a connected pool
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LockManager for RedisLockManager {
    async fn try_acquire(&self, key: &str, ttl: Duration) -> Result<Option<LockGuard>, Error> {
        let guard = LockGuard::new(key.to_string());
        let ttl_ms = ttl.as_millis().max(1) as i64;

        // Reply is "OK" when set, nil when the key already exists
        let reply: Option<String> = self
            .pool
            .set(
                guard.key(),
                guard.owner(),
                Some(Expiration::PX(ttl_ms)),
                Some(SetOptions::NX),
                false,
            )
            .await?;

        Ok(reply.map(|_| guard))
    }

    async fn release(&self, guard: LockGuard) -> Result<bool, Error> {
        let released: i64 = self
            .pool
            .eval(
                RELEASE_LOCK_SCRIPT,
                vec![guard.key()],
                vec![guard.owner()],
            )
            .await?;

        Ok(released == 1)
    }
}
