use fred::prelude::*;

use crate::TestError;

/// Redis test setup with automatic cleanup
///
/// This struct manages a Redis connection pool and a unique key prefix for testing. Every
/// key created through [`RedisTest::key`] is deleted when the struct is dropped.
pub struct RedisTest {
    pub redis_pool: Pool,
    prefix: String,
    keys: std::sync::Mutex<Vec<String>>,
}

impl RedisTest {
    /// Create a new RedisTest instance with a unique key prefix
    pub async fn new() -> Result<Self, TestError> {
        let redis_config = Config::from_url("redis://127.0.0.1:6379")?;
        let redis_pool = Pool::new(redis_config, None, None, None, 5)?;
        redis_pool.init().await?;

        Ok(RedisTest {
            redis_pool,
            prefix: Self::generate_unique_prefix(),
            keys: std::sync::Mutex::new(Vec::new()),
        })
    }

    /// Build a key unique to this test instance
    ///
    /// This ensures tests running in parallel never contend on the same key.
    pub fn key(&self, name: &str) -> String {
        let key = format!("{}:{}", self.prefix, name);
        if let Ok(mut keys) = self.keys.lock() {
            keys.push(key.clone());
        }
        key
    }

    /// Generate a unique prefix using timestamp and thread ID
    fn generate_unique_prefix() -> String {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};
        use std::time::{SystemTime, UNIX_EPOCH};

        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();

        let thread_id = std::thread::current().id();

        let mut hasher = DefaultHasher::new();
        timestamp.hash(&mut hasher);
        thread_id.hash(&mut hasher);
        let hash = hasher.finish();

        format!("test:{}:{:x}", timestamp, hash)
    }

    /// Explicitly clean up Redis data
    ///
    /// Call this at the end of your test to ensure cleanup completes.
    pub async fn cleanup(self) -> Result<(), TestError> {
        let keys = self.keys.lock().map(|k| k.clone()).unwrap_or_default();
        for key in keys {
            self.redis_pool.del::<(), _>(&key).await?;
        }
        Ok(())
    }
}
