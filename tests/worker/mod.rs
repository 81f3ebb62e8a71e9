mod pool;

use std::{sync::Arc, time::Duration};

use wayfinder::server::lock::MemoryLockManager;

const CHARACTER_ID: i64 = 2114794365;

fn memory_locks() -> Arc<MemoryLockManager> {
    Arc::new(MemoryLockManager::new())
}

/// Poll until `condition` holds or a second has passed
async fn wait_until<F: Fn() -> bool>(condition: F) -> bool {
    for _ in 0..100 {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    condition()
}
