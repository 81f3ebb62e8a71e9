//! Tests for WorkerPool dispatching, permits and shutdown.

use sea_orm::EntityTrait;
use wayfinder::server::model::worker::WorkerJob;
use wayfinder_test_utils::prelude::*;

use super::*;
use crate::TestContextExt;

/// Tests initial permit availability matches configured concurrency.
///
/// Expected: available_permits() returns 4, active_job_count() returns 0
#[tokio::test]
async fn all_permits_available_initially() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let pool = test.worker_pool(memory_locks(), 4);

    assert_eq!(pool.available_permits(), 4);
    assert_eq!(pool.max_concurrent_jobs(), 4);
    assert_eq!(pool.active_job_count(), 0);
    assert!(pool.is_running());

    Ok(())
}

/// Tests that a dispatched job runs to completion.
///
/// Expected: the character status record is synced and all permits are returned
#[tokio::test]
async fn processes_dispatched_job() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_location_tables()
        .with_character_status(CHARACTER_ID)
        .with_character_token(CHARACTER_ID)
        .with_location_endpoint(CHARACTER_ID, 30000142, None, None, 1)
        .with_ship_endpoint(CHARACTER_ID, 1000000001, "Rifter", 587, 1)
        .build()
        .await?;
    let pool = test.worker_pool(memory_locks(), 4);

    let accepted = pool
        .dispatch(WorkerJob::UpdateCharacterLocation {
            character_status_id: 1,
        })
        .await;
    assert!(accepted);

    let db = test.db.clone();
    let mut synced = false;
    for _ in 0..100 {
        let status = entity::prelude::CharacterStatus::find_by_id(1)
            .one(&db)
            .await?
            .expect("Character status should exist");
        if status.event_queued_at.is_some() {
            synced = true;
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    assert!(synced, "job should have synced the record");
    assert!(wait_until(|| pool.active_job_count() == 0).await);
    test.assert_mocks();

    pool.stop().await;

    Ok(())
}

/// Tests that a failing job does not take the pool down.
///
/// Expected: permits are returned after the job fails and the pool keeps running
#[tokio::test]
async fn survives_failing_job() -> Result<(), TestError> {
    // No tables, every job fails on its first query
    let test = TestBuilder::new().build().await?;
    let pool = test.worker_pool(memory_locks(), 2);

    pool.dispatch(WorkerJob::UpdateCharacterLocation {
        character_status_id: 1,
    })
    .await;

    assert!(wait_until(|| pool.active_job_count() == 0).await);
    assert!(pool.is_running());
    assert_eq!(pool.available_permits(), 2);

    Ok(())
}

/// Tests that a stopped pool rejects new jobs.
///
/// Expected: stop() is idempotent and dispatch() returns false afterwards
#[tokio::test]
async fn rejects_jobs_after_stop() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let pool = test.worker_pool(memory_locks(), 2);

    pool.stop().await;
    pool.stop().await;

    let accepted = pool
        .dispatch(WorkerJob::UpdateCharacterLocation {
            character_status_id: 1,
        })
        .await;

    assert!(!accepted);
    assert!(!pool.is_running());

    Ok(())
}
