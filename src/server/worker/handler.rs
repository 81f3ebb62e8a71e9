use std::{sync::Arc, time::Duration};

use sea_orm::DatabaseConnection;

use crate::server::{
    error::Error,
    esi::CharacterLocationApi,
    lock::LockManager,
    model::worker::WorkerJob,
    service::{location::LocationSyncService, ship_history::ShipHistoryService},
};

/// How long a character location lock is held before it expires on its own
pub const LOCATION_LOCK_TTL: Duration = Duration::from_secs(60);

/// Handler for processing worker jobs dispatched to the pool
///
/// This handler provides a centralized interface for executing different types
/// of worker jobs. Each job type has a corresponding method that handles the
/// specific business logic.
pub struct WorkerJobHandler {
    db: DatabaseConnection,
    esi: Arc<dyn CharacterLocationApi>,
    locks: Arc<dyn LockManager>,
}

impl WorkerJobHandler {
    /// Create a new WorkerJobHandler
    pub fn new(
        db: DatabaseConnection,
        esi: Arc<dyn CharacterLocationApi>,
        locks: Arc<dyn LockManager>,
    ) -> Self {
        Self { db, esi, locks }
    }

    /// Handle a worker job by delegating to the appropriate handler method
    pub async fn handle(&self, job: &WorkerJob) -> Result<(), Error> {
        match job {
            WorkerJob::UpdateCharacterLocation {
                character_status_id,
            } => self
                .update_character_location(*character_status_id)
                .await
                .map(|_| ()),
        }
    }

    /// Sync location and ship for a character status record under its lock
    ///
    /// If another run already holds the lock for this record the job is dropped. The lock is
    /// released once the sync finishes, whether it succeeded or not.
    ///
    /// # Returns
    /// - `Ok(true)` - The sync ran
    /// - `Ok(false)` - The lock was busy and the run was dropped
    /// - `Err(Error)` - The lock could not be acquired or the sync failed
    pub async fn update_character_location(&self, character_status_id: i32) -> Result<bool, Error> {
        let job = WorkerJob::UpdateCharacterLocation {
            character_status_id,
        };

        let Some(guard) = self
            .locks
            .try_acquire(&job.lock_key(), LOCATION_LOCK_TTL)
            .await?
        else {
            tracing::debug!(
                "Location update already running for character status {}, skipping",
                character_status_id
            );
            return Ok(false);
        };

        let ship_history = ShipHistoryService::new(&self.db);
        let result = LocationSyncService::new(&self.db, self.esi.as_ref(), &ship_history)
            .sync(character_status_id)
            .await;

        match self.locks.release(guard).await {
            Ok(true) => {}
            Ok(false) => tracing::warn!(
                "Lock for character status {} expired before release",
                character_status_id
            ),
            Err(e) => tracing::warn!(
                "Failed to release lock for character status {}: {:?}",
                character_status_id,
                e
            ),
        }

        let outcome = result.map_err(|e| {
            tracing::error!(
                "Failed to update location for character status {}: {:?}",
                character_status_id,
                e
            );
            e
        })?;

        tracing::debug!(
            "Location update for character status {} finished: {:?}",
            character_status_id,
            outcome
        );

        Ok(true)
    }
}
