use sea_orm::DatabaseConnection;

use crate::server::{
    data::character_status::CharacterStatusRepository, error::Error, model::worker::WorkerJob,
    worker::WorkerPool,
};

/// Dispatches one location sync job per character status record.
///
/// # Returns
/// - `Ok(usize)` - Number of jobs accepted by the pool
/// - `Err(Error::DbErr)` - Failed to list character status records
pub async fn schedule_character_location_update(
    db: DatabaseConnection,
    pool: WorkerPool,
) -> Result<usize, Error> {
    let ids = CharacterStatusRepository::new(&db).get_all_ids().await?;

    let mut dispatched = 0;
    for character_status_id in ids {
        if !pool
            .dispatch(WorkerJob::UpdateCharacterLocation {
                character_status_id,
            })
            .await
        {
            break;
        }
        dispatched += 1;
    }

    Ok(dispatched)
}
