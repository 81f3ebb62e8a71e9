//! Location and active ship synchronization for a single character status record.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::character_status::CharacterStatusRepository,
    error::Error,
    esi::CharacterLocationApi,
    model::{character_status::CharacterStatusUpdate, esi::EsiResponse},
    service::ship_history::ShipHistoryRecorder,
    util::ship_name::normalize_ship_name,
};

/// Result of a single sync run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// No status record exists with the given ID
    NotFound,
    /// ESI did not return a location; nothing was written
    LocationUnavailable,
    /// ESI did not return a ship; nothing was written
    ShipUnavailable,
    /// Location and ship match the stored values
    Unchanged,
    /// At least one value changed and an event was queued
    Changed,
}

/// Pulls a character's location and ship from ESI into its status record.
pub struct LocationSyncService<'a> {
    db: &'a DatabaseConnection,
    esi: &'a dyn CharacterLocationApi,
    ship_history: &'a dyn ShipHistoryRecorder,
}

impl<'a> LocationSyncService<'a> {
    /// Creates a new instance of [`LocationSyncService`]
    pub fn new(
        db: &'a DatabaseConnection,
        esi: &'a dyn CharacterLocationApi,
        ship_history: &'a dyn ShipHistoryRecorder,
    ) -> Self {
        Self {
            db,
            esi,
            ship_history,
        }
    }

    /// Synchronizes one character status record with ESI.
    ///
    /// Location is requested first and ship second; if either request is not successful the
    /// failure is logged and the run ends without writing anything. Otherwise location and ship
    /// are written together, `event_queued_at` is set if any value changed, and the ship is
    /// passed to the ship history recorder.
    ///
    /// # Arguments
    /// - `character_status_id` - Primary key of the character status record
    ///
    /// # Returns
    /// - `Ok(SyncOutcome)` - What the run did
    /// - `Err(Error::EsiRequestError)` - ESI could not be reached or returned a malformed body
    /// - `Err(Error::DbErr)` - A database read or write failed
    pub async fn sync(&self, character_status_id: i32) -> Result<SyncOutcome, Error> {
        let status_repo = CharacterStatusRepository::new(self.db);

        let Some(status) = status_repo.find_by_id(character_status_id).await? else {
            return Ok(SyncOutcome::NotFound);
        };

        let character_id = status.character_id;

        let location = match self.esi.get_location(character_id).await? {
            EsiResponse::Success(location) => location,
            EsiResponse::Failed(failure) => {
                tracing::info!(
                    "Failed to fetch location for character {}: {:?}",
                    character_id,
                    failure
                );
                return Ok(SyncOutcome::LocationUnavailable);
            }
        };

        let ship = match self.esi.get_ship(character_id).await? {
            EsiResponse::Success(ship) => ship,
            EsiResponse::Failed(failure) => {
                tracing::info!(
                    "Failed to fetch ship for character {}: {:?}",
                    character_id,
                    failure
                );
                return Ok(SyncOutcome::ShipUnavailable);
            }
        };

        let update =
            CharacterStatusUpdate::new(&location, &ship, normalize_ship_name(&ship.ship_name));

        let changed = status_repo
            .update_location_and_ship(status, &update)
            .await?
            .is_some();

        if changed {
            status_repo
                .mark_event_queued(character_status_id, Utc::now().naive_utc())
                .await?;
        }

        self.ship_history
            .record(
                character_id,
                update.ship_item_id,
                update.ship_type_id,
                &update.ship_name,
            )
            .await?;

        if changed {
            Ok(SyncOutcome::Changed)
        } else {
            Ok(SyncOutcome::Unchanged)
        }
    }
}
