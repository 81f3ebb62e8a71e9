use async_trait::async_trait;
use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{data::ship_history::ShipHistoryRepository, error::Error};

/// Receives every ship observed during a location sync.
#[async_trait]
pub trait ShipHistoryRecorder: Send + Sync {
    /// Records that a character was seen flying a ship.
    ///
    /// # Arguments
    /// - `character_id` - EVE character ID
    /// - `ship_item_id` - Item ID of the specific ship
    /// - `ship_type_id` - Type ID of the ship hull
    /// - `ship_name` - Normalized ship name
    async fn record(
        &self,
        character_id: i64,
        ship_item_id: i64,
        ship_type_id: i64,
        ship_name: &str,
    ) -> Result<(), Error>;
}

/// Ship history stored in the `ship_history` table.
///
/// Consecutive sightings of the same ship collapse into one entry whose `last_seen_at` moves
/// forward. Switching to another ship starts a new entry, so flying back to an earlier ship
/// also produces a new entry.
pub struct ShipHistoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShipHistoryService<'a> {
    /// Creates a new instance of [`ShipHistoryService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl<'a> ShipHistoryRecorder for ShipHistoryService<'a> {
    async fn record(
        &self,
        character_id: i64,
        ship_item_id: i64,
        ship_type_id: i64,
        ship_name: &str,
    ) -> Result<(), Error> {
        let repo = ShipHistoryRepository::new(self.db);
        let now = Utc::now().naive_utc();

        match repo.get_latest_by_character_id(character_id).await? {
            Some(latest) if latest.ship_item_id == ship_item_id => {
                repo.update_last_seen(latest, ship_type_id, ship_name.to_string(), now)
                    .await?;
            }
            _ => {
                repo.create(
                    character_id,
                    ship_item_id,
                    ship_type_id,
                    ship_name.to_string(),
                    now,
                )
                .await?;
            }
        }

        Ok(())
    }
}
