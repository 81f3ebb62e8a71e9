//! Character status record fixtures.

use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{fixtures::StatusFixtures, TestError};

/// Location and ship values a fixture record is created with.
#[derive(Debug, Clone)]
pub struct SyncedValues {
    pub solarsystem_id: i64,
    pub station_id: Option<i64>,
    pub structure_id: Option<i64>,
    pub ship_name: String,
    pub ship_type_id: i64,
    pub ship_item_id: i64,
}

impl<'a> StatusFixtures<'a> {
    /// Insert a character status record that has never been synced.
    ///
    /// Timestamps are backdated by one minute so tests can detect writes by comparing
    /// `updated_at`.
    pub async fn insert_character_status(
        &mut self,
        character_id: i64,
    ) -> Result<entity::character_status::Model, TestError> {
        let backdated = (Utc::now() - Duration::minutes(1)).naive_utc();

        let status = entity::character_status::ActiveModel {
            character_id: ActiveValue::Set(character_id),
            solarsystem_id: ActiveValue::Set(None),
            station_id: ActiveValue::Set(None),
            structure_id: ActiveValue::Set(None),
            ship_name: ActiveValue::Set(None),
            ship_type_id: ActiveValue::Set(None),
            ship_item_id: ActiveValue::Set(None),
            event_queued_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(backdated),
            updated_at: ActiveValue::Set(backdated),
            ..Default::default()
        };

        Ok(status.insert(&self.setup.db).await?)
    }

    /// Insert a character status record that already holds the provided values.
    pub async fn insert_synced_character_status(
        &mut self,
        character_id: i64,
        values: SyncedValues,
    ) -> Result<entity::character_status::Model, TestError> {
        let backdated = (Utc::now() - Duration::minutes(1)).naive_utc();

        let status = entity::character_status::ActiveModel {
            character_id: ActiveValue::Set(character_id),
            solarsystem_id: ActiveValue::Set(Some(values.solarsystem_id)),
            station_id: ActiveValue::Set(values.station_id),
            structure_id: ActiveValue::Set(values.structure_id),
            ship_name: ActiveValue::Set(Some(values.ship_name)),
            ship_type_id: ActiveValue::Set(Some(values.ship_type_id)),
            ship_item_id: ActiveValue::Set(Some(values.ship_item_id)),
            event_queued_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(backdated),
            updated_at: ActiveValue::Set(backdated),
            ..Default::default()
        };

        Ok(status.insert(&self.setup.db).await?)
    }
}
