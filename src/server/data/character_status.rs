use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::character_status::CharacterStatusUpdate;

pub struct CharacterStatusRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterStatusRepository<'a> {
    /// Creates a new instance of [`CharacterStatusRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(
        &self,
        character_status_id: i32,
    ) -> Result<Option<entity::character_status::Model>, DbErr> {
        entity::prelude::CharacterStatus::find_by_id(character_status_id)
            .one(self.db)
            .await
    }

    /// Returns the IDs of every character status record, in ascending order
    pub async fn get_all_ids(&self) -> Result<Vec<i32>, DbErr> {
        entity::prelude::CharacterStatus::find()
            .select_only()
            .column(entity::character_status::Column::Id)
            .order_by_asc(entity::character_status::Column::Id)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Applies location and ship values to a status record in a single write
    ///
    /// No write is issued if every tracked field already holds the new value.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - At least one field changed, the updated record
    /// - `Ok(None)` - Nothing changed, nothing written
    /// - `Err(DbErr)` - The write failed
    pub async fn update_location_and_ship(
        &self,
        status: entity::character_status::Model,
        update: &CharacterStatusUpdate,
    ) -> Result<Option<entity::character_status::Model>, DbErr> {
        if !update.differs_from(&status) {
            return Ok(None);
        }

        let mut status: entity::character_status::ActiveModel = status.into();
        status.solarsystem_id = ActiveValue::Set(Some(update.solarsystem_id));
        status.station_id = ActiveValue::Set(update.station_id);
        status.structure_id = ActiveValue::Set(update.structure_id);
        status.ship_name = ActiveValue::Set(Some(update.ship_name.clone()));
        status.ship_type_id = ActiveValue::Set(Some(update.ship_type_id));
        status.ship_item_id = ActiveValue::Set(Some(update.ship_item_id));
        status.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let status = status.update(self.db).await?;

        Ok(Some(status))
    }

    /// Flags a status record as having an event waiting to be dispatched
    pub async fn mark_event_queued(
        &self,
        character_status_id: i32,
        queued_at: NaiveDateTime,
    ) -> Result<(), DbErr> {
        entity::prelude::CharacterStatus::update_many()
            .col_expr(
                entity::character_status::Column::EventQueuedAt,
                Expr::value(queued_at),
            )
            .filter(entity::character_status::Column::Id.eq(character_status_id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
