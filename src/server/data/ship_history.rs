use chrono::NaiveDateTime;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct ShipHistoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShipHistoryRepository<'a> {
    /// Creates a new instance of [`ShipHistoryRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        character_id: i64,
        ship_item_id: i64,
        ship_type_id: i64,
        ship_name: String,
        seen_at: NaiveDateTime,
    ) -> Result<entity::ship_history::Model, DbErr> {
        let entry = entity::ship_history::ActiveModel {
            character_id: ActiveValue::Set(character_id),
            ship_item_id: ActiveValue::Set(ship_item_id),
            ship_type_id: ActiveValue::Set(ship_type_id),
            ship_name: ActiveValue::Set(ship_name),
            first_seen_at: ActiveValue::Set(seen_at),
            last_seen_at: ActiveValue::Set(seen_at),
            ..Default::default()
        };

        entry.insert(self.db).await
    }

    /// Most recently seen history entry for a character
    pub async fn get_latest_by_character_id(
        &self,
        character_id: i64,
    ) -> Result<Option<entity::ship_history::Model>, DbErr> {
        entity::prelude::ShipHistory::find()
            .filter(entity::ship_history::Column::CharacterId.eq(character_id))
            .order_by_desc(entity::ship_history::Column::LastSeenAt)
            .order_by_desc(entity::ship_history::Column::Id)
            .one(self.db)
            .await
    }

    /// All history entries for a character, oldest first
    pub async fn get_by_character_id(
        &self,
        character_id: i64,
    ) -> Result<Vec<entity::ship_history::Model>, DbErr> {
        entity::prelude::ShipHistory::find()
            .filter(entity::ship_history::Column::CharacterId.eq(character_id))
            .order_by_asc(entity::ship_history::Column::Id)
            .all(self.db)
            .await
    }

    /// Refreshes the type, name and last seen time of an existing entry
    pub async fn update_last_seen(
        &self,
        entry: entity::ship_history::Model,
        ship_type_id: i64,
        ship_name: String,
        seen_at: NaiveDateTime,
    ) -> Result<entity::ship_history::Model, DbErr> {
        let mut entry: entity::ship_history::ActiveModel = entry.into();
        entry.ship_type_id = ActiveValue::Set(ship_type_id);
        entry.ship_name = ActiveValue::Set(ship_name);
        entry.last_seen_at = ActiveValue::Set(seen_at);

        entry.update(self.db).await
    }
}
