use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

pub struct CharacterTokenRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterTokenRepository<'a> {
    /// Creates a new instance of [`CharacterTokenRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_character_id(
        &self,
        character_id: i64,
    ) -> Result<Option<entity::eve_character_token::Model>, DbErr> {
        entity::prelude::EveCharacterToken::find()
            .filter(entity::eve_character_token::Column::CharacterId.eq(character_id))
            .one(self.db)
            .await
    }
}
