//! Stored ESI access token fixtures.

use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{constant::TEST_ACCESS_TOKEN, fixtures::TokenFixtures, TestError};

impl<'a> TokenFixtures<'a> {
    /// Insert a valid access token for a character, expiring in 20 minutes.
    pub async fn insert_character_token(
        &mut self,
        character_id: i64,
    ) -> Result<entity::eve_character_token::Model, TestError> {
        self.insert_character_token_expiring(character_id, Duration::minutes(20))
            .await
    }

    /// Insert an access token for a character expiring after `expires_in`.
    ///
    /// A negative duration creates an already expired token.
    pub async fn insert_character_token_expiring(
        &mut self,
        character_id: i64,
        expires_in: Duration,
    ) -> Result<entity::eve_character_token::Model, TestError> {
        let now = Utc::now();

        let token = entity::eve_character_token::ActiveModel {
            character_id: ActiveValue::Set(character_id),
            access_token: ActiveValue::Set(TEST_ACCESS_TOKEN.to_string()),
            expires_at: ActiveValue::Set((now + expires_in).naive_utc()),
            created_at: ActiveValue::Set(now.naive_utc()),
            updated_at: ActiveValue::Set(now.naive_utc()),
            ..Default::default()
        };

        Ok(token.insert(&self.setup.db).await?)
    }
}
