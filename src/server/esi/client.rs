use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::header;
use sea_orm::DatabaseConnection;
use serde::de::DeserializeOwned;

use crate::server::{
    data::character_token::CharacterTokenRepository,
    error::Error,
    esi::CharacterLocationApi,
    model::esi::{CharacterLocation, CharacterShip, EsiResponse, FailedRequest},
};

/// HTTP client for the authenticated character location and ship ESI endpoints.
///
/// Access tokens are read from the `eve_character_token` table, which is kept current by the
/// SSO login flow. A character without a valid token produces a failed response without any
/// request being sent.
#[derive(Clone)]
pub struct EsiClient {
    http: reqwest::Client,
    esi_url: String,
    db: DatabaseConnection,
}

impl EsiClient {
    /// Creates a new [`EsiClient`]
    ///
    /// # Arguments
    /// - `esi_url` - Base URL of ESI without trailing slash
    /// - `user_agent` - User agent sent with each request, should include contact information
    /// - `timeout` - Timeout applied to each request
    /// - `db` - Database holding character access tokens
    pub fn new(
        esi_url: impl Into<String>,
        user_agent: &str,
        timeout: Duration,
        db: DatabaseConnection,
    ) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            esi_url: esi_url.into(),
            db,
        })
    }

    async fn get_authenticated<T: DeserializeOwned>(
        &self,
        character_id: i64,
        resource: &str,
    ) -> Result<EsiResponse<T>, Error> {
        let token = CharacterTokenRepository::new(&self.db)
            .get_by_character_id(character_id)
            .await?;

        let token = match token {
            Some(token) if token.expires_at > Utc::now().naive_utc() => token,
            Some(_) => {
                return Ok(EsiResponse::Failed(FailedRequest {
                    status: None,
                    body: "access token expired".to_string(),
                }))
            }
            None => {
                return Ok(EsiResponse::Failed(FailedRequest {
                    status: None,
                    body: "no access token stored for character".to_string(),
                }))
            }
        };

        let url = format!("{}/characters/{}/{}/", self.esi_url, character_id, resource);

        let response = self
            .http
            .get(&url)
            .header(header::ACCEPT, "application/json")
            .bearer_auth(&token.access_token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();

            return Ok(EsiResponse::Failed(FailedRequest {
                status: Some(status.as_u16()),
                body,
            }));
        }

        Ok(EsiResponse::Success(response.json::<T>().await?))
    }
}

#[async_trait]
impl CharacterLocationApi for EsiClient {
    async fn get_location(
        &self,
        character_id: i64,
    ) -> Result<EsiResponse<CharacterLocation>, Error> {
        self.get_authenticated(character_id, "location").await
    }

    async fn get_ship(&self, character_id: i64) -> Result<EsiResponse<CharacterShip>, Error> {
        self.get_authenticated(character_id, "ship").await
    }
}
