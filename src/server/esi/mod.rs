//! ESI access for character location and active ship.
//!
//! The location sync only depends on the [`CharacterLocationApi`] trait so it can be driven
//! by any source of location data. [`EsiClient`] is the production implementation that calls
//! EVE Online's ESI over HTTP.

mod client;

pub use client::EsiClient;

use async_trait::async_trait;

use crate::server::{
    error::Error,
    model::esi::{CharacterLocation, CharacterShip, EsiResponse},
};

/// Source of a character's current location and active ship.
///
/// Implementations report an unusable response (error status, missing authorization) as
/// [`EsiResponse::Failed`] and reserve `Err` for transport faults such as timeouts.
#[async_trait]
pub trait CharacterLocationApi: Send + Sync {
    /// Fetches the solar system and docked station or structure of a character.
    async fn get_location(
        &self,
        character_id: i64,
    ) -> Result<EsiResponse<CharacterLocation>, Error>;

    /// Fetches the ship a character is currently flying.
    async fn get_ship(&self, character_id: i64) -> Result<EsiResponse<CharacterShip>, Error>;
}
