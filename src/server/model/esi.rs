//! ESI response payloads for character location and ship endpoints.

use serde::{Deserialize, Serialize};

/// Current location of a character as reported by `GET /characters/{id}/location/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterLocation {
    /// Solar system the character is in.
    pub solar_system_id: i64,
    /// NPC station the character is docked in, if any.
    #[serde(default)]
    pub station_id: Option<i64>,
    /// Player structure the character is docked in, if any.
    #[serde(default)]
    pub structure_id: Option<i64>,
}

/// Active ship of a character as reported by `GET /characters/{id}/ship/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterShip {
    /// Unique item ID of the ship instance.
    pub ship_item_id: i64,
    /// Raw ship name, possibly wrapped as `u'...'` with unicode escapes.
    pub ship_name: String,
    /// Type ID of the ship hull.
    pub ship_type_id: i64,
}

/// Details of an ESI request that did not produce a usable response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedRequest {
    /// HTTP status code, absent when no request was sent.
    pub status: Option<u16>,
    /// Raw response body or a short reason when no request was sent.
    pub body: String,
}

/// Outcome of a character-scoped ESI request.
///
/// A `Failed` response is an expected condition (character logged out of SSO, ESI returning
/// an error status) and leaves it to the caller to log and skip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EsiResponse<T> {
    /// ESI returned a success status with a decodable body.
    Success(T),
    /// ESI returned a non-success status, or the request could not be authorized.
    Failed(FailedRequest),
}
