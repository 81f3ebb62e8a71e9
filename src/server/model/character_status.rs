//! Location and ship values applied to a character status record.

use crate::server::model::esi::{CharacterLocation, CharacterShip};

/// New location and ship values for a character status record.
///
/// Location and ship are always applied together so a record never mixes a fresh location
/// with a stale ship or vice versa.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterStatusUpdate {
    pub solarsystem_id: i64,
    pub station_id: Option<i64>,
    pub structure_id: Option<i64>,
    /// Normalized ship name
    pub ship_name: String,
    pub ship_type_id: i64,
    pub ship_item_id: i64,
}

impl CharacterStatusUpdate {
    /// Builds an update from ESI payloads and an already normalized ship name.
    pub fn new(location: &CharacterLocation, ship: &CharacterShip, ship_name: String) -> Self {
        Self {
            solarsystem_id: location.solar_system_id,
            station_id: location.station_id,
            structure_id: location.structure_id,
            ship_name,
            ship_type_id: ship.ship_type_id,
            ship_item_id: ship.ship_item_id,
        }
    }

    /// Returns true if applying this update would change any tracked field of `status`.
    pub fn differs_from(&self, status: &entity::character_status::Model) -> bool {
        status.solarsystem_id != Some(self.solarsystem_id)
            || status.station_id != self.station_id
            || status.structure_id != self.structure_id
            || status.ship_name.as_deref() != Some(self.ship_name.as_str())
            || status.ship_type_id != Some(self.ship_type_id)
            || status.ship_item_id != Some(self.ship_item_id)
    }
}
