pub use super::character_status::Entity as CharacterStatus;
pub use super::eve_character_token::Entity as EveCharacterToken;
pub use super::ship_history::Entity as ShipHistory;
