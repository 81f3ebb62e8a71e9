//! sea-orm entities for Wayfinder's database tables.

pub mod prelude;

pub mod character_status;
pub mod eve_character_token;
pub mod ship_history;
