//! Business logic for tracking character location and ship.
//!
//! - [`location::LocationSyncService`] fetches location and ship from ESI and applies them to
//!   a character status record
//! - [`ship_history::ShipHistoryService`] keeps a per-character log of flown ships

pub mod location;
pub mod ship_history;
