//! Data access layer repositories.
//!
//! This module contains the sea-orm repositories used by the location sync. Each repository
//! wraps a single table and exposes only the queries the services need.

pub mod character_status;
pub mod character_token;
pub mod ship_history;
