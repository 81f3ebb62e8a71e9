//! Data models shared across the server.
//!
//! This module contains the transient ESI payloads consumed by the location sync, the update
//! applied to character status records, and the worker job definitions dispatched by the
//! scheduler.

pub mod character_status;
pub mod esi;
pub mod worker;
