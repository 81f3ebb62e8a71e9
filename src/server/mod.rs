//! Server application core modules.
//!
//! This module contains everything Wayfinder runs in the background: database access,
//! the ESI location client, per-character locking, the location sync service, the worker
//! pool that executes sync jobs, and the cron scheduler that dispatches them.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod data;
pub mod error;
pub mod esi;
pub mod lock;
pub mod model;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod util;
pub mod worker;
