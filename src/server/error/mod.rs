//! Error types for the Wayfinder server.
//!
//! This module provides the error handling for the server with specialized error types for
//! configuration issues. All errors use `thiserror` for ergonomic definitions with automatic
//! `Display` and `Error` trait implementations.

pub mod config;

use thiserror::Error;

use crate::server::error::config::ConfigError;

/// Main error type for the Wayfinder server.
///
/// This enum aggregates domain-specific error types and external library errors into a
/// single unified error type. It uses `thiserror`'s `#[from]` attribute to enable automatic
/// conversion from underlying error types via the `?` operator.
///
/// Failed ESI responses (non-success status, missing access token) are not errors; they are
/// reported through [`EsiResponse::Failed`](crate::server::model::esi::EsiResponse) so the
/// sync can log them and abort cleanly. Only transport faults end up here.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// ESI transport error (connection failure, timeout, undecodable body).
    #[error(transparent)]
    EsiRequestError(#[from] reqwest::Error),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Valkey/Redis error (connection, command or script execution).
    #[error(transparent)]
    RedisError(#[from] fred::error::Error),
    /// Cron scheduler error (job registration, scheduler startup).
    #[error(transparent)]
    SchedulerError(#[from] tokio_cron_scheduler::JobSchedulerError),
}
