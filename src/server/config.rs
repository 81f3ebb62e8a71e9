//! Environment configuration for the Wayfinder server.
//!
//! Configuration is read once at startup. Required variables must be present; optional ones
//! fall back to defaults suited to a small production deployment.

use std::time::Duration;

use crate::server::error::config::ConfigError;

const DEFAULT_ESI_URL: &str = "https://esi.evetech.net/latest";
const DEFAULT_ESI_TIMEOUT_SECS: u64 = 30;
const DEFAULT_WORKERS: usize = 10;

/// Every minute at second 0
const DEFAULT_LOCATION_SYNC_CRON: &str = "0 * * * * *";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Contact email embedded in the ESI user agent.
    pub contact_email: String,
    /// User agent sent with every ESI request.
    pub user_agent: String,
    /// Postgres connection URL.
    pub database_url: String,
    /// Valkey/Redis connection URL used by the lock manager.
    pub valkey_url: String,
    /// Base URL of the ESI API, without trailing slash.
    pub esi_url: String,
    /// Timeout applied to every ESI request.
    pub esi_timeout: Duration,
    /// Maximum number of location syncs running at once.
    pub workers: usize,
    /// Cron expression (with seconds) for dispatching location syncs.
    pub location_sync_cron: String,
}

impl Config {
    /// Loads configuration from the process environment.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and all values valid
    /// - `Err(ConfigError::MissingEnvVar)` - A required variable is not set
    /// - `Err(ConfigError::InvalidEnvValue)` - A numeric variable could not be parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Loads configuration using the provided variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> Result<String, ConfigError> {
            lookup(key).ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
        };

        let contact_email = required("CONTACT_EMAIL")?;
        let database_url = required("DATABASE_URL")?;
        let valkey_url = required("VALKEY_URL")?;

        let esi_url = lookup("ESI_URL")
            .unwrap_or_else(|| DEFAULT_ESI_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let esi_timeout_secs = match lookup("ESI_TIMEOUT_SECS") {
            Some(value) => parse_number::<u64>("ESI_TIMEOUT_SECS", &value)?,
            None => DEFAULT_ESI_TIMEOUT_SECS,
        };

        let workers = match lookup("WORKERS") {
            Some(value) => parse_number::<usize>("WORKERS", &value)?,
            None => DEFAULT_WORKERS,
        };

        if workers == 0 {
            return Err(ConfigError::InvalidEnvValue {
                var: "WORKERS".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        let location_sync_cron =
            lookup("LOCATION_SYNC_CRON").unwrap_or_else(|| DEFAULT_LOCATION_SYNC_CRON.to_string());

        let user_agent = format!(
            "{}/{} ({}; +{})",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            contact_email,
            env!("CARGO_PKG_REPOSITORY")
        );

        Ok(Self {
            contact_email,
            user_agent,
            database_url,
            valkey_url,
            esi_url,
            esi_timeout: Duration::from_secs(esi_timeout_secs),
            workers,
            location_sync_cron,
        })
    }
}

fn parse_number<T>(var: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: e.to_string(),
        })
}
