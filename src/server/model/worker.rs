//! Worker job definitions for background task processing.
//!
//! This module defines the `WorkerJob` enum representing every kind of background job the
//! worker pool can execute. Each variant carries the minimal data needed to perform the task.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Background job types executed by the worker pool.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum WorkerJob {
    /// Refresh location and active ship for a single character status record.
    ///
    /// Only one job per `character_status_id` may run at a time; overlapping jobs for the
    /// same record are dropped by the handler.
    UpdateCharacterLocation {
        /// Database ID of the character status record to refresh.
        character_status_id: i32,
    },
}

impl WorkerJob {
    /// Name of the lock guarding this job against overlapping runs.
    pub fn lock_key(&self) -> String {
        match self {
            WorkerJob::UpdateCharacterLocation {
                character_status_id,
            } => format!("wayfinder:lock:character_location:{}", character_status_id),
        }
    }
}

impl fmt::Display for WorkerJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
