//! Scheduler for periodic location sync runs.
//!
//! This module provides a cron-based job scheduler that dispatches a location sync job to the
//! worker pool for every character status record each time the configured cron expression
//! fires. Runs that overlap a still-running sync for the same record are dropped by the
//! worker handler's lock.

pub mod character_location;

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::Error, worker::WorkerPool};

use self::character_location::schedule_character_location_update;

/// Job scheduler for managing background location sync tasks.
pub struct Scheduler {
    db: DatabaseConnection,
    pool: WorkerPool,
    sched: JobScheduler,
}

impl Scheduler {
    /// Creates a new instance of [`Scheduler`].
    ///
    /// # Arguments
    /// - `db` - Database connection for querying character status records
    /// - `pool` - Worker pool for dispatching sync jobs
    ///
    /// # Returns
    /// - `Ok(Scheduler)` - Successfully created scheduler instance
    /// - `Err(Error)` - Failed to initialize the underlying job scheduler
    pub async fn new(db: DatabaseConnection, pool: WorkerPool) -> Result<Self, Error> {
        let sched = JobScheduler::new().await?;
        Ok(Self { db, pool, sched })
    }

    /// Registers the location sync job and starts the scheduler.
    ///
    /// # Arguments
    /// - `location_sync_cron` - Cron expression with seconds, e.g. `"0 * * * * *"`
    ///
    /// # Returns
    /// - `Ok(())` - Job registered and scheduler started
    /// - `Err(Error)` - Invalid cron expression or scheduler error
    pub async fn start(&mut self, location_sync_cron: &str) -> Result<(), Error> {
        self.schedule_job(
            location_sync_cron,
            "character location",
            schedule_character_location_update,
        )
        .await?;

        self.sched.start().await?;

        tracing::info!(
            "Scheduler started, character location sync runs on \"{}\"",
            location_sync_cron
        );

        Ok(())
    }

    /// Stops the scheduler; jobs already dispatched keep running in the worker pool.
    pub async fn shutdown(&mut self) -> Result<(), Error> {
        self.sched.shutdown().await?;

        tracing::info!("Scheduler stopped");

        Ok(())
    }

    /// Schedules a recurring job with the specified cron expression.
    ///
    /// The function receives clones of the database connection and worker pool. On execution
    /// the job logs the number of jobs dispatched, or the error if dispatching failed.
    ///
    /// # Arguments
    /// - `cron` - Cron expression defining when the job should run
    /// - `name` - Human-readable name for the job (used in log messages)
    /// - `function` - Async function that dispatches jobs, returning how many it dispatched
    ///
    /// # Returns
    /// - `Ok(())` - Job successfully registered with the scheduler
    /// - `Err(Error)` - Failed to create or add the job (invalid cron expression or scheduler error)
    pub async fn schedule_job<F, Fut>(
        &mut self,
        cron: &str,
        name: &str,
        function: F,
    ) -> Result<(), Error>
    where
        F: Fn(DatabaseConnection, WorkerPool) -> Fut + Send + Sync + 'static,
        Fut: std::future::Future<Output = Result<usize, Error>> + Send + 'static,
    {
        let db = self.db.clone();
        let pool = self.pool.clone();
        let name = name.to_string();
        let function = Arc::new(function);

        self.sched
            .add(Job::new_async(cron, move |_, _| {
                let db = db.clone();
                let pool = pool.clone();
                let name = name.clone();
                let function = Arc::clone(&function);

                Box::pin(async move {
                    match function(db, pool).await {
                        Ok(count) => tracing::debug!("Dispatched {} {} update(s)", count, name),
                        Err(e) => tracing::error!("Error dispatching {} update: {:?}", name, e),
                    }
                })
            })?)
            .await?;

        Ok(())
    }
}
