//! Worker pool for processing jobs with concurrency control.
//!
//! This module provides the `WorkerPool` that executes dispatched jobs on spawned tasks,
//! bounded by a semaphore. A job that fails or times out is logged and dropped; nothing
//! is retried, the next scheduler tick dispatches it again.

mod config;

pub use config::WorkerPoolConfig;

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{OwnedSemaphorePermit, Semaphore};

use crate::server::{model::worker::WorkerJob, worker::handler::WorkerJobHandler};

/// Worker pool for processing dispatched jobs.
///
/// Cheap to clone; all clones share the same handler and concurrency limit.
#[derive(Clone)]
pub struct WorkerPool {
    inner: Arc<WorkerPoolRef>,
}

/// Internal worker pool reference with configuration and runtime state.
pub struct WorkerPoolRef {
    config: WorkerPoolConfig,
    handler: Arc<WorkerJobHandler>,
    semaphore: Arc<Semaphore>,
}

impl WorkerPool {
    /// Creates a new worker pool.
    ///
    /// The pool accepts jobs immediately and keeps accepting them until `stop()` is called.
    ///
    /// # Arguments
    /// - `config` - Configuration including max concurrent jobs and timeouts
    /// - `handler` - Job handler for executing different job types
    pub fn new(config: WorkerPoolConfig, handler: WorkerJobHandler) -> Self {
        let semaphore = Arc::new(Semaphore::new(config.max_concurrent_jobs));

        Self {
            inner: Arc::new(WorkerPoolRef {
                config,
                handler: Arc::new(handler),
                semaphore,
            }),
        }
    }

    /// Dispatches a job for execution.
    ///
    /// Waits for a free slot if the pool is at capacity, then spawns the job and returns
    /// without waiting for it to finish.
    ///
    /// # Returns
    /// - `true` - The job was spawned
    /// - `false` - The pool is stopped and the job was dropped
    pub async fn dispatch(&self, job: WorkerJob) -> bool {
        match self.inner.semaphore.clone().acquire_owned().await {
            Ok(permit) => {
                let handler = Arc::clone(&self.inner.handler);
                let timeout = self.inner.config.job_timeout();

                tokio::spawn(async move {
                    Self::execute_job(job, handler, timeout, permit).await;
                });

                true
            }
            Err(_) => {
                tracing::debug!("Worker pool is stopped, dropping job: {}", job);
                false
            }
        }
    }

    /// Executes a job with timeout.
    ///
    /// The semaphore permit is held until completion, limiting concurrency.
    ///
    /// # Arguments
    /// - `job` - Worker job to execute
    /// - `handler` - Job handler for execution
    /// - `timeout` - Maximum execution time
    /// - `_permit` - Semaphore permit (held until dropped)
    async fn execute_job(
        job: WorkerJob,
        handler: Arc<WorkerJobHandler>,
        timeout: Duration,
        _permit: OwnedSemaphorePermit,
    ) {
        let result = tokio::time::timeout(timeout, handler.handle(&job)).await;

        match result {
            Ok(Ok(())) => {
                tracing::debug!("Job completed: {}", job);
            }
            Ok(Err(e)) => {
                tracing::error!("Job failed: {}, error: {:?}", job, e);
            }
            Err(_) => {
                tracing::error!("Job timed out after {} seconds: {}", timeout.as_secs(), job);
            }
        }
    }

    /// Stops the worker pool gracefully.
    ///
    /// Closes the semaphore so no new jobs start, then waits for in-flight jobs to finish
    /// up to the configured shutdown timeout. Calling it when already stopped returns
    /// immediately.
    pub async fn stop(&self) {
        if !self.is_running() {
            tracing::debug!("Worker pool is already stopped");
            return;
        }

        tracing::info!("Shutting down worker pool...");

        self.inner.semaphore.close();

        let drained = tokio::time::timeout(self.inner.config.shutdown_timeout(), async {
            while self.active_job_count() > 0 {
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
        })
        .await;

        match drained {
            Ok(()) => tracing::info!("Worker pool shut down"),
            Err(_) => tracing::warn!(
                "Worker pool shut down with {} job(s) still running",
                self.active_job_count()
            ),
        }
    }

    /// Checks if the worker pool accepts new jobs.
    pub fn is_running(&self) -> bool {
        !self.inner.semaphore.is_closed()
    }

    /// Gets the number of available semaphore permits.
    ///
    /// This indicates how many more jobs can be spawned before hitting the
    /// concurrency limit. A value of 0 means the system is at capacity.
    pub fn available_permits(&self) -> usize {
        self.inner.semaphore.available_permits()
    }

    /// Gets the maximum number of concurrent jobs configured.
    pub fn max_concurrent_jobs(&self) -> usize {
        self.inner.config.max_concurrent_jobs
    }

    /// Gets the current number of jobs being processed.
    ///
    /// This is calculated as: max_concurrent_jobs - available_permits
    pub fn active_job_count(&self) -> usize {
        self.inner
            .config
            .max_concurrent_jobs
            .saturating_sub(self.inner.semaphore.available_permits())
    }
}
