use std::time::Duration;

/// Configuration for the worker pool
#[derive(Debug, Clone)]
pub struct WorkerPoolConfig {
    /// Maximum concurrent jobs that can be processed simultaneously.
    ///
    /// Each location sync holds a database connection for its writes, so keep this below
    /// the size of the PostgreSQL connection pool.
    pub max_concurrent_jobs: usize,

    /// Maximum time a job can run before being cancelled (seconds).
    ///
    /// Matches the location lock TTL so a job never outlives its lock.
    pub job_timeout_seconds: u64,

    /// Maximum time to wait for in-flight jobs when stopping (seconds).
    /// If jobs are still running after this time, a warning is logged.
    pub shutdown_timeout_seconds: u64,
}

impl WorkerPoolConfig {
    /// Create a new configuration with sensible defaults
    ///
    /// # Arguments
    /// * `max_concurrent_jobs` - Maximum concurrent jobs, at least 1
    pub fn new(max_concurrent_jobs: usize) -> Self {
        Self {
            max_concurrent_jobs: max_concurrent_jobs.max(1),
            job_timeout_seconds: 60,      // 1 minute
            shutdown_timeout_seconds: 30, // 30 seconds for in-flight jobs to finish
        }
    }

    /// Get job timeout as Duration
    pub fn job_timeout(&self) -> Duration {
        Duration::from_secs(self.job_timeout_seconds)
    }

    /// Get shutdown timeout as Duration
    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout_seconds)
    }
}

impl Default for WorkerPoolConfig {
    fn default() -> Self {
        Self::new(10)
    }
}
