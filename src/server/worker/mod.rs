//! Background execution of location sync jobs.
//!
//! The scheduler dispatches [`WorkerJob`](crate::server::model::worker::WorkerJob)s to the
//! [`WorkerPool`], which runs them through the [`WorkerJobHandler`](handler::WorkerJobHandler)
//! with bounded concurrency.

pub mod handler;
pub mod pool;

pub use handler::WorkerJobHandler;
pub use pool::WorkerPool;
