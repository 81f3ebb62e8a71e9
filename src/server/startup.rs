use std::sync::Arc;

use fred::prelude::*;
use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    error::Error,
    esi::EsiClient,
    lock::RedisLockManager,
    worker::{pool::WorkerPoolConfig, WorkerJobHandler, WorkerPool},
};

/// Build the ESI client used for character location and ship requests
pub fn build_esi_client(config: &Config, db: DatabaseConnection) -> Result<EsiClient, Error> {
    EsiClient::new(
        config.esi_url.clone(),
        &config.user_agent,
        config.esi_timeout,
        db,
    )
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Connect to Valkey/Redis for location locks
pub async fn connect_to_valkey(config: &Config) -> Result<Pool, Error> {
    let redis_config = fred::prelude::Config::from_url(&config.valkey_url)?;
    let pool = Pool::new(redis_config, None, None, None, 6)?;

    pool.connect();
    pool.wait_for_connect().await?;

    Ok(pool)
}

/// Create the worker pool that runs location syncs
pub fn start_workers(
    config: &Config,
    db: DatabaseConnection,
    esi_client: EsiClient,
    redis_pool: Pool,
) -> WorkerPool {
    let handler = WorkerJobHandler::new(
        db,
        Arc::new(esi_client),
        Arc::new(RedisLockManager::new(redis_pool)),
    );

    tracing::info!(
        "Starting worker pool (max {} concurrent jobs)",
        config.workers
    );

    WorkerPool::new(WorkerPoolConfig::new(config.workers), handler)
}
