use tracing_subscriber::EnvFilter;
use wayfinder::server::{config::Config, scheduler::Scheduler, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config).await {
        tracing::error!("Wayfinder stopped with error: {:?}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), wayfinder::server::error::Error> {
    let db = startup::connect_to_database(&config).await?;
    let redis_pool = startup::connect_to_valkey(&config).await?;
    let esi_client = startup::build_esi_client(&config, db.clone())?;
    let pool = startup::start_workers(&config, db.clone(), esi_client, redis_pool);

    let mut scheduler = Scheduler::new(db, pool.clone()).await?;
    scheduler.start(&config.location_sync_cron).await?;

    tracing::info!("Wayfinder started");

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {:?}", e);
    }

    tracing::info!("Shutting down");

    scheduler.shutdown().await?;
    pool.stop().await;

    Ok(())
}
