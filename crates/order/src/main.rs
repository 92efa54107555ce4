use anyhow::{Context, Result};
use order::{
    chaos::ThreadRandom,
    config::{Config, StorageKind},
    di::DependenciesInjectDeps,
    handler::AppRouter,
    state::AppState,
};
use shared::{
    config::{ConnectionManager, ConnectionPool},
    utils::init_logger,
};
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let is_dev = std::env::var("DEV_MODE")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);
    let is_enable_file = std::env::var("ENABLE_FILE_LOG")
        .map(|v| v == "true")
        .unwrap_or(false);

    let _guard = init_logger("order-service", is_dev, is_enable_file)
        .context("Failed to initialize logger")?;

    let config = Config::init().context("Failed to load configuration")?;

    let deps = match config.storage {
        StorageKind::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL is required for postgres storage")?;

            let db_pool =
                ConnectionManager::new_pool(database_url, config.db_min_conn, config.db_max_conn)
                    .await
                    .context("Failed to initialize database pool")?;

            if config.run_migrations {
                run_migrations(&db_pool)
                    .await
                    .context("failed to migration database")?;
            }

            DependenciesInjectDeps::postgres(db_pool)
        }
        StorageKind::Memory => {
            warn!("⚠️ Using in-memory storage, orders will not survive a restart.");
            DependenciesInjectDeps::in_memory()
        }
    };

    let chaos = config.chaos();
    if chaos.is_active() {
        info!(
            fault_rate = chaos.fault_rate,
            "🐒 Chaos middleware enabled, simulating failures"
        );
    } else {
        info!("🐒 Chaos middleware disabled");
    }

    let state = AppState::new(deps, chaos, Arc::new(ThreadRandom));

    info!("✅ Application setup completed successfully.");

    AppRouter::serve(config.port, state)
        .await
        .context("HTTP server failed")?;

    info!("✅ Order Service shutdown complete.");

    Ok(())
}

pub async fn run_migrations(pool: &ConnectionPool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;

    Ok(())
}
