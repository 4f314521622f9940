use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::AppError, middleware::throttle::ThrottleGate};

/// How often expired throttle windows are swept.
const THROTTLE_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// Installs the global tracing subscriber.
///
/// Honors `RUST_LOG`; defaults to `info` for this crate and `tower_http`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("drones_api=info,tower_http=info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the throttle gate from the configured scope rates.
pub fn setup_throttle_gate(config: &Config) -> Arc<ThrottleGate> {
    Arc::new(ThrottleGate::new(config.throttle_rates()))
}

/// Spawns the background task that drops elapsed throttle windows.
///
/// The task runs for the lifetime of the runtime.
pub fn spawn_throttle_sweeper(gate: Arc<ThrottleGate>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(THROTTLE_SWEEP_INTERVAL);
        loop {
            interval.tick().await;

            let removed = gate.purge_expired(Instant::now());
            if removed > 0 {
                tracing::debug!(removed, remaining = gate.len(), "swept throttle windows");
            }
        }
    })
}

/// Resolves when the process receives Ctrl+C.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down");
}
