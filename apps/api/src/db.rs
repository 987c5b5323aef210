use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::time::Duration;
use tracing::{info, warn};

const MAX_ATTEMPTS: u32 = 5;

/// Connect to PostgreSQL with a tuned pool, retrying transient startup
/// failures with exponential backoff.
pub async fn connect_with_retry(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(database_url);
    opt.max_connections(100)
        .min_connections(5)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .idle_timeout(Duration::from_secs(60))
        .max_lifetime(Duration::from_secs(600));

    let mut delay = Duration::from_millis(100);
    let mut attempt = 1;

    loop {
        match Database::connect(opt.clone()).await {
            Ok(db) => {
                info!("Successfully connected to PostgreSQL database");
                return Ok(db);
            }
            Err(e) if attempt < MAX_ATTEMPTS => {
                warn!(attempt, "Database connection failed ({}), retrying in {:?}", e, delay);
                tokio::time::sleep(delay).await;
                delay *= 2;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}
