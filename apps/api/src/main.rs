use axum_helpers::{create_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use migration::{Migrator, MigratorTrait};
use tracing::info;

mod api;
mod config;
mod db;
mod openapi;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre before any fallible operation for readable errors
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let db = db::connect_with_retry(&config.database.url)
        .await
        .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

    // Schema is created/updated in place; the unique index on
    // email_address comes up with it.
    Migrator::up(&db, None)
        .await
        .map_err(|e| eyre::eyre!("Migration failed: {}", e))?;

    let api_routes = api::routes(db.clone());
    let router = create_router::<openapi::ApiDoc>(api_routes);

    // /health: liveness with app name/version
    // /ready: readiness backed by a real database ping
    let app = router
        .merge(health_router(config.app))
        .merge(api::ready_router(db.clone()));

    info!("Starting registry API");

    create_app(app, &config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Shutting down: closing database connection");
    db.close()
        .await
        .map_err(|e| eyre::eyre!("Error closing PostgreSQL: {}", e))?;

    info!("Registry API shutdown complete");
    Ok(())
}
