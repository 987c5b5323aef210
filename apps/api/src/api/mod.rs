use axum::Router;
use domain_persons::{handlers, PersonService, PgPersonRepository};
use sea_orm::DatabaseConnection;

pub mod health;

/// Creates the API routes. The persons domain mounts under `/persons`,
/// with its state applied internally.
pub fn routes(db: DatabaseConnection) -> Router {
    let repository = PgPersonRepository::new(db);
    let service = PersonService::new(repository);

    Router::new().nest("/persons", handlers::router(service))
}

/// Creates a router with the `/ready` endpoint that performs an actual
/// database connectivity check.
pub fn ready_router(db: DatabaseConnection) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(db)
}
