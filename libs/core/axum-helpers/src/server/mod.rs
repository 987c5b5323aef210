//! Server infrastructure module.
//!
//! - Router assembly with OpenAPI documentation
//! - Health endpoint
//! - Graceful shutdown

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{create_app, create_router};
pub use health::{health_router, HealthResponse};
pub use shutdown::shutdown_signal;
