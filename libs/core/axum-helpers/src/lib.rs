//! Shared utilities for building the registry's Axum applications.
//!
//! - [`errors`]: structured error responses
//! - [`server`]: router assembly, health endpoint, graceful shutdown

pub mod errors;
pub mod server;

pub use errors::{AppError, ErrorResponse};
pub use server::{create_app, create_router, health_router, shutdown_signal, HealthResponse};
