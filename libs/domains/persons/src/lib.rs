//! Persons Domain
//!
//! Record management for person entities: creation guarded by the two
//! registry business rules (minimum age, unique email address) and queries
//! by email-domain suffix or inclusive age range.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business rules, age derivation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Storage port (trait + implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entity, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_persons::{
//!     handlers,
//!     repository::InMemoryPersonRepository,
//!     service::PersonService,
//! };
//!
//! let repository = InMemoryPersonRepository::new();
//! let service = PersonService::new(repository);
//!
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{CreationErrorResponse, PersonError, PersonResult};
pub use models::{AgeRangeFilter, CreatePerson, NewPerson, Person, PersonResponse};
pub use postgres::PgPersonRepository;
pub use repository::{InMemoryPersonRepository, PersonRepository};
pub use service::{calculate_age, PersonService, MINIMUM_AGE};
