//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of domain repository ports backed by PostgreSQL
//! via `diesel-async` and `bb8` connection pooling.
//!
//! - **Thin adapters**: repositories only translate between Diesel rows and
//!   domain types.
//! - **Internal models**: row structs (`models.rs`) and the schema
//!   (`schema.rs`) never reach the domain layer.
//! - **Strongly typed errors**: Diesel and pool failures map to
//!   `UserPersistenceError`.
//!
//! # Example
//!
//! ```ignore
//! use directory::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/directory")).await?;
//! let repo = DieselUserRepository::new(pool);
//! ```

mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MIGRATIONS, SchemaBootstrapError, bootstrap_schema, run_pending_migrations};
pub use pool::{DbPool, DbSession, PoolConfig, PoolError};
