//! Startup schema bootstrap.
//!
//! Applies the embedded migrations so the `users` table exists before the
//! server accepts traffic. Migrations use a blocking `PgConnection`, so the
//! async entry point runs them on the blocking pool.

use diesel::Connection;
use diesel::pg::PgConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

/// Migrations from the crate's `migrations/` directory.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Failures raised while preparing the schema.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaBootstrapError {
    /// The database could not be reached.
    #[error("schema bootstrap could not connect: {message}")]
    Connect { message: String },
    /// A migration failed to apply.
    #[error("schema migration failed: {message}")]
    Migrate { message: String },
    /// The blocking task panicked or was cancelled.
    #[error("schema bootstrap task failed: {message}")]
    Task { message: String },
}

/// Apply pending migrations, returning how many ran.
///
/// # Errors
/// Returns [`SchemaBootstrapError`] when the connection or a migration fails.
pub fn run_pending_migrations(database_url: &str) -> Result<usize, SchemaBootstrapError> {
    let mut conn =
        PgConnection::establish(database_url).map_err(|err| SchemaBootstrapError::Connect {
            message: err.to_string(),
        })?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| SchemaBootstrapError::Migrate {
            message: err.to_string(),
        })?;
    Ok(applied.len())
}

/// Async wrapper around [`run_pending_migrations`].
///
/// # Errors
/// Propagates [`run_pending_migrations`] failures and reports task failures.
pub async fn bootstrap_schema(database_url: String) -> Result<usize, SchemaBootstrapError> {
    let applied = tokio::task::spawn_blocking(move || run_pending_migrations(&database_url))
        .await
        .map_err(|err| SchemaBootstrapError::Task {
            message: err.to_string(),
        })??;
    info!(applied, "database schema ready");
    Ok(applied)
}
