//! Driven port for the directory record store.
//!
//! Each method is one store interaction. Adapters acquire their connection
//! (or lock) at the start of the call and release it before returning, on
//! success and failure alike, so no session outlives a request.

use async_trait::async_trait;

use crate::domain::{UserDetails, UserId, UserRecord};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
    }
}

/// Result of a keyed mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// A record with the given id existed and was changed.
    Applied,
    /// No record has the given id; nothing was touched.
    NotFound,
}

impl MutationOutcome {
    /// Classify an affected-row count.
    #[must_use]
    pub const fn from_affected_rows(rows: usize) -> Self {
        if rows == 0 {
            Self::NotFound
        } else {
            Self::Applied
        }
    }
}

/// Record store contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Every record, newest (highest id) first.
    async fn list_all(&self) -> Result<Vec<UserRecord>, UserPersistenceError>;

    /// Insert a record; the store assigns the id.
    async fn create(&self, details: &UserDetails) -> Result<UserRecord, UserPersistenceError>;

    /// Fetch a record by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<UserRecord>, UserPersistenceError>;

    /// Overwrite all three text fields of the record with `id`.
    async fn update(
        &self,
        id: UserId,
        details: &UserDetails,
    ) -> Result<MutationOutcome, UserPersistenceError>;

    /// Hard-delete the record with `id`.
    async fn delete_by_id(&self, id: UserId) -> Result<MutationOutcome, UserPersistenceError>;
}
