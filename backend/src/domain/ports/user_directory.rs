//! Driving port used by inbound adapters.
//!
//! HTTP handlers call this port instead of the repository so they see
//! domain errors only and never import persistence types.

use async_trait::async_trait;

use crate::domain::{Error, UserDetails, UserId, UserRecord};

use super::MutationOutcome;

/// Directory use-cases, one per request handler.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// All records, highest id first.
    async fn list_users(&self) -> Result<Vec<UserRecord>, Error>;

    /// Create a record from submitted details.
    async fn add_user(&self, details: UserDetails) -> Result<UserRecord, Error>;

    /// Load a record for editing; `None` when the id is unknown.
    async fn find_user(&self, id: UserId) -> Result<Option<UserRecord>, Error>;

    /// Replace the details of an existing record.
    async fn update_user(&self, id: UserId, details: UserDetails)
    -> Result<MutationOutcome, Error>;

    /// Delete a record.
    async fn delete_user(&self, id: UserId) -> Result<MutationOutcome, Error>;
}
