//! Directory use-cases backed by a [`UserRepository`].
//!
//! The service performs exactly one repository call per use-case and maps
//! persistence failures to domain errors: an unreachable store becomes
//! `ServiceUnavailable`, anything else `InternalError`.
//!
//! Updating or deleting an unknown id is a no-op reported as
//! [`MutationOutcome::NotFound`]; the record set is left untouched.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::domain::ports::{MutationOutcome, UserDirectory, UserPersistenceError, UserRepository};
use crate::domain::{Error, UserDetails, UserId, UserRecord};

/// Repository-backed implementation of [`UserDirectory`].
#[derive(Clone)]
pub struct UserDirectoryService {
    repository: Arc<dyn UserRepository>,
}

impl UserDirectoryService {
    /// Wrap a repository adapter.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }
}

fn map_persistence_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("user store unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            Error::internal(format!("user store query failed: {message}"))
        }
    }
}

#[async_trait]
impl UserDirectory for UserDirectoryService {
    async fn list_users(&self) -> Result<Vec<UserRecord>, Error> {
        self.repository
            .list_all()
            .await
            .map_err(map_persistence_error)
    }

    async fn add_user(&self, details: UserDetails) -> Result<UserRecord, Error> {
        let record = self
            .repository
            .create(&details)
            .await
            .map_err(map_persistence_error)?;
        info!(
            user_id = %record.id(),
            name = record.name(),
            position = record.position(),
            office = record.office(),
            "user created"
        );
        Ok(record)
    }

    async fn find_user(&self, id: UserId) -> Result<Option<UserRecord>, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(map_persistence_error)
    }

    async fn update_user(
        &self,
        id: UserId,
        details: UserDetails,
    ) -> Result<MutationOutcome, Error> {
        let outcome = self
            .repository
            .update(id, &details)
            .await
            .map_err(map_persistence_error)?;
        match outcome {
            MutationOutcome::Applied => info!(user_id = %id, "user updated"),
            MutationOutcome::NotFound => warn!(user_id = %id, "update skipped: no such user"),
        }
        Ok(outcome)
    }

    async fn delete_user(&self, id: UserId) -> Result<MutationOutcome, Error> {
        let outcome = self
            .repository
            .delete_by_id(id)
            .await
            .map_err(map_persistence_error)?;
        match outcome {
            MutationOutcome::Applied => info!(user_id = %id, "user deleted"),
            MutationOutcome::NotFound => warn!(user_id = %id, "delete skipped: no such user"),
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    //! Behaviour of the service over a mocked repository.
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::MockUserRepository;
    use mockall::predicate::eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn ann() -> UserRecord {
        UserRecord::new(UserId::new(1), UserDetails::new("Ann", "Engineer", "NY"))
    }

    fn service(repository: MockUserRepository) -> UserDirectoryService {
        UserDirectoryService::new(Arc::new(repository))
    }

    #[rstest]
    #[tokio::test]
    async fn list_users_passes_records_through(ann: UserRecord) {
        let mut repository = MockUserRepository::new();
        let expected = vec![ann.clone()];
        repository
            .expect_list_all()
            .times(1)
            .returning(move || Ok(vec![ann.clone()]));

        let users = service(repository).list_users().await.expect("list succeeds");
        assert_eq!(users, expected);
    }

    #[rstest]
    #[tokio::test]
    async fn add_user_returns_stored_record(ann: UserRecord) {
        let mut repository = MockUserRepository::new();
        let stored = ann.clone();
        repository
            .expect_create()
            .withf(|details| details == &UserDetails::new("Ann", "Engineer", "NY"))
            .times(1)
            .returning(move |_| Ok(stored.clone()));

        let record = service(repository)
            .add_user(UserDetails::new("Ann", "Engineer", "NY"))
            .await
            .expect("create succeeds");
        assert_eq!(record, ann);
    }

    #[rstest]
    #[tokio::test]
    async fn find_user_reports_absence() {
        let mut repository = MockUserRepository::new();
        repository
            .expect_find_by_id()
            .with(eq(UserId::new(9)))
            .times(1)
            .returning(|_| Ok(None));

        let found = service(repository)
            .find_user(UserId::new(9))
            .await
            .expect("lookup succeeds");
        assert!(found.is_none());
    }

    #[rstest]
    #[case(MutationOutcome::Applied)]
    #[case(MutationOutcome::NotFound)]
    #[tokio::test]
    async fn update_user_surfaces_outcome(#[case] outcome: MutationOutcome) {
        let mut repository = MockUserRepository::new();
        repository
            .expect_update()
            .withf(|id, details| *id == UserId::new(1) && details.office() == "SF")
            .times(1)
            .returning(move |_, _| Ok(outcome));

        let observed = service(repository)
            .update_user(UserId::new(1), UserDetails::new("Ann", "Engineer", "SF"))
            .await
            .expect("update succeeds");
        assert_eq!(observed, outcome);
    }

    #[rstest]
    #[case(MutationOutcome::Applied)]
    #[case(MutationOutcome::NotFound)]
    #[tokio::test]
    async fn delete_user_surfaces_outcome(#[case] outcome: MutationOutcome) {
        let mut repository = MockUserRepository::new();
        repository
            .expect_delete_by_id()
            .with(eq(UserId::new(2)))
            .times(1)
            .returning(move |_| Ok(outcome));

        let observed = service(repository)
            .delete_user(UserId::new(2))
            .await
            .expect("delete succeeds");
        assert_eq!(observed, outcome);
    }

    #[rstest]
    #[case(UserPersistenceError::connection("refused"), ErrorCode::ServiceUnavailable)]
    #[case(UserPersistenceError::query("syntax"), ErrorCode::InternalError)]
    #[tokio::test]
    async fn persistence_failures_map_to_domain_errors(
        #[case] failure: UserPersistenceError,
        #[case] expected: ErrorCode,
    ) {
        let mut repository = MockUserRepository::new();
        repository
            .expect_list_all()
            .times(1)
            .returning(move || Err(failure.clone()));

        let err = service(repository)
            .list_users()
            .await
            .expect_err("failure propagates");
        assert_eq!(err.code(), expected);
    }
}
