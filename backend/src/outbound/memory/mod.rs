//! In-process store used when no database is configured.
//!
//! Records live for the lifetime of the process. Each repository call holds
//! the store lock for the duration of that call only.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{MutationOutcome, UserPersistenceError, UserRepository};
use crate::domain::{UserDetails, UserId, UserRecord};

#[derive(Debug, Default)]
struct Store {
    last_id: i32,
    records: BTreeMap<UserId, UserDetails>,
}

/// `UserRepository` over a locked ordered map.
///
/// Identifiers start at 1 and are never reused, matching a `SERIAL` column.
///
/// # Examples
/// ```
/// use directory::domain::UserDetails;
/// use directory::domain::ports::UserRepository;
/// use directory::outbound::memory::InMemoryUserRepository;
///
/// # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
/// let repo = InMemoryUserRepository::default();
/// let ann = repo.create(&UserDetails::new("Ann", "Engineer", "NY")).await.expect("create");
/// assert_eq!(ann.id().get(), 1);
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    store: Mutex<Store>,
}

impl InMemoryUserRepository {
    fn session(&self) -> Result<MutexGuard<'_, Store>, UserPersistenceError> {
        self.store
            .lock()
            .map_err(|_| UserPersistenceError::query("in-memory store lock poisoned"))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list_all(&self) -> Result<Vec<UserRecord>, UserPersistenceError> {
        let store = self.session()?;
        Ok(store
            .records
            .iter()
            .rev()
            .map(|(id, details)| UserRecord::new(*id, details.clone()))
            .collect())
    }

    async fn create(&self, details: &UserDetails) -> Result<UserRecord, UserPersistenceError> {
        let mut store = self.session()?;
        let next = store
            .last_id
            .checked_add(1)
            .ok_or_else(|| UserPersistenceError::query("user id sequence exhausted"))?;
        store.last_id = next;
        let id = UserId::new(next);
        store.records.insert(id, details.clone());
        Ok(UserRecord::new(id, details.clone()))
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<UserRecord>, UserPersistenceError> {
        let store = self.session()?;
        Ok(store
            .records
            .get(&id)
            .map(|details| UserRecord::new(id, details.clone())))
    }

    async fn update(
        &self,
        id: UserId,
        details: &UserDetails,
    ) -> Result<MutationOutcome, UserPersistenceError> {
        let mut store = self.session()?;
        Ok(match store.records.get_mut(&id) {
            Some(current) => {
                *current = details.clone();
                MutationOutcome::Applied
            }
            None => MutationOutcome::NotFound,
        })
    }

    async fn delete_by_id(&self, id: UserId) -> Result<MutationOutcome, UserPersistenceError> {
        let mut store = self.session()?;
        Ok(match store.records.remove(&id) {
            Some(_) => MutationOutcome::Applied,
            None => MutationOutcome::NotFound,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn repo() -> InMemoryUserRepository {
        InMemoryUserRepository::default()
    }

    fn ids(records: &[UserRecord]) -> Vec<i32> {
        records.iter().map(|record| record.id().get()).collect()
    }

    async fn seed(repo: &InMemoryUserRepository, names: &[&str]) {
        for name in names {
            repo.create(&UserDetails::new(*name, "Engineer", "NY"))
                .await
                .expect("create succeeds");
        }
    }

    #[rstest]
    #[tokio::test]
    async fn empty_store_lists_nothing(repo: InMemoryUserRepository) {
        assert!(repo.list_all().await.expect("list").is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn list_is_ordered_by_id_descending(repo: InMemoryUserRepository) {
        seed(&repo, &["Ann", "Bo", "Cy"]).await;
        let listed = repo.list_all().await.expect("list");
        assert_eq!(ids(&listed), vec![3, 2, 1]);
    }

    #[rstest]
    #[tokio::test]
    async fn create_then_list_yields_the_record(repo: InMemoryUserRepository) {
        let created = repo
            .create(&UserDetails::new("Ann", "Engineer", "NY"))
            .await
            .expect("create");

        let listed = repo.list_all().await.expect("list");
        assert_eq!(listed, vec![created.clone()]);
        assert_eq!(created.name(), "Ann");
        assert_eq!(created.position(), "Engineer");
        assert_eq!(created.office(), "NY");
    }

    #[rstest]
    #[tokio::test]
    async fn update_overwrites_fields_in_place(repo: InMemoryUserRepository) {
        seed(&repo, &["Ann"]).await;
        let id = UserId::new(1);

        let outcome = repo
            .update(id, &UserDetails::new("Ann", "Engineer", "SF"))
            .await
            .expect("update");
        let fetched = repo.find_by_id(id).await.expect("find").expect("present");

        assert_eq!(outcome, MutationOutcome::Applied);
        assert_eq!(fetched.office(), "SF");
        assert_eq!(fetched.name(), "Ann");
        assert_eq!(fetched.position(), "Engineer");
    }

    #[rstest]
    #[tokio::test]
    async fn delete_removes_record(repo: InMemoryUserRepository) {
        seed(&repo, &["Ann", "Bo"]).await;

        let outcome = repo.delete_by_id(UserId::new(2)).await.expect("delete");

        assert_eq!(outcome, MutationOutcome::Applied);
        assert!(repo.find_by_id(UserId::new(2)).await.expect("find").is_none());
        assert_eq!(ids(&repo.list_all().await.expect("list")), vec![1]);
    }

    #[rstest]
    #[tokio::test]
    async fn missing_ids_are_reported_without_side_effects(repo: InMemoryUserRepository) {
        seed(&repo, &["Ann"]).await;
        let before = repo.list_all().await.expect("list");

        let updated = repo
            .update(UserId::new(99), &UserDetails::new("X", "Y", "Z"))
            .await
            .expect("update");
        let deleted = repo.delete_by_id(UserId::new(99)).await.expect("delete");

        assert_eq!(updated, MutationOutcome::NotFound);
        assert_eq!(deleted, MutationOutcome::NotFound);
        assert_eq!(repo.list_all().await.expect("list"), before);
    }

    #[rstest]
    #[tokio::test]
    async fn ids_are_not_reused_after_delete(repo: InMemoryUserRepository) {
        seed(&repo, &["Ann", "Bo"]).await;
        repo.delete_by_id(UserId::new(2)).await.expect("delete");

        let next = repo
            .create(&UserDetails::new("Cy", "Analyst", "LA"))
            .await
            .expect("create");
        assert_eq!(next.id().get(), 3);
    }
}
