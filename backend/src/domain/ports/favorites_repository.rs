//! Port abstraction for the user → business favorites relation.

use std::collections::{BTreeSet, HashMap};
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{BusinessId, UserId};

/// Persistence errors raised by favorites repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FavoritesPersistenceError {
    /// Repository connection could not be established.
    #[error("favorites repository connection failed: {message}")]
    Connection { message: String },

    /// Query or mutation failed during execution.
    #[error("favorites repository query failed: {message}")]
    Query { message: String },
}

impl FavoritesPersistenceError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Set-semantics relation between users and businesses.
///
/// Adapters do not validate that either side of the pair exists; dangling
/// business ids are tolerated and filtered out at read time.
#[async_trait]
pub trait FavoritesRepository: Send + Sync {
    /// Add a favorite. Adding an existing pair is a successful no-op.
    async fn add(
        &self,
        user_id: &UserId,
        business_id: &BusinessId,
    ) -> Result<(), FavoritesPersistenceError>;

    /// Remove a favorite. Removing an absent pair is a successful no-op.
    async fn remove(
        &self,
        user_id: &UserId,
        business_id: &BusinessId,
    ) -> Result<(), FavoritesPersistenceError>;

    /// List the favorited business ids for a user.
    async fn list(&self, user_id: &UserId) -> Result<Vec<BusinessId>, FavoritesPersistenceError>;
}

/// In-memory favorites relation used when no database pool is configured.
#[derive(Debug, Default)]
pub struct FixtureFavoritesRepository {
    entries: Mutex<HashMap<Uuid, BTreeSet<Uuid>>>,
}

impl FixtureFavoritesRepository {
    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<Uuid, BTreeSet<Uuid>>> {
        self.entries.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[async_trait]
impl FavoritesRepository for FixtureFavoritesRepository {
    async fn add(
        &self,
        user_id: &UserId,
        business_id: &BusinessId,
    ) -> Result<(), FavoritesPersistenceError> {
        self.lock()
            .entry(*user_id.as_uuid())
            .or_default()
            .insert(*business_id.as_uuid());
        Ok(())
    }

    async fn remove(
        &self,
        user_id: &UserId,
        business_id: &BusinessId,
    ) -> Result<(), FavoritesPersistenceError> {
        if let Some(set) = self.lock().get_mut(user_id.as_uuid()) {
            set.remove(business_id.as_uuid());
        }
        Ok(())
    }

    async fn list(&self, user_id: &UserId) -> Result<Vec<BusinessId>, FavoritesPersistenceError> {
        Ok(self
            .lock()
            .get(user_id.as_uuid())
            .map(|set| set.iter().copied().map(BusinessId::from_uuid).collect())
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for the in-memory fixture.
    use super::*;

    #[tokio::test]
    async fn add_is_idempotent() {
        let repo = FixtureFavoritesRepository::default();
        let user = UserId::random();
        let business = BusinessId::random();

        repo.add(&user, &business).await.expect("first add");
        repo.add(&user, &business).await.expect("second add");

        let favorites = repo.list(&user).await.expect("list");
        assert_eq!(favorites, vec![business]);
    }

    #[tokio::test]
    async fn remove_absent_pair_is_a_successful_noop() {
        let repo = FixtureFavoritesRepository::default();
        let user = UserId::random();

        repo.remove(&user, &BusinessId::random())
            .await
            .expect("remove succeeds");
        assert!(repo.list(&user).await.expect("list").is_empty());
    }

    #[tokio::test]
    async fn remove_deletes_only_the_given_pair() {
        let repo = FixtureFavoritesRepository::default();
        let user = UserId::random();
        let keep = BusinessId::random();
        let drop = BusinessId::random();

        repo.add(&user, &keep).await.expect("add keep");
        repo.add(&user, &drop).await.expect("add drop");
        repo.remove(&user, &drop).await.expect("remove");

        assert_eq!(repo.list(&user).await.expect("list"), vec![keep]);
    }

    #[tokio::test]
    async fn lists_are_scoped_per_user() {
        let repo = FixtureFavoritesRepository::default();
        let ana = UserId::random();
        let benito = UserId::random();
        let business = BusinessId::random();

        repo.add(&ana, &business).await.expect("add");

        assert_eq!(repo.list(&ana).await.expect("list").len(), 1);
        assert!(repo.list(&benito).await.expect("list").is_empty());
    }
}
