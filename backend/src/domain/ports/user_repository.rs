//! Port abstraction for user persistence adapters and their errors.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{EmailAddress, User, UserId};

/// Persistence errors raised by user repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserPersistenceError {
    /// Repository connection could not be established.
    #[error("user repository connection failed: {message}")]
    Connection { message: String },

    /// Query or mutation failed during execution.
    #[error("user repository query failed: {message}")]
    Query { message: String },

    /// Insert violated the unique email constraint.
    #[error("email is already registered")]
    DuplicateEmail,
}

impl UserPersistenceError {
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

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user record.
    ///
    /// The store enforces email uniqueness; a violation surfaces as
    /// [`UserPersistenceError::DuplicateEmail`].
    async fn insert(&self, user: &User) -> Result<(), UserPersistenceError>;

    /// Fetch a user by normalised email.
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<User>, UserPersistenceError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError>;
}

/// In-memory `UserRepository` used when no database pool is configured.
///
/// Keeps HTTP tests deterministic and lets the server run standalone.
#[derive(Debug, Default)]
pub struct FixtureUserRepository {
    users: Mutex<Vec<User>>,
}

impl FixtureUserRepository {
    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<User>> {
        // A poisoned lock means a previous panic mid-mutation; the fixture
        // holds no invariants worth preserving past that point.
        self.users.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[async_trait]
impl UserRepository for FixtureUserRepository {
    async fn insert(&self, user: &User) -> Result<(), UserPersistenceError> {
        let mut users = self.lock();
        if users.iter().any(|existing| existing.email() == user.email()) {
            return Err(UserPersistenceError::DuplicateEmail);
        }
        users.push(user.clone());
        Ok(())
    }

    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<User>, UserPersistenceError> {
        Ok(self
            .lock()
            .iter()
            .find(|user| user.email() == email)
            .cloned())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        Ok(self.lock().iter().find(|user| user.id() == id).cloned())
    }
}
