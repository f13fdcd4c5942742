//! Account domain service: registration and login over a user repository.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    LoginService, RegistrationService, UserPersistenceError, UserRepository,
};
use crate::domain::{Error, LoginCredentials, NewRegistration, PasswordHash, User, UserId};

/// User-facing message for the duplicate registration outcome.
pub const USER_EXISTS_MESSAGE: &str = "El usuario ya existe.";
/// User-facing message for any failed login attempt.
pub const BAD_CREDENTIALS_MESSAGE: &str = "Credenciales incorrectas.";

/// Account service implementing the registration and login driving ports.
#[derive(Clone)]
pub struct AccountService<R> {
    users: Arc<R>,
}

impl<R> AccountService<R> {
    /// Create a new service over the given user repository.
    pub fn new(users: Arc<R>) -> Self {
        Self { users }
    }
}

fn map_persistence_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => Error::service_unavailable(message),
        UserPersistenceError::Query { message } => Error::internal(message),
        UserPersistenceError::DuplicateEmail => Error::conflict(USER_EXISTS_MESSAGE),
    }
}

#[async_trait]
impl<R> RegistrationService for AccountService<R>
where
    R: UserRepository,
{
    async fn register(&self, registration: NewRegistration) -> Result<UserId, Error> {
        let existing = self
            .users
            .find_by_email(&registration.email)
            .await
            .map_err(map_persistence_error)?;
        if existing.is_some() {
            return Err(Error::conflict(USER_EXISTS_MESSAGE));
        }

        let user = User::new(
            UserId::random(),
            registration.name.clone(),
            registration.email.clone(),
            PasswordHash::derive(registration.password()),
        );

        // A concurrent registration can still win the race between the
        // lookup and the insert; the unique index maps it to the same
        // conflict outcome.
        self.users
            .insert(&user)
            .await
            .map_err(map_persistence_error)?;

        tracing::info!(user_id = %user.id(), "user registered");
        Ok(*user.id())
    }
}

#[async_trait]
impl<R> LoginService for AccountService<R>
where
    R: UserRepository,
{
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<User, Error> {
        let maybe_user = self
            .users
            .find_by_email(credentials.email())
            .await
            .map_err(map_persistence_error)?;

        // Absent user and wrong password are indistinguishable to callers.
        match maybe_user {
            Some(user) if user.password_hash().verify(credentials.password()) => Ok(user),
            _ => Err(Error::unauthorized(BAD_CREDENTIALS_MESSAGE)),
        }
    }
}
