//! PostgreSQL-backed `UserRepository` implementation.
//!
//! Translates between user rows and the domain `User` type. The unique index
//! on `email` backs the duplicate-registration outcome.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{EmailAddress, PasswordHash, User, UserId, UserName};

use super::models::{NewUserRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed implementation of the `UserRepository` port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> UserPersistenceError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            UserPersistenceError::connection(message)
        }
    }
}

fn map_diesel_error(error: diesel::result::Error) -> UserPersistenceError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(%error, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            UserPersistenceError::DuplicateEmail
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            UserPersistenceError::connection("database connection error")
        }
        _ => UserPersistenceError::query("database error"),
    }
}

/// Convert a database row to a domain user.
///
/// Rows failing domain validation indicate data written outside the
/// application; they surface as query errors rather than panics.
fn row_to_user(row: UserRow) -> Result<User, UserPersistenceError> {
    let name = UserName::new(&row.name)
        .map_err(|error| UserPersistenceError::query(format!("corrupt user row: {error}")))?;
    let email = EmailAddress::new(&row.email)
        .map_err(|error| UserPersistenceError::query(format!("corrupt user row: {error}")))?;
    Ok(User::new(
        UserId::from_uuid(row.id),
        name,
        email,
        PasswordHash::from_storage(&row.password_hash),
    ))
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn insert(&self, user: &User) -> Result<(), UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewUserRow {
            id: *user.id().as_uuid(),
            name: user.name().as_ref(),
            email: user.email().as_ref(),
            password_hash: user.password_hash().as_str(),
        };

        diesel::insert_into(users::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(())
    }

    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<UserRow> = users::table
            .filter(users::email.eq(email.as_ref()))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_user).transpose()
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<UserRow> = users::table
            .filter(users::id.eq(id.as_uuid()))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_user).transpose()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;

    fn row(name: &str, email: &str) -> UserRow {
        UserRow {
            id: Uuid::new_v4(),
            name: name.to_owned(),
            email: email.to_owned(),
            password_hash: PasswordHash::derive("secreto").as_str().to_owned(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn valid_rows_convert_to_users() {
        let user = row_to_user(row("Ana", "ana@example.com")).expect("valid row");
        assert_eq!(user.name().as_ref(), "Ana");
        assert_eq!(user.email().as_ref(), "ana@example.com");
        assert!(user.password_hash().verify("secreto"));
    }

    #[test]
    fn corrupt_rows_surface_as_query_errors() {
        let err = row_to_user(row("Ana", "not-an-email")).expect_err("corrupt row must fail");
        assert!(matches!(err, UserPersistenceError::Query { .. }));
    }

    #[test]
    fn pool_errors_map_to_connection_failures() {
        let err = map_pool_error(PoolError::checkout("timed out"));
        assert!(matches!(err, UserPersistenceError::Connection { .. }));
    }
}
