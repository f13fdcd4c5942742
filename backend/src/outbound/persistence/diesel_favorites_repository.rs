//! PostgreSQL-backed `FavoritesRepository` implementation.
//!
//! The composite primary key on `(user_id, business_id)` gives the relation
//! set semantics: duplicate adds hit `ON CONFLICT DO NOTHING`, and removing
//! an absent pair deletes zero rows. Both count as success.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{FavoritesPersistenceError, FavoritesRepository};
use crate::domain::{BusinessId, UserId};

use super::models::NewFavoriteRow;
use super::pool::{DbPool, PoolError};
use super::schema::favorites;

/// Diesel-backed implementation of the `FavoritesRepository` port.
#[derive(Clone)]
pub struct DieselFavoritesRepository {
    pool: DbPool,
}

impl DieselFavoritesRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> FavoritesPersistenceError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            FavoritesPersistenceError::connection(message)
        }
    }
}

fn map_diesel_error(error: diesel::result::Error) -> FavoritesPersistenceError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(%error, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            FavoritesPersistenceError::connection("database connection error")
        }
        _ => FavoritesPersistenceError::query("database error"),
    }
}

#[async_trait]
impl FavoritesRepository for DieselFavoritesRepository {
    async fn add(
        &self,
        user_id: &UserId,
        business_id: &BusinessId,
    ) -> Result<(), FavoritesPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewFavoriteRow {
            user_id: *user_id.as_uuid(),
            business_id: *business_id.as_uuid(),
        };

        diesel::insert_into(favorites::table)
            .values(&row)
            .on_conflict_do_nothing()
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(())
    }

    async fn remove(
        &self,
        user_id: &UserId,
        business_id: &BusinessId,
    ) -> Result<(), FavoritesPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::delete(
            favorites::table
                .filter(favorites::user_id.eq(user_id.as_uuid()))
                .filter(favorites::business_id.eq(business_id.as_uuid())),
        )
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)?;

        Ok(())
    }

    async fn list(&self, user_id: &UserId) -> Result<Vec<BusinessId>, FavoritesPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let ids: Vec<uuid::Uuid> = favorites::table
            .filter(favorites::user_id.eq(user_id.as_uuid()))
            .select(favorites::business_id)
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(ids.into_iter().map(BusinessId::from_uuid).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_errors_map_to_connection_failures() {
        let err = map_pool_error(PoolError::build("bad url"));
        assert!(matches!(err, FavoritesPersistenceError::Connection { .. }));
    }
}
