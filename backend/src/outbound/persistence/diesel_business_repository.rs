//! PostgreSQL-backed `BusinessRepository` implementation.
//!
//! The search mirrors the domain [`SearchFilter`] predicate with `ILIKE`
//! patterns: free text against name/category/subcategory, city against the
//! location column, both combined with AND when present.

use async_trait::async_trait;
use diesel::PgTextExpressionMethods;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{BusinessPersistenceError, BusinessRepository};
use crate::domain::{Business, BusinessId, SearchFilter};

use super::models::BusinessRow;
use super::pool::{DbPool, PoolError};
use super::schema::businesses;

/// Diesel-backed implementation of the `BusinessRepository` port.
#[derive(Clone)]
pub struct DieselBusinessRepository {
    pool: DbPool,
}

impl DieselBusinessRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> BusinessPersistenceError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            BusinessPersistenceError::connection(message)
        }
    }
}

fn map_diesel_error(error: diesel::result::Error) -> BusinessPersistenceError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(%error, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            BusinessPersistenceError::connection("database connection error")
        }
        _ => BusinessPersistenceError::query("database error"),
    }
}

/// Build a contains-anywhere `ILIKE` pattern, escaping LIKE metacharacters
/// so user input matches literally.
fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

fn row_to_business(row: BusinessRow) -> Business {
    Business {
        id: BusinessId::from_uuid(row.id),
        name: row.name,
        category: row.category,
        subcategory: row.subcategory,
        contact: row.contact,
        location: row.location,
        photos: row.photos,
        rating: row.rating,
    }
}

#[async_trait]
impl BusinessRepository for DieselBusinessRepository {
    async fn search(
        &self,
        filter: &SearchFilter,
    ) -> Result<Vec<Business>, BusinessPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut query = businesses::table
            .select(BusinessRow::as_select())
            .into_boxed();

        if let Some(term) = filter.text() {
            let pattern = like_pattern(term);
            query = query.filter(
                businesses::name
                    .ilike(pattern.clone())
                    .or(businesses::category.ilike(pattern.clone()))
                    .or(businesses::subcategory.ilike(pattern)),
            );
        }
        if let Some(term) = filter.city() {
            query = query.filter(businesses::location.ilike(like_pattern(term)));
        }

        let rows: Vec<BusinessRow> = query
            .order(businesses::name.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(row_to_business).collect())
    }

    async fn find_by_ids(
        &self,
        ids: &[BusinessId],
    ) -> Result<Vec<Business>, BusinessPersistenceError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let uuids: Vec<uuid::Uuid> = ids.iter().map(|id| *id.as_uuid()).collect();

        let rows: Vec<BusinessRow> = businesses::table
            .filter(businesses::id.eq_any(&uuids))
            .select(BusinessRow::as_select())
            .order(businesses::name.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(row_to_business).collect())
    }
}
