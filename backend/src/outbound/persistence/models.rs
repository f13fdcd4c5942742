//! Internal Diesel row structs for database operations.
//!
//! Implementation details of the persistence layer; never exposed to the
//! domain.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{businesses, favorites, users};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    #[expect(dead_code, reason = "schema field for future audit trail support")]
    pub created_at: DateTime<Utc>,
    #[expect(dead_code, reason = "schema field for future audit trail support")]
    pub updated_at: DateTime<Utc>,
}

/// Insertable struct for creating new user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
}

/// Row struct for reading from the businesses table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = businesses)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct BusinessRow {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub subcategory: String,
    pub contact: String,
    pub location: String,
    pub photos: Vec<String>,
    pub rating: f64,
}

/// Insertable struct for creating favorites entries.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = favorites)]
pub(crate) struct NewFavoriteRow {
    pub user_id: Uuid,
    pub business_id: Uuid,
}
