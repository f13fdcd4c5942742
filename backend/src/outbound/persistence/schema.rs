//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the migrations exactly; Diesel uses them for
//! compile-time query validation. Regenerate with `diesel print-schema` when
//! the migrations change.

diesel::table! {
    /// Registered user accounts.
    users (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Display name shown on the dashboard.
        name -> Varchar,
        /// Login email, normalised to lower case. Unique index.
        email -> Varchar,
        /// Salted password digest.
        password_hash -> Varchar,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Business directory entries ("negocios").
    businesses (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        name -> Varchar,
        category -> Varchar,
        subcategory -> Varchar,
        contact -> Varchar,
        /// Free-form location string matched by the city filter.
        location -> Varchar,
        /// Photo URLs, first one used as the card image.
        photos -> Array<Text>,
        rating -> Float8,
    }
}

diesel::table! {
    /// User favorites relation. No foreign key to businesses: entries may
    /// outlive the business they reference and are dropped on read.
    favorites (user_id, business_id) {
        user_id -> Uuid,
        business_id -> Uuid,
        created_at -> Timestamptz,
    }
}

diesel::allow_tables_to_appear_in_same_query!(users, businesses, favorites);
