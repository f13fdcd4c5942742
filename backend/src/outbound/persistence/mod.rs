//! PostgreSQL persistence adapters using Diesel.
//!
//! Concrete implementations of the domain repository ports, backed by
//! PostgreSQL through `diesel-async` with `bb8` connection pooling.
//!
//! Adapters here stay thin: they translate between Diesel rows and domain
//! types and map database errors onto the persistence error enums. Row
//! structs (`models.rs`) and table definitions (`schema.rs`) are internal
//! and never cross into the domain.

mod diesel_business_repository;
mod diesel_favorites_repository;
mod diesel_user_repository;
mod models;
mod pool;
mod schema;

pub use diesel_business_repository::DieselBusinessRepository;
pub use diesel_favorites_repository::DieselFavoritesRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
