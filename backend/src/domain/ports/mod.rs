//! Domain ports.
//!
//! Driven ports (`*Repository`) are implemented by persistence adapters and
//! surface typed persistence errors. Driving ports (`RegistrationService`,
//! `LoginService`, `DirectoryQuery`, `FavoritesService`) are implemented by
//! domain services and consumed by inbound adapters, which lets HTTP handler
//! tests substitute doubles instead of wiring a database.

mod business_repository;
mod directory;
mod favorites;
mod favorites_repository;
mod login;
mod registration;
mod user_repository;

pub use business_repository::{
    BusinessPersistenceError, BusinessRepository, FixtureBusinessRepository,
};
pub use directory::DirectoryQuery;
pub use favorites::FavoritesService;
pub use favorites_repository::{
    FavoritesPersistenceError, FavoritesRepository, FixtureFavoritesRepository,
};
pub use login::LoginService;
pub use registration::RegistrationService;
pub use user_repository::{FixtureUserRepository, UserPersistenceError, UserRepository};
