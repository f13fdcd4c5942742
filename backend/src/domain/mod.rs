//! Domain entities, validation, services, and ports.
//!
//! Types here are transport agnostic. Inbound adapters parse raw request
//! values through the fallible constructors before touching a port, and
//! outbound adapters translate rows back into these types.

pub mod account_service;
pub mod business;
pub mod directory_service;
pub mod error;
pub mod favorites_manager;
pub mod password;
pub mod ports;
pub mod search;
pub mod user;

pub use self::account_service::AccountService;
pub use self::business::{Business, BusinessId, BusinessValidationError};
pub use self::directory_service::DirectoryService;
pub use self::error::{Error, ErrorCode};
pub use self::favorites_manager::FavoritesManager;
pub use self::password::PasswordHash;
pub use self::search::SearchFilter;
pub use self::user::{
    EmailAddress, LoginCredentials, NewRegistration, User, UserId, UserName, UserValidationError,
};

/// Response header carrying the request-scoped trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";
