//! Driving port for the login use-case.
//!
//! In hexagonal terms this is a *driving* port: inbound adapters call it to
//! authenticate credentials without knowing (or importing) the backing
//! infrastructure, which keeps HTTP handler tests deterministic.

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials, User};

/// Domain use-case port for authentication.
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and return the authenticated user.
    ///
    /// Unknown email and wrong password produce the same generic
    /// unauthorized error.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<User, Error>;
}
