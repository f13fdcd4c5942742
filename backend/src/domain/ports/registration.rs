//! Driving port for the registration use-case.

use async_trait::async_trait;

use crate::domain::{Error, NewRegistration, UserId};

/// Domain use-case port for account creation.
#[async_trait]
pub trait RegistrationService: Send + Sync {
    /// Create a new account, rejecting duplicate emails with a conflict.
    async fn register(&self, registration: NewRegistration) -> Result<UserId, Error>;
}
