//! Driving port for the favorites use-cases.

use async_trait::async_trait;

use crate::domain::{Business, BusinessId, Error, UserId};

/// Domain use-case port for managing a user's favorites.
///
/// Mutations trust the supplied user id; there is no ownership check and no
/// validation that the business exists.
#[async_trait]
pub trait FavoritesService: Send + Sync {
    /// Resolve a user's favorites to full business records.
    ///
    /// Favorite ids that no longer resolve are dropped from the result.
    async fn list_businesses(&self, user_id: &UserId) -> Result<Vec<Business>, Error>;

    /// Add a favorite; duplicate adds succeed without a second entry.
    async fn add(&self, user_id: &UserId, business_id: &BusinessId) -> Result<(), Error>;

    /// Remove a favorite; removing an absent pair still succeeds.
    async fn remove(&self, user_id: &UserId, business_id: &BusinessId) -> Result<(), Error>;
}
