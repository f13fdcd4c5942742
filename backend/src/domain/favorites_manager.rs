//! Favorites domain service: the user → business relation with set
//! semantics, resolved against the business catalogue for listings.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    BusinessPersistenceError, BusinessRepository, FavoritesPersistenceError, FavoritesRepository,
    FavoritesService,
};
use crate::domain::{Business, BusinessId, Error, UserId};

/// Favorites service implementing the favorites driving port.
#[derive(Clone)]
pub struct FavoritesManager<F, B> {
    favorites: Arc<F>,
    businesses: Arc<B>,
}

impl<F, B> FavoritesManager<F, B> {
    /// Create a new manager over the favorites relation and the catalogue.
    pub fn new(favorites: Arc<F>, businesses: Arc<B>) -> Self {
        Self {
            favorites,
            businesses,
        }
    }
}

fn map_favorites_error(error: FavoritesPersistenceError) -> Error {
    match error {
        FavoritesPersistenceError::Connection { message } => Error::service_unavailable(message),
        FavoritesPersistenceError::Query { message } => Error::internal(message),
    }
}

fn map_business_error(error: BusinessPersistenceError) -> Error {
    match error {
        BusinessPersistenceError::Connection { message } => Error::service_unavailable(message),
        BusinessPersistenceError::Query { message } => Error::internal(message),
    }
}

#[async_trait]
impl<F, B> FavoritesService for FavoritesManager<F, B>
where
    F: FavoritesRepository,
    B: BusinessRepository,
{
    async fn list_businesses(&self, user_id: &UserId) -> Result<Vec<Business>, Error> {
        let ids = self
            .favorites
            .list(user_id)
            .await
            .map_err(map_favorites_error)?;
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        // find_by_ids drops identifiers that no longer resolve; the relation
        // is allowed to reference businesses that have disappeared.
        self.businesses
            .find_by_ids(&ids)
            .await
            .map_err(map_business_error)
    }

    async fn add(&self, user_id: &UserId, business_id: &BusinessId) -> Result<(), Error> {
        self.favorites
            .add(user_id, business_id)
            .await
            .map_err(map_favorites_error)
    }

    async fn remove(&self, user_id: &UserId, business_id: &BusinessId) -> Result<(), Error> {
        self.favorites
            .remove(user_id, business_id)
            .await
            .map_err(map_favorites_error)
    }
}
