//! Directory domain service: searches over a business repository.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{BusinessPersistenceError, BusinessRepository, DirectoryQuery};
use crate::domain::{Business, Error, SearchFilter};

/// Directory service implementing the search driving port.
#[derive(Clone)]
pub struct DirectoryService<B> {
    businesses: Arc<B>,
}

impl<B> DirectoryService<B> {
    /// Create a new service over the given business repository.
    pub fn new(businesses: Arc<B>) -> Self {
        Self { businesses }
    }
}

fn map_persistence_error(error: BusinessPersistenceError) -> Error {
    match error {
        BusinessPersistenceError::Connection { message } => Error::service_unavailable(message),
        BusinessPersistenceError::Query { message } => Error::internal(message),
    }
}

#[async_trait]
impl<B> DirectoryQuery for DirectoryService<B>
where
    B: BusinessRepository,
{
    async fn search(&self, filter: &SearchFilter) -> Result<Vec<Business>, Error> {
        self.businesses
            .search(filter)
            .await
            .map_err(map_persistence_error)
    }
}
