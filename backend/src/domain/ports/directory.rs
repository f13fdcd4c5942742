//! Driving port for directory searches.

use async_trait::async_trait;

use crate::domain::{Business, Error, SearchFilter};

/// Domain use-case port for searching the business directory.
#[async_trait]
pub trait DirectoryQuery: Send + Sync {
    /// Return all businesses matching the filter, unpaginated.
    async fn search(&self, filter: &SearchFilter) -> Result<Vec<Business>, Error>;
}
