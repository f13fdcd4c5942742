//! Port abstraction for business catalogue reads.

use async_trait::async_trait;

use crate::domain::{Business, BusinessId, SearchFilter};

/// Persistence errors raised by business repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BusinessPersistenceError {
    /// Repository connection could not be established.
    #[error("business repository connection failed: {message}")]
    Connection { message: String },

    /// Query failed during execution.
    #[error("business repository query failed: {message}")]
    Query { message: String },
}

impl BusinessPersistenceError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

#[async_trait]
pub trait BusinessRepository: Send + Sync {
    /// Return all businesses matching the filter, unpaginated.
    async fn search(
        &self,
        filter: &SearchFilter,
    ) -> Result<Vec<Business>, BusinessPersistenceError>;

    /// Resolve identifiers to full records.
    ///
    /// Unknown identifiers are silently dropped; the favorites relation is
    /// allowed to reference businesses that no longer exist.
    async fn find_by_ids(
        &self,
        ids: &[BusinessId],
    ) -> Result<Vec<Business>, BusinessPersistenceError>;
}

/// In-memory catalogue used when no database pool is configured.
#[derive(Debug, Clone, Default)]
pub struct FixtureBusinessRepository {
    businesses: Vec<Business>,
}

impl FixtureBusinessRepository {
    /// Build a fixture over an explicit catalogue.
    pub fn with_businesses(businesses: Vec<Business>) -> Self {
        Self { businesses }
    }

    /// Build a fixture seeded with a small demo catalogue.
    pub fn seeded() -> Self {
        let entry = |name: &str, category: &str, subcategory: &str, contact: &str, location: &str, photo: &str, rating: f64| Business {
            id: BusinessId::random(),
            name: name.into(),
            category: category.into(),
            subcategory: subcategory.into(),
            contact: contact.into(),
            location: location.into(),
            photos: vec![photo.into()],
            rating,
        };
        Self::with_businesses(vec![
            entry("Cafetería del Centro", "Comida", "Cafetería", "81-555-0101", "Monterrey Centro", "cafeteria-centro.jpg", 4.6),
            entry("Tacos Doña Lupe", "Comida", "Taquería", "81-555-0102", "Monterrey San Pedro", "tacos-lupe.jpg", 4.8),
            entry("Librería El Búho", "Cultura", "Librería", "33-555-0103", "Guadalajara Centro", "libreria-buho.jpg", 4.3),
            entry("Café y Libros", "Comida", "Cafetería", "33-555-0104", "Guadalajara Chapultepec", "cafe-libros.jpg", 4.5),
            entry("Ferretería Hernández", "Hogar", "Ferretería", "55-555-0105", "Ciudad de México Roma", "ferreteria.jpg", 4.1),
            entry("Estética Brisa", "Belleza", "Estética", "55-555-0106", "Ciudad de México Condesa", "estetica-brisa.jpg", 3.9),
        ])
    }
}

#[async_trait]
impl BusinessRepository for FixtureBusinessRepository {
    async fn search(
        &self,
        filter: &SearchFilter,
    ) -> Result<Vec<Business>, BusinessPersistenceError> {
        Ok(self
            .businesses
            .iter()
            .filter(|business| filter.matches(business))
            .cloned()
            .collect())
    }

    async fn find_by_ids(
        &self,
        ids: &[BusinessId],
    ) -> Result<Vec<Business>, BusinessPersistenceError> {
        Ok(self
            .businesses
            .iter()
            .filter(|business| ids.contains(&business.id))
            .cloned()
            .collect())
    }
}
