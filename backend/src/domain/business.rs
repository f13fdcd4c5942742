//! Business ("negocio") data model.
//!
//! Businesses are maintained externally and read-only to this application;
//! there is no creation endpoint, so the type carries no mutation surface.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validation errors returned by [`BusinessId::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BusinessValidationError {
    EmptyId,
    InvalidId,
}

impl fmt::Display for BusinessValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "business id must not be empty"),
            Self::InvalidId => write!(f, "business id must be a valid UUID"),
        }
    }
}

impl std::error::Error for BusinessValidationError {}

/// Stable business identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BusinessId(Uuid);

impl BusinessId {
    /// Validate and construct a [`BusinessId`] from string input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, BusinessValidationError> {
        let raw = id.as_ref();
        if raw.is_empty() {
            return Err(BusinessValidationError::EmptyId);
        }
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| BusinessValidationError::InvalidId)
    }

    /// Generate a new random [`BusinessId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an already-parsed UUID (persistence reads).
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for BusinessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<BusinessId> for String {
    fn from(value: BusinessId) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for BusinessId {
    type Error = BusinessValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Directory entry for a local business.
///
/// Never crosses the HTTP boundary whole; views project it into cards and
/// the JSON endpoints exchange only identifiers.
#[derive(Debug, Clone, PartialEq)]
pub struct Business {
    pub id: BusinessId,
    pub name: String,
    pub category: String,
    pub subcategory: String,
    pub contact: String,
    pub location: String,
    pub photos: Vec<String>,
    pub rating: f64,
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", BusinessValidationError::EmptyId)]
    #[case("xyz", BusinessValidationError::InvalidId)]
    fn business_id_rejects_invalid_inputs(
        #[case] input: &str,
        #[case] expected: BusinessValidationError,
    ) {
        let err = BusinessId::new(input).expect_err("invalid id must fail");
        assert_eq!(err, expected);
    }

    #[test]
    fn business_id_round_trips_through_string() {
        let id = BusinessId::random();
        let parsed = BusinessId::new(id.to_string()).expect("round trip");
        assert_eq!(parsed, id);
    }

    #[test]
    fn business_id_serialises_as_its_string_form() {
        let id = BusinessId::random();
        let value = serde_json::to_value(id).expect("serialise id");
        assert_eq!(value, serde_json::Value::String(id.to_string()));
    }
}
