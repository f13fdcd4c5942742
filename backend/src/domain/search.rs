//! Search filter for the business directory.
//!
//! Both persistence adapters honour the same semantics: free text matches
//! name, category, or subcategory; the city term matches location; both
//! present means logical AND; neither means match all. Matching is
//! case-insensitive substring containment.

use super::business::Business;

/// Optional free-text and city filter parsed from request parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    text: Option<String>,
    city: Option<String>,
}

impl SearchFilter {
    /// Build a filter from raw query parameters.
    ///
    /// Inputs are trimmed; blank values count as absent.
    pub fn from_params(q: Option<&str>, ciudad: Option<&str>) -> Self {
        Self {
            text: normalise(q),
            city: normalise(ciudad),
        }
    }

    /// Free-text term matched against name/category/subcategory.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// City term matched against the location string.
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    /// True when the filter matches every business.
    pub fn is_unfiltered(&self) -> bool {
        self.text.is_none() && self.city.is_none()
    }

    /// Apply the filter to a single business.
    ///
    /// This is the reference predicate; the SQL adapter mirrors it with
    /// `ILIKE` patterns.
    pub fn matches(&self, business: &Business) -> bool {
        let text_ok = self.text.as_deref().is_none_or(|term| {
            contains_ci(&business.name, term)
                || contains_ci(&business.category, term)
                || contains_ci(&business.subcategory, term)
        });
        let city_ok = self
            .city
            .as_deref()
            .is_none_or(|term| contains_ci(&business.location, term));
        text_ok && city_ok
    }
}

fn normalise(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::BusinessId;
    use rstest::rstest;

    fn negocio(name: &str, category: &str, subcategory: &str, location: &str) -> Business {
        Business {
            id: BusinessId::random(),
            name: name.into(),
            category: category.into(),
            subcategory: subcategory.into(),
            contact: String::new(),
            location: location.into(),
            photos: Vec::new(),
            rating: 4.0,
        }
    }

    #[rstest]
    #[case(None, None, true)]
    #[case(Some(""), Some("   "), true)]
    #[case(Some("cafe"), None, false)]
    fn blank_params_mean_unfiltered(
        #[case] q: Option<&str>,
        #[case] ciudad: Option<&str>,
        #[case] unfiltered: bool,
    ) {
        assert_eq!(SearchFilter::from_params(q, ciudad).is_unfiltered(), unfiltered);
    }

    #[test]
    fn params_are_trimmed() {
        let filter = SearchFilter::from_params(Some("  cafe  "), Some(" Monterrey "));
        assert_eq!(filter.text(), Some("cafe"));
        assert_eq!(filter.city(), Some("Monterrey"));
    }

    #[rstest]
    #[case("Cafetería del Centro", "Comida", "Cafetería", true)]
    #[case("Libros y Más", "Comida", "CAFE al paso", true)]
    #[case("Libros y Más", "Cafetales", "Librería", true)]
    #[case("Libros y Más", "Papelería", "Librería", false)]
    fn text_matches_any_of_name_category_subcategory(
        #[case] name: &str,
        #[case] category: &str,
        #[case] subcategory: &str,
        #[case] expected: bool,
    ) {
        let filter = SearchFilter::from_params(Some("cafe"), None);
        assert_eq!(filter.matches(&negocio(name, category, subcategory, "Centro")), expected);
    }

    #[rstest]
    #[case("Monterrey Centro", true)]
    #[case("MONTERREY", true)]
    #[case("Guadalajara", false)]
    fn city_matches_location(#[case] location: &str, #[case] expected: bool) {
        let filter = SearchFilter::from_params(None, Some("monterrey"));
        assert_eq!(filter.matches(&negocio("Taco Norte", "Comida", "Tacos", location)), expected);
    }

    #[test]
    fn text_and_city_require_both() {
        let filter = SearchFilter::from_params(Some("cafe"), Some("monterrey"));
        assert!(filter.matches(&negocio("Café Norte", "Comida", "Cafetería", "Monterrey")));
        assert!(!filter.matches(&negocio("Café Norte", "Comida", "Cafetería", "Saltillo")));
        assert!(!filter.matches(&negocio("Taco Norte", "Comida", "Tacos", "Monterrey")));
    }

    #[test]
    fn unfiltered_matches_everything() {
        let filter = SearchFilter::default();
        assert!(filter.matches(&negocio("Anything", "At", "All", "Anywhere")));
    }
}
