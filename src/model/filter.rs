//! Violation filter
//!
//! Derives the visible subset of the catalog from three independent
//! criteria. A product is visible only if it passes all of them, and the
//! result keeps catalog order.

use super::product::Product;
use std::fmt;

/// A selector criterion: either no restriction or an exact value
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selector {
    #[default]
    All,
    Only(String),
}

impl Selector {
    pub fn only(value: impl Into<String>) -> Self {
        Selector::Only(value.into())
    }

    /// Exact, case-sensitive match unless unrestricted
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Selector::All => true,
            Selector::Only(expected) => expected == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selector::All)
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            Selector::All => None,
            Selector::Only(v) => Some(v.as_str()),
        }
    }

    /// Cycle through `All` followed by each option in order
    pub fn cycle(&self, options: &[&str]) -> Selector {
        let next_index = match self {
            Selector::All => 0,
            Selector::Only(v) => match options.iter().position(|o| o == v) {
                Some(i) => i + 1,
                None => 0,
            },
        };
        match options.get(next_index) {
            Some(option) => Selector::only(*option),
            None => Selector::All,
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::All => write!(f, "all"),
            Selector::Only(v) => write!(f, "{}", v),
        }
    }
}

/// The three filter criteria of the violations view
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    /// Free-text query matched against title and seller
    pub query: String,
    pub platform: Selector,
    pub violation_type: Selector,
}

impl FilterCriteria {
    pub fn new(query: impl Into<String>, platform: Selector, violation_type: Selector) -> Self {
        Self {
            query: query.into(),
            platform,
            violation_type,
        }
    }

    pub fn is_unrestricted(&self) -> bool {
        self.query.is_empty() && self.platform.is_all() && self.violation_type.is_all()
    }

    pub fn clear(&mut self) {
        *self = FilterCriteria::default();
    }

    /// Whether a single product passes every criterion
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_query(product)
            && self.platform.matches(&product.platform)
            && self.violation_type.matches(&product.violation_type)
    }

    fn matches_query(&self, product: &Product) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let query = self.query.to_lowercase();
        product.title.to_lowercase().contains(&query)
            || product.seller.to_lowercase().contains(&query)
    }

    /// Apply the criteria to a product list, preserving order
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::catalog::{Catalog, PLATFORMS};

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_unrestricted_includes_everything_in_order() {
        let catalog = Catalog::seeded();
        let result = FilterCriteria::default().apply(catalog.products());
        assert_eq!(ids(&result), vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_title_substring_any_case_includes_product() {
        let catalog = Catalog::seeded();
        for p in catalog.products() {
            let fragment: String = p.title.chars().skip(2).take(6).collect();
            for query in [fragment.to_uppercase(), fragment.to_lowercase()] {
                let criteria = FilterCriteria::new(query, Selector::All, Selector::All);
                assert!(criteria.matches(p), "{} should match {}", p.title, criteria.query);
            }
        }
    }

    #[test]
    fn test_seller_substring_matches() {
        let catalog = Catalog::seeded();
        let criteria = FilterCriteria::new("healthtech", Selector::All, Selector::All);
        assert_eq!(ids(&criteria.apply(catalog.products())), vec!["4"]);
    }

    #[test]
    fn test_different_platform_excludes_product() {
        let catalog = Catalog::seeded();
        for p in catalog.products() {
            for platform in PLATFORMS.iter().filter(|pl| **pl != p.platform) {
                let criteria = FilterCriteria::new("", Selector::only(*platform), Selector::All);
                assert!(!criteria.matches(p));
            }
        }
    }

    #[test]
    fn test_platform_match_is_exact() {
        let catalog = Catalog::seeded();
        let criteria = FilterCriteria::new("", Selector::only("amazon"), Selector::All);
        assert!(criteria.apply(catalog.products()).is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let catalog = Catalog::seeded();
        let criteria = FilterCriteria::new("o", Selector::only("Amazon"), Selector::All);
        let first = ids(&criteria.apply(catalog.products()));
        let second = ids(&criteria.apply(catalog.products()));
        assert_eq!(first, second);
    }

    #[test]
    fn test_criteria_are_conjunctive() {
        let catalog = Catalog::seeded();
        // Query and platform each match id 1, but the violation type does not
        let criteria = FilterCriteria::new(
            "Samsung",
            Selector::only("Amazon"),
            Selector::only("No Safety Age Warning"),
        );
        assert!(criteria.apply(catalog.products()).is_empty());

        let criteria = FilterCriteria::new(
            "Samsung",
            Selector::only("Amazon"),
            Selector::only("Missing BIS Certification"),
        );
        assert_eq!(ids(&criteria.apply(catalog.products())), vec!["1"]);
    }

    #[test]
    fn test_seeded_scenarios() {
        let catalog = Catalog::seeded();

        let samsung = FilterCriteria::new("Samsung", Selector::All, Selector::All);
        assert_eq!(ids(&samsung.apply(catalog.products())), vec!["1"]);

        let amazon = FilterCriteria::new("", Selector::only("Amazon"), Selector::All);
        let result = amazon.apply(catalog.products());
        assert!(result.iter().all(|p| p.platform == "Amazon"));
        assert_eq!(ids(&result), vec!["1", "4", "5"]);

        let none = FilterCriteria::new("nonexistent-xyz", Selector::All, Selector::All);
        assert!(none.apply(catalog.products()).is_empty());
    }

    #[test]
    fn test_selector_cycle_wraps_to_all() {
        let options = ["A", "B"];
        let s = Selector::All.cycle(&options);
        assert_eq!(s, Selector::only("A"));
        let s = s.cycle(&options);
        assert_eq!(s, Selector::only("B"));
        assert_eq!(s.cycle(&options), Selector::All);
        assert_eq!(Selector::only("Z").cycle(&options), Selector::only("A"));
    }
}
