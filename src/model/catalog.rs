//! Static product catalog
//!
//! The catalog is seeded once when the app starts and is never mutated.
//! It only exposes read access.

use super::product::Product;

/// Platforms offered in the platform picker
pub const PLATFORMS: [&str; 3] = ["Amazon", "Flipkart", "Nykaa"];

/// Violation-type labels offered in the violation picker
pub const VIOLATION_TYPES: [&str; 5] = [
    "Missing BIS Certification",
    "Incomplete Nutrition Label",
    "Missing Ingredient List",
    "Missing Medical Device License",
    "No Safety Age Warning",
];

/// Categories offered in the report category filter
pub const CATEGORIES: [&str; 5] = [
    "Electronics",
    "Food & Beverages",
    "Cosmetics",
    "Pharmaceuticals",
    "Toys",
];

/// Immutable collection of product-violation records
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded()
    }
}

impl Catalog {
    /// Build a catalog from an explicit list of products
    pub fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The built-in catalog of flagged listings
    pub fn seeded() -> Self {
        Self::from_products(vec![
            product(
                "1",
                "Samsung Galaxy S24 Ultra 256GB",
                "https://images.unsplash.com/photo-1673718423569-27ce5b3857c2",
                "Amazon",
                "TechWorld Store",
                "Missing BIS Certification",
                95,
                "Samsung Galaxy S24 Ultra smartphone with advanced camera technology. Model: SM-S928B. Storage: 256GB. RAM: 12GB. Display: 6.8 inch Dynamic AMOLED.",
                &["BIS Registration Number", "Importer Details", "Warranty Terms"],
            ),
            product(
                "2",
                "Organic Honey Pure 500g Jar",
                "https://images.unsplash.com/photo-1597317292822-d0fa5be43aea",
                "Flipkart",
                "Nature's Best",
                "Incomplete Nutrition Label",
                88,
                "Pure organic honey sourced from wildflower nectar. Net weight: 500g. No artificial preservatives. Natural sweetener.",
                &["Nutritional Information per 100g", "FSSAI License Number", "Expiry Date"],
            ),
            product(
                "3",
                "Anti-Aging Vitamin C Serum 30ml",
                "https://images.unsplash.com/photo-1624574966266-1cdd65b74500",
                "Nykaa",
                "BeautyHub",
                "Missing Ingredient List",
                92,
                "Advanced anti-aging serum with Vitamin C. Reduces fine lines and brightens skin. Suitable for all skin types. Volume: 30ml.",
                &["Complete Ingredient List", "Manufacturing Date", "Dermatologically Tested Certificate"],
            ),
            product(
                "4",
                "Blood Pressure Monitor Digital",
                "https://images.unsplash.com/photo-1652038448592-27377ec0b7d4",
                "Amazon",
                "HealthTech Solutions",
                "Missing Medical Device License",
                97,
                "Digital blood pressure monitor with large display. Automatic measurement. Memory for 2 users. Battery operated. FDA approved design.",
                &["CDSCO Registration", "Medical Device License", "Clinical Trial Data"],
            ),
            product(
                "5",
                "Educational Building Blocks Set",
                "https://images.unsplash.com/photo-1614897464244-86c6b2fdda79",
                "Amazon",
                "KidsWorld Toys",
                "No Safety Age Warning",
                85,
                "Educational building blocks for children. Colorful plastic blocks. Helps develop motor skills and creativity. 100 pieces included.",
                &["Age Recommendation Warning", "BIS ISI Mark", "Safety Test Certificate"],
            ),
        ])
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    title: &str,
    image: &str,
    platform: &str,
    seller: &str,
    violation_type: &str,
    confidence_score: u8,
    extracted_text: &str,
    missing_fields: &[&str],
) -> Product {
    Product {
        id: id.to_string(),
        title: title.to_string(),
        image: image.to_string(),
        platform: platform.to_string(),
        seller: seller.to_string(),
        violation_type: violation_type.to_string(),
        confidence_score,
        extracted_text: extracted_text.to_string(),
        missing_fields: missing_fields.iter().map(|f| f.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seeded_catalog_has_five_unique_records() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.len(), 5);
        let ids: HashSet<&str> = catalog.products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_seeded_values_are_within_known_sets() {
        for p in Catalog::seeded().products() {
            assert!(PLATFORMS.contains(&p.platform.as_str()), "{}", p.platform);
            assert!(VIOLATION_TYPES.contains(&p.violation_type.as_str()));
            assert!(CATEGORIES.contains(&p.category()));
            assert!(p.confidence_score <= 100);
            assert!(!p.missing_fields.is_empty());
        }
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.get("3").map(|p| p.seller.as_str()), Some("BeautyHub"));
        assert!(catalog.get("99").is_none());
    }
}
