//! Product-violation records

use serde::{Deserialize, Serialize};

/// A flagged product listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub title: String,
    pub image: String,
    pub platform: String,
    pub seller: String,
    pub violation_type: String,
    /// Detection confidence, 0-100
    pub confidence_score: u8,
    /// Simulated OCR output from the listing images
    pub extracted_text: String,
    pub missing_fields: Vec<String>,
}

impl Product {
    pub fn confidence_level(&self) -> ConfidenceLevel {
        ConfidenceLevel::from_score(self.confidence_score)
    }

    /// Product category implied by the violation type
    pub fn category(&self) -> &'static str {
        category_for_violation(&self.violation_type)
    }
}

/// Map a violation-type label to the product category it applies to
pub fn category_for_violation(violation_type: &str) -> &'static str {
    match violation_type {
        "Missing BIS Certification" => "Electronics",
        "Incomplete Nutrition Label" => "Food & Beverages",
        "Missing Ingredient List" => "Cosmetics",
        "Missing Medical Device License" => "Pharmaceuticals",
        "No Safety Age Warning" => "Toys",
        _ => "Other",
    }
}

/// Confidence tier used for badge coloring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceLevel {
    /// 90 and above
    Critical,
    /// 70-89
    High,
    /// Below 70
    Moderate,
}

impl ConfidenceLevel {
    pub fn from_score(score: u8) -> Self {
        if score >= 90 {
            ConfidenceLevel::Critical
        } else if score >= 70 {
            ConfidenceLevel::High
        } else {
            ConfidenceLevel::Moderate
        }
    }
}
