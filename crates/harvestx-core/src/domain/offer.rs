use serde::{Deserialize, Serialize};

use super::variants::{OfferStatus, ProductType, QualityGrade};

/// A farmer's crop listing open for investment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentOffer {
    pub id: String,
    /// Principal of the listing farmer, in textual form.
    pub farmer: String,
    pub product_name: String,
    pub product_type: ProductType,
    pub quality_grade: QualityGrade,
    pub description: String,
    /// Kilograms listed
    pub total_quantity: u64,
    /// Kilograms not yet committed to accepted requests
    pub available_quantity: u64,
    pub price_per_kg: f64,
    pub minimum_investment: u64,
    pub location: String,
    /// Expected harvest date, as entered by the farmer.
    pub harvest_date: String,
    pub status: OfferStatus,
    pub created_at: u64,
    pub updated_at: u64,
}

impl InvestmentOffer {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == OfferStatus::Active
    }

    /// Case-insensitive match of `term` against product name, location and farmer.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.product_name.to_lowercase().contains(&term)
            || self.location.to_lowercase().contains(&term)
            || self.farmer.to_lowercase().contains(&term)
    }
}

/// Payload for `create_agricultural_offer`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOffer {
    pub product_name: String,
    pub product_type: ProductType,
    pub quality_grade: QualityGrade,
    pub description: String,
    pub total_quantity: u64,
    pub price_per_kg: f64,
    pub minimum_investment: u64,
    pub location: String,
    pub harvest_date: String,
}
