//! Marketplace listing filter.

use crate::domain::InvestmentOffer;

/// Wildcard accepted for the type and grade filters.
const ALL: &str = "all";

/// Criteria for browsing the marketplace.
///
/// Only active offers are ever shown. Each criterion narrows further; an
/// empty filter matches every active offer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OfferFilter {
    /// Case-insensitive text matched against product name, location and farmer.
    pub search: Option<String>,
    /// Product type label, or `"all"`.
    pub product_type: Option<String>,
    /// Quality grade label, or `"all"`.
    pub quality_grade: Option<String>,
}

impl OfferFilter {
    pub fn matches(&self, offer: &InvestmentOffer) -> bool {
        if !offer.is_active() {
            return false;
        }
        let matches_search = self
            .search
            .as_deref()
            .is_none_or(|term| offer.matches_search(term));
        let matches_type = self
            .product_type
            .as_deref()
            .is_none_or(|label| label == ALL || offer.product_type.label() == label);
        let matches_grade = self
            .quality_grade
            .as_deref()
            .is_none_or(|label| label == ALL || offer.quality_grade.label() == label);

        matches_search && matches_type && matches_grade
    }

    /// Keep the offers this filter matches, preserving order.
    pub fn apply(&self, offers: Vec<InvestmentOffer>) -> Vec<InvestmentOffer> {
        offers.into_iter().filter(|offer| self.matches(offer)).collect()
    }
}
