//! Dashboard aggregates.
//!
//! Both dashboards are pure functions of what the canister returned; the
//! service fetches the parts and these types summarize them.

use serde::Serialize;

use crate::domain::{InvestmentOffer, InvestmentRequest, PlatformStats};

/// Number of active offers highlighted on the investor dashboard.
pub const FEATURED_OFFER_COUNT: usize = 3;

/// Summary of a farmer's listings and the requests on one of them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FarmerDashboard {
    pub offers: Vec<InvestmentOffer>,
    pub active_offers: usize,
    /// Offer whose requests are listed, if one was selected.
    pub selected_offer: Option<String>,
    pub requests: Vec<InvestmentRequest>,
    pub total_requests: usize,
    pub pending_requests: usize,
}

impl FarmerDashboard {
    pub fn from_parts(
        offers: Vec<InvestmentOffer>,
        selected_offer: Option<String>,
        requests: Vec<InvestmentRequest>,
    ) -> Self {
        let active_offers = offers.iter().filter(|o| o.is_active()).count();
        let pending_requests = requests.iter().filter(|r| r.is_pending()).count();
        Self {
            active_offers,
            total_requests: requests.len(),
            pending_requests,
            offers,
            selected_offer,
            requests,
        }
    }
}

/// Summary of an investor's position and the marketplace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvestorDashboard {
    pub stats: PlatformStats,
    /// First few active offers, in listing order.
    pub featured: Vec<InvestmentOffer>,
    pub requests: Vec<InvestmentRequest>,
    /// Sum of `total_offered` over accepted requests.
    pub total_invested: f64,
    pub pending_requests: usize,
    /// Number of accepted requests.
    pub active_investments: usize,
}

impl InvestorDashboard {
    pub fn from_parts(
        stats: PlatformStats,
        offers: Vec<InvestmentOffer>,
        requests: Vec<InvestmentRequest>,
    ) -> Self {
        let featured = offers
            .into_iter()
            .filter(InvestmentOffer::is_active)
            .take(FEATURED_OFFER_COUNT)
            .collect();
        let total_invested = requests
            .iter()
            .filter(|r| r.is_accepted())
            .map(|r| r.total_offered)
            .sum();
        let pending_requests = requests.iter().filter(|r| r.is_pending()).count();
        let active_investments = requests.iter().filter(|r| r.is_accepted()).count();
        Self {
            stats,
            featured,
            requests,
            total_invested,
            pending_requests,
            active_investments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::offer_fixtures::offer;
    use crate::domain::request_fixtures::request;
    use crate::domain::{OfferStatus, RequestStatus};

    #[test]
    fn test_farmer_dashboard_counts() {
        let offers = vec![
            offer("a", OfferStatus::Active),
            offer("b", OfferStatus::Cancelled),
            offer("c", OfferStatus::Active),
        ];
        let requests = vec![
            request("r1", RequestStatus::Pending, 100.0),
            request("r2", RequestStatus::Rejected, 100.0),
            request("r3", RequestStatus::Pending, 100.0),
        ];
        let dashboard = FarmerDashboard::from_parts(offers, Some("a".to_string()), requests);
        assert_eq!(dashboard.active_offers, 2);
        assert_eq!(dashboard.total_requests, 3);
        assert_eq!(dashboard.pending_requests, 2);
        assert_eq!(dashboard.selected_offer.as_deref(), Some("a"));
    }

    #[test]
    fn test_investor_dashboard_aggregates() {
        let offers = vec![
            offer("a", OfferStatus::Expired),
            offer("b", OfferStatus::Active),
            offer("c", OfferStatus::Active),
            offer("d", OfferStatus::Active),
            offer("e", OfferStatus::Active),
        ];
        let requests = vec![
            request("r1", RequestStatus::Accepted, 250.0),
            request("r2", RequestStatus::Pending, 80.0),
            request("r3", RequestStatus::Accepted, 125.5),
            request("r4", RequestStatus::Rejected, 999.0),
        ];
        let dashboard = InvestorDashboard::from_parts(PlatformStats::default(), offers, requests);

        let featured: Vec<&str> = dashboard.featured.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(featured, vec!["b", "c", "d"]);
        assert!((dashboard.total_invested - 375.5).abs() < f64::EPSILON);
        assert_eq!(dashboard.pending_requests, 1);
        assert_eq!(dashboard.active_investments, 2);
    }

    #[test]
    fn test_investor_dashboard_empty() {
        let dashboard =
            InvestorDashboard::from_parts(PlatformStats::default(), Vec::new(), Vec::new());
        assert!(dashboard.featured.is_empty());
        assert!(dashboard.total_invested.abs() < f64::EPSILON);
        assert_eq!(dashboard.active_investments, 0);
    }
}
