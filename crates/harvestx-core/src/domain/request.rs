use serde::{Deserialize, Serialize};

use super::variants::RequestStatus;

/// An investor's bid against an offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentRequest {
    pub id: String,
    pub offer_id: String,
    /// Principal of the bidding investor, in textual form.
    pub investor: String,
    /// Kilograms
    pub requested_quantity: u64,
    pub offered_price_per_kg: f64,
    /// Computed by the canister: quantity times offered price.
    pub total_offered: f64,
    pub message: String,
    pub status: RequestStatus,
    pub created_at: u64,
    pub updated_at: u64,
    pub expires_at: u64,
}

impl InvestmentRequest {
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.status == RequestStatus::Pending
    }

    #[must_use]
    pub fn is_accepted(&self) -> bool {
        self.status == RequestStatus::Accepted
    }
}

/// Payload for `create_investment_request`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewInvestmentRequest {
    pub offer_id: String,
    pub message: String,
    pub offered_price_per_kg: f64,
    pub requested_quantity: u64,
}

/// A farmer's answer to a pending request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestResponse {
    pub request_id: String,
    pub accept: bool,
}
