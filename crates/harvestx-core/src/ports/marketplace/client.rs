//! Marketplace canister port trait.

use async_trait::async_trait;

use super::error::MarketplaceResult;
use crate::domain::{
    InvestmentOffer, InvestmentRequest, NewInvestmentRequest, NewOffer, NewUser, PlatformStats,
    RequestResponse, UserProfile,
};

/// Port trait for the remote marketplace canister.
///
/// This trait defines the interface that the core domain uses to reach the
/// backend. The implementation lives in `harvestx-canister`.
///
/// # Design
///
/// - Uses core-owned view models, not Candid wire records
/// - Returns `MarketplaceError` for all failures
/// - Envelope unwrapping happens in the adapter: list calls yield an empty
///   list when the canister sends no data, single-value calls fail instead
/// - No retries; the caller decides whether to try again
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MarketplacePort: Send + Sync {
    /// Raw reply of the canister's `health_check` query.
    async fn health_check(&self) -> MarketplaceResult<String>;

    /// Every offer currently listed on the marketplace.
    async fn available_offers(&self) -> MarketplaceResult<Vec<InvestmentOffer>>;

    /// Offers listed by the calling principal.
    async fn farmer_offers(&self) -> MarketplaceResult<Vec<InvestmentOffer>>;

    /// Requests submitted by the calling principal.
    async fn investor_requests(&self) -> MarketplaceResult<Vec<InvestmentRequest>>;

    /// Requests submitted against one offer.
    async fn requests_for_offer(&self, offer_id: &str) -> MarketplaceResult<Vec<InvestmentRequest>>;

    async fn platform_stats(&self) -> MarketplaceResult<PlatformStats>;

    /// Profile of the calling principal, `None` when it has not registered.
    async fn current_user(&self) -> MarketplaceResult<Option<UserProfile>>;

    async fn create_offer(&self, offer: &NewOffer) -> MarketplaceResult<InvestmentOffer>;

    async fn create_investment_request(
        &self,
        request: &NewInvestmentRequest,
    ) -> MarketplaceResult<InvestmentRequest>;

    /// Accept or reject a pending request. Returns the updated request.
    async fn respond_to_request(
        &self,
        response: &RequestResponse,
    ) -> MarketplaceResult<InvestmentRequest>;

    async fn register_user(&self, user: &NewUser) -> MarketplaceResult<UserProfile>;
}
