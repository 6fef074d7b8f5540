//! Read-only canister methods.

use crate::error::CanisterResult;
use crate::transport::CanisterTransport;
use crate::wire::{
    CurrentUserResponse, InvestmentOffer, InvestmentRequest, OfferListResponse, PlatformStats,
    RequestListResponse, StatsResponse, UserProfile,
};

use super::{CanisterClient, Mode};

impl<T: CanisterTransport> CanisterClient<T> {
    /// Liveness text; not wrapped in an envelope.
    pub(crate) async fn check_health(&self) -> CanisterResult<String> {
        self.call(Mode::Query, "health_check", ()).await
    }

    pub(crate) async fn get_available_offers(&self) -> CanisterResult<Vec<InvestmentOffer>> {
        let response: OfferListResponse =
            self.call(Mode::Query, "get_available_offers", ()).await?;
        response.into_list("Failed to fetch offers")
    }

    /// Offers listed by the calling identity.
    pub(crate) async fn get_farmer_offers(&self) -> CanisterResult<Vec<InvestmentOffer>> {
        let response: OfferListResponse = self.call(Mode::Query, "get_farmer_offers", ()).await?;
        response.into_list("Failed to fetch farmer offers")
    }

    /// Requests submitted by the calling identity.
    pub(crate) async fn get_investor_requests(&self) -> CanisterResult<Vec<InvestmentRequest>> {
        let response: RequestListResponse =
            self.call(Mode::Query, "get_investor_requests", ()).await?;
        response.into_list("Failed to fetch investor requests")
    }

    pub(crate) async fn get_requests_for_offer(
        &self,
        offer_id: &str,
    ) -> CanisterResult<Vec<InvestmentRequest>> {
        let response: RequestListResponse = self
            .call(Mode::Query, "get_requests_for_offer", (offer_id,))
            .await?;
        response.into_list("Failed to fetch requests for offer")
    }

    pub(crate) async fn get_platform_stats(&self) -> CanisterResult<PlatformStats> {
        let response: StatsResponse = self.call(Mode::Query, "get_platform_stats", ()).await?;
        response.into_required("Failed to fetch platform stats")
    }

    /// Profile of the calling identity, `None` when it has not registered.
    pub(crate) async fn get_current_user(&self) -> CanisterResult<Option<UserProfile>> {
        let response: CurrentUserResponse =
            self.call(Mode::Query, "get_current_user", ()).await?;
        response.into_optional("Failed to fetch current user")
    }
}
