//! Port trait implementation for `CanisterClient`.
//!
//! This module implements the core-owned `MarketplacePort` trait for
//! `CanisterClient`, handling the conversion between wire records and core
//! view models.

use async_trait::async_trait;
use harvestx_core::{
    InvestmentOffer, InvestmentRequest, MarketplaceError, MarketplacePort, MarketplaceResult,
    NewInvestmentRequest, NewOffer, NewUser, PlatformStats, RequestResponse, UserProfile,
};

use crate::client::CanisterClient;
use crate::convert::{
    from_new_offer, from_new_request, from_new_user, from_response, to_offer, to_profile,
    to_request, to_stats,
};
use crate::error::CanisterError;
use crate::transport::CanisterTransport;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `CanisterError` to core `MarketplaceError`.
pub(crate) fn map_error(err: CanisterError) -> MarketplaceError {
    match err {
        CanisterError::Agent(e) => MarketplaceError::Transport {
            message: e.to_string(),
        },
        CanisterError::Candid(e) => MarketplaceError::InvalidResponse {
            message: e.to_string(),
        },
        e @ (CanisterError::InvalidHost { .. }
        | CanisterError::InvalidPrincipal { .. }
        | CanisterError::Identity { .. }) => MarketplaceError::Configuration {
            message: e.to_string(),
        },
        CanisterError::Rejected { message } => MarketplaceError::Rejected { message },
    }
}

/// Log a failed call and map its error.
fn failed(method: &'static str) -> impl FnOnce(CanisterError) -> MarketplaceError {
    move |err| {
        let err = map_error(err);
        tracing::warn!(method, error = %err, "Canister call failed");
        err
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<T: CanisterTransport> MarketplacePort for CanisterClient<T> {
    async fn health_check(&self) -> MarketplaceResult<String> {
        self.check_health().await.map_err(failed("health_check"))
    }

    async fn available_offers(&self) -> MarketplaceResult<Vec<InvestmentOffer>> {
        let offers = self
            .get_available_offers()
            .await
            .map_err(failed("get_available_offers"))?;
        Ok(offers.into_iter().map(to_offer).collect())
    }

    async fn farmer_offers(&self) -> MarketplaceResult<Vec<InvestmentOffer>> {
        let offers = self
            .get_farmer_offers()
            .await
            .map_err(failed("get_farmer_offers"))?;
        Ok(offers.into_iter().map(to_offer).collect())
    }

    async fn investor_requests(&self) -> MarketplaceResult<Vec<InvestmentRequest>> {
        let requests = self
            .get_investor_requests()
            .await
            .map_err(failed("get_investor_requests"))?;
        Ok(requests.into_iter().map(to_request).collect())
    }

    async fn requests_for_offer(&self, offer_id: &str) -> MarketplaceResult<Vec<InvestmentRequest>> {
        let requests = self
            .get_requests_for_offer(offer_id)
            .await
            .map_err(failed("get_requests_for_offer"))?;
        Ok(requests.into_iter().map(to_request).collect())
    }

    async fn platform_stats(&self) -> MarketplaceResult<PlatformStats> {
        self.get_platform_stats()
            .await
            .map(to_stats)
            .map_err(failed("get_platform_stats"))
    }

    async fn current_user(&self) -> MarketplaceResult<Option<UserProfile>> {
        self.get_current_user()
            .await
            .map(|user| user.map(to_profile))
            .map_err(failed("get_current_user"))
    }

    async fn create_offer(&self, offer: &NewOffer) -> MarketplaceResult<InvestmentOffer> {
        self.create_agricultural_offer(&from_new_offer(offer))
            .await
            .map(to_offer)
            .map_err(failed("create_agricultural_offer"))
    }

    async fn create_investment_request(
        &self,
        request: &NewInvestmentRequest,
    ) -> MarketplaceResult<InvestmentRequest> {
        self.submit_investment_request(&from_new_request(request))
            .await
            .map(to_request)
            .map_err(failed("create_investment_request"))
    }

    async fn respond_to_request(
        &self,
        response: &RequestResponse,
    ) -> MarketplaceResult<InvestmentRequest> {
        self.respond_to_investment_request(&from_response(response))
            .await
            .map(to_request)
            .map_err(failed("respond_to_investment_request"))
    }

    async fn register_user(&self, user: &NewUser) -> MarketplaceResult<UserProfile> {
        self.register(&from_new_user(user))
            .await
            .map(to_profile)
            .map_err(failed("register_user"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::fixtures;
    use crate::transport::testing::{CallKind, FakeTransport};
    use crate::wire::{self, ApiResponse};
    use harvestx_core::{OfferStatus, RequestStatus, UserRole};

    fn client(fake: FakeTransport) -> CanisterClient<FakeTransport> {
        CanisterClient::with_transport(fake)
    }

    #[test]
    fn test_map_error() {
        let err = map_error(CanisterError::Rejected {
            message: "Offer not found".to_string(),
        });
        assert_eq!(
            err,
            MarketplaceError::Rejected {
                message: "Offer not found".to_string()
            }
        );

        let err = map_error(CanisterError::InvalidPrincipal {
            value: "x".to_string(),
            message: "bad".to_string(),
        });
        assert!(matches!(err, MarketplaceError::Configuration { .. }));
    }

    #[tokio::test]
    async fn test_health_check_returns_raw_text() {
        let fake = FakeTransport::new().with_reply("health_check", &"OK".to_string());
        let reply = MarketplacePort::health_check(&client(fake)).await.unwrap();
        assert_eq!(reply, "OK");
    }

    #[tokio::test]
    async fn test_transport_failure_maps_to_transport_error() {
        let fake = FakeTransport::new().with_failure("health_check", "connection refused");
        let err = MarketplacePort::health_check(&client(fake))
            .await
            .unwrap_err();
        assert!(matches!(err, MarketplaceError::Transport { .. }));
        assert!(err.message().contains("connection refused"));
    }

    #[tokio::test]
    async fn test_available_offers_converted() {
        let fake = FakeTransport::new().with_reply(
            "get_available_offers",
            &ApiResponse::ok(vec![fixtures::offer("offer-1"), fixtures::offer("offer-2")]),
        );
        let offers = client(fake).available_offers().await.unwrap();
        assert_eq!(offers.len(), 2);
        assert_eq!(offers[0].id, "offer-1");
        assert_eq!(offers[0].status, OfferStatus::Active);
        assert_eq!(offers[1].farmer, "2vxsx-fae");
    }

    #[tokio::test]
    async fn test_list_without_data_is_empty() {
        let fake = FakeTransport::new().with_reply(
            "get_farmer_offers",
            &ApiResponse::<Vec<wire::InvestmentOffer>>::empty(),
        );
        let offers = client(fake).farmer_offers().await.unwrap();
        assert!(offers.is_empty());
    }

    #[tokio::test]
    async fn test_list_failure_uses_default_message() {
        let fake = FakeTransport::new().with_reply(
            "get_investor_requests",
            &ApiResponse::<Vec<wire::InvestmentRequest>>::failed(None),
        );
        let err = client(fake).investor_requests().await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch investor requests");
    }

    #[tokio::test]
    async fn test_requests_for_offer_sends_offer_id() {
        let fake = FakeTransport::new().with_reply(
            "get_requests_for_offer",
            &ApiResponse::ok(vec![fixtures::request("r1", wire::RequestStatus::Pending)]),
        );
        let calls = fake.calls();
        let requests = client(fake).requests_for_offer("offer-1").await.unwrap();
        assert_eq!(requests[0].status, RequestStatus::Pending);

        let calls = calls.lock().unwrap();
        let sent: String = candid::decode_one(&calls[0].arg).unwrap();
        assert_eq!(sent, "offer-1");
    }

    #[tokio::test]
    async fn test_stats_without_data_fails() {
        let fake = FakeTransport::new().with_reply(
            "get_platform_stats",
            &ApiResponse::<wire::PlatformStats>::empty(),
        );
        let err = client(fake).platform_stats().await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch platform stats");
    }

    #[tokio::test]
    async fn test_current_user_unregistered() {
        let fake = FakeTransport::new().with_reply(
            "get_current_user",
            &ApiResponse::<Option<wire::UserProfile>>::ok(None),
        );
        assert_eq!(client(fake).current_user().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_current_user_registered() {
        let fake = FakeTransport::new().with_reply(
            "get_current_user",
            &ApiResponse::ok(Some(fixtures::profile(wire::UserRole::Farmer))),
        );
        let profile = client(fake).current_user().await.unwrap().unwrap();
        assert_eq!(profile.role, UserRole::Farmer);
    }

    #[tokio::test]
    async fn test_create_offer_is_an_update_and_keeps_rejection_text() {
        let fake = FakeTransport::new().with_reply(
            "create_agricultural_offer",
            &ApiResponse::<wire::InvestmentOffer>::failed(Some("User is not a farmer")),
        );
        let calls = fake.calls();
        let offer = NewOffer {
            product_name: "Maize".to_string(),
            product_type: harvestx_core::ProductType::Grains,
            quality_grade: harvestx_core::QualityGrade::Grade1,
            description: "Dry".to_string(),
            total_quantity: 2000,
            price_per_kg: 0.4,
            minimum_investment: 200,
            location: "Kumasi".to_string(),
            harvest_date: "2025-08-01".to_string(),
        };
        let err = client(fake).create_offer(&offer).await.unwrap_err();
        assert_eq!(
            err,
            MarketplaceError::Rejected {
                message: "User is not a farmer".to_string()
            }
        );

        let calls = calls.lock().unwrap();
        assert_eq!(calls[0].kind, CallKind::Update);
        let sent: wire::CreateOfferRequest = candid::decode_one(&calls[0].arg).unwrap();
        assert_eq!(sent.product_type, wire::ProductType::Grains);
    }

    #[tokio::test]
    async fn test_respond_to_request() {
        let fake = FakeTransport::new().with_reply(
            "respond_to_investment_request",
            &ApiResponse::ok(fixtures::request("r1", wire::RequestStatus::Accepted)),
        );
        let response = RequestResponse {
            request_id: "r1".to_string(),
            accept: true,
        };
        let updated = client(fake).respond_to_request(&response).await.unwrap();
        assert_eq!(updated.status, RequestStatus::Accepted);
    }

    #[tokio::test]
    async fn test_register_user_without_data_fails() {
        let fake = FakeTransport::new().with_reply(
            "register_user",
            &ApiResponse::<wire::UserProfile>::empty(),
        );
        let user = NewUser {
            display_name: "Kofi".to_string(),
            email: "kofi@example.org".to_string(),
            role: UserRole::Farmer,
        };
        let err = MarketplacePort::register_user(&client(fake), &user)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Failed to register user");
    }

    #[tokio::test]
    async fn test_undecodable_reply_is_invalid_response() {
        let fake = FakeTransport::new().with_raw_reply("get_platform_stats", b"DIDL".to_vec());
        let err = client(fake).platform_stats().await.unwrap_err();
        assert!(matches!(err, MarketplaceError::InvalidResponse { .. }));
    }
}
