//! Marketplace service - the façade command handlers talk to.

use std::sync::Arc;

use crate::domain::{
    HealthStatus, InvestmentOffer, InvestmentRequest, PlatformStats, RequestResponse, UserProfile,
};
use crate::forms::{InvestmentForm, OfferForm, RegistrationForm};
use crate::ports::{CoreError, MarketplacePort};

use super::dashboards::{FarmerDashboard, InvestorDashboard};
use super::offer_filter::OfferFilter;

/// Service for marketplace operations.
///
/// Validates input before any call is made and shapes port results for
/// display. Every call goes straight to the canister; nothing is cached, so
/// callers re-fetch after a mutation to see the new state.
#[derive(Clone)]
pub struct MarketplaceService {
    port: Arc<dyn MarketplacePort>,
}

impl MarketplaceService {
    /// Create a new marketplace service with the given port.
    pub fn new(port: Arc<dyn MarketplacePort>) -> Self {
        Self { port }
    }

    /// Check canister reachability. Transport failures count as offline.
    pub async fn health(&self) -> HealthStatus {
        match self.port.health_check().await {
            Ok(reply) => HealthStatus::from_reply(&reply),
            Err(e) => {
                tracing::debug!(error = %e, "Health check failed");
                HealthStatus::Offline
            }
        }
    }

    /// Active offers matching `filter`.
    pub async fn browse(&self, filter: &OfferFilter) -> Result<Vec<InvestmentOffer>, CoreError> {
        let offers = self.port.available_offers().await?;
        Ok(filter.apply(offers))
    }

    /// Look up one listed offer by id.
    pub async fn offer(&self, offer_id: &str) -> Result<InvestmentOffer, CoreError> {
        self.port
            .available_offers()
            .await?
            .into_iter()
            .find(|offer| offer.id == offer_id)
            .ok_or_else(|| CoreError::NotFound(format!("offer {offer_id}")))
    }

    pub async fn farmer_offers(&self) -> Result<Vec<InvestmentOffer>, CoreError> {
        Ok(self.port.farmer_offers().await?)
    }

    pub async fn investor_requests(&self) -> Result<Vec<InvestmentRequest>, CoreError> {
        Ok(self.port.investor_requests().await?)
    }

    pub async fn requests_for_offer(
        &self,
        offer_id: &str,
    ) -> Result<Vec<InvestmentRequest>, CoreError> {
        Ok(self.port.requests_for_offer(offer_id).await?)
    }

    pub async fn platform_stats(&self) -> Result<PlatformStats, CoreError> {
        Ok(self.port.platform_stats().await?)
    }

    /// Profile of the caller, `None` if not registered.
    pub async fn current_user(&self) -> Result<Option<UserProfile>, CoreError> {
        Ok(self.port.current_user().await?)
    }

    /// Validate and submit a crop listing.
    pub async fn create_offer(&self, form: &OfferForm) -> Result<InvestmentOffer, CoreError> {
        let offer = form.validate()?;
        let created = self.port.create_offer(&offer).await?;
        tracing::info!(offer_id = %created.id, product = %created.product_name, "Offer created");
        Ok(created)
    }

    /// Validate an investment against the listed offer and submit it.
    pub async fn request_investment(
        &self,
        offer_id: &str,
        form: &InvestmentForm,
    ) -> Result<InvestmentRequest, CoreError> {
        let offer = self.offer(offer_id).await?;
        let request = form.validate(&offer)?;
        let created = self.port.create_investment_request(&request).await?;
        tracing::info!(request_id = %created.id, offer_id, "Investment request submitted");
        Ok(created)
    }

    /// Accept or reject a request on one of the caller's offers.
    pub async fn respond(
        &self,
        request_id: &str,
        accept: bool,
    ) -> Result<InvestmentRequest, CoreError> {
        let response = RequestResponse {
            request_id: request_id.to_string(),
            accept,
        };
        let updated = self.port.respond_to_request(&response).await?;
        tracing::info!(request_id, accept, status = %updated.status, "Request answered");
        Ok(updated)
    }

    pub async fn register(&self, form: &RegistrationForm) -> Result<UserProfile, CoreError> {
        let user = form.validate()?;
        Ok(self.port.register_user(&user).await?)
    }

    /// The caller's offers, plus the requests on `selected_offer` if given.
    pub async fn farmer_dashboard(
        &self,
        selected_offer: Option<&str>,
    ) -> Result<FarmerDashboard, CoreError> {
        let offers = self.port.farmer_offers().await?;
        let requests = match selected_offer {
            Some(offer_id) => self.port.requests_for_offer(offer_id).await?,
            None => Vec::new(),
        };
        Ok(FarmerDashboard::from_parts(
            offers,
            selected_offer.map(str::to_string),
            requests,
        ))
    }

    /// Platform stats, featured offers and the caller's requests.
    pub async fn investor_dashboard(&self) -> Result<InvestorDashboard, CoreError> {
        let (stats, offers, requests) = tokio::try_join!(
            self.port.platform_stats(),
            self.port.available_offers(),
            self.port.investor_requests(),
        )?;
        Ok(InvestorDashboard::from_parts(stats, offers, requests))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::offer_fixtures::offer;
    use crate::domain::request_fixtures::request;
    use crate::domain::{OfferStatus, RequestStatus, UserRole};
    use crate::forms::FormError;
    use crate::ports::{MarketplaceError, MockMarketplacePort};

    fn service(mock: MockMarketplacePort) -> MarketplaceService {
        MarketplaceService::new(Arc::new(mock))
    }

    #[tokio::test]
    async fn test_health_live() {
        let mut mock = MockMarketplacePort::new();
        mock.expect_health_check()
            .returning(|| Ok("HarvestX backend is healthy".to_string()));
        assert_eq!(service(mock).health().await, HealthStatus::Live);
    }

    #[tokio::test]
    async fn test_health_offline_on_transport_error() {
        let mut mock = MockMarketplacePort::new();
        mock.expect_health_check().returning(|| {
            Err(MarketplaceError::Transport {
                message: "connection refused".to_string(),
            })
        });
        assert_eq!(service(mock).health().await, HealthStatus::Offline);
    }

    #[tokio::test]
    async fn test_browse_applies_filter() {
        let mut mock = MockMarketplacePort::new();
        mock.expect_available_offers().returning(|| {
            Ok(vec![
                offer("a", OfferStatus::Active),
                offer("b", OfferStatus::Expired),
            ])
        });
        let shown = service(mock).browse(&OfferFilter::default()).await.unwrap();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].id, "a");
    }

    #[tokio::test]
    async fn test_rejection_message_is_propagated_unchanged() {
        let mut mock = MockMarketplacePort::new();
        mock.expect_farmer_offers().returning(|| {
            Err(MarketplaceError::Rejected {
                message: "Only farmers can list offers".to_string(),
            })
        });
        let err = service(mock).farmer_offers().await.unwrap_err();
        assert_eq!(err.to_string(), "Only farmers can list offers");
    }

    #[tokio::test]
    async fn test_create_offer_validates_before_calling() {
        let mut mock = MockMarketplacePort::new();
        mock.expect_create_offer().never();
        let err = service(mock)
            .create_offer(&OfferForm::default())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(FormError::MissingFields(_))
        ));
    }

    #[tokio::test]
    async fn test_request_investment_checks_offer() {
        let mut mock = MockMarketplacePort::new();
        mock.expect_available_offers()
            .returning(|| Ok(vec![offer("offer-1", OfferStatus::Active)]));
        mock.expect_create_investment_request()
            .withf(|req| req.offer_id == "offer-1" && req.requested_quantity == 100)
            .times(1)
            .returning(|_| Ok(request("r1", RequestStatus::Pending, 450.0)));

        let form = InvestmentForm {
            requested_quantity: "100".to_string(),
            ..InvestmentForm::default()
        };
        let created = service(mock)
            .request_investment("offer-1", &form)
            .await
            .unwrap();
        assert_eq!(created.id, "r1");
    }

    #[tokio::test]
    async fn test_request_investment_unknown_offer() {
        let mut mock = MockMarketplacePort::new();
        mock.expect_available_offers().returning(|| Ok(Vec::new()));
        mock.expect_create_investment_request().never();

        let form = InvestmentForm {
            requested_quantity: "100".to_string(),
            ..InvestmentForm::default()
        };
        let err = service(mock)
            .request_investment("missing", &form)
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_respond_passes_decision() {
        let mut mock = MockMarketplacePort::new();
        mock.expect_respond_to_request()
            .withf(|resp| resp.request_id == "r9" && !resp.accept)
            .returning(|_| Ok(request("r9", RequestStatus::Rejected, 10.0)));
        let updated = service(mock).respond("r9", false).await.unwrap();
        assert_eq!(updated.status, RequestStatus::Rejected);
    }

    #[tokio::test]
    async fn test_register_defaults_to_farmer() {
        let mut mock = MockMarketplacePort::new();
        mock.expect_register_user()
            .withf(|user| user.role == UserRole::Farmer && user.email == "kofi@example.org")
            .returning(|user| {
                Ok(UserProfile {
                    principal: "2vxsx-fae".to_string(),
                    display_name: user.display_name.clone(),
                    email: user.email.clone(),
                    role: user.role,
                    created_at: 0,
                    updated_at: 0,
                })
            });
        let form = RegistrationForm {
            display_name: "Kofi".to_string(),
            email: "kofi@example.org".to_string(),
            role: String::new(),
        };
        let profile = service(mock).register(&form).await.unwrap();
        assert_eq!(profile.display_name, "Kofi");
    }

    #[tokio::test]
    async fn test_farmer_dashboard_without_selection_skips_requests() {
        let mut mock = MockMarketplacePort::new();
        mock.expect_farmer_offers()
            .returning(|| Ok(vec![offer("a", OfferStatus::Active)]));
        mock.expect_requests_for_offer().never();
        let dashboard = service(mock).farmer_dashboard(None).await.unwrap();
        assert_eq!(dashboard.active_offers, 1);
        assert!(dashboard.requests.is_empty());
    }

    #[tokio::test]
    async fn test_farmer_dashboard_with_selection() {
        let mut mock = MockMarketplacePort::new();
        mock.expect_farmer_offers()
            .returning(|| Ok(vec![offer("a", OfferStatus::Active)]));
        mock.expect_requests_for_offer()
            .withf(|id| id == "a")
            .returning(|_| Ok(vec![request("r1", RequestStatus::Pending, 10.0)]));
        let dashboard = service(mock).farmer_dashboard(Some("a")).await.unwrap();
        assert_eq!(dashboard.pending_requests, 1);
    }

    #[tokio::test]
    async fn test_investor_dashboard_fails_when_any_part_fails() {
        let mut mock = MockMarketplacePort::new();
        mock.expect_platform_stats()
            .returning(|| Ok(PlatformStats::default()));
        mock.expect_available_offers().returning(|| Ok(Vec::new()));
        mock.expect_investor_requests().returning(|| {
            Err(MarketplaceError::Rejected {
                message: "Failed to fetch investor requests".to_string(),
            })
        });
        let err = service(mock).investor_dashboard().await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch investor requests");
    }
}
