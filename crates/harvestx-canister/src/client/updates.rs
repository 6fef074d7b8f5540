//! State-changing canister methods.
//!
//! These go through consensus, so they are noticeably slower than queries.

use crate::error::CanisterResult;
use crate::transport::CanisterTransport;
use crate::wire::{
    CreateInvestmentRequest, CreateOfferRequest, InvestmentOffer, InvestmentRequest,
    OfferResponse, ProfileResponse, RegisterUserRequest, RequestResponse,
    RespondToRequestRequest, UserProfile,
};

use super::{CanisterClient, Mode};

impl<T: CanisterTransport> CanisterClient<T> {
    pub(crate) async fn create_agricultural_offer(
        &self,
        request: &CreateOfferRequest,
    ) -> CanisterResult<InvestmentOffer> {
        let response: OfferResponse = self
            .call(Mode::Update, "create_agricultural_offer", (request,))
            .await?;
        response.into_required("Failed to create offer")
    }

    pub(crate) async fn submit_investment_request(
        &self,
        request: &CreateInvestmentRequest,
    ) -> CanisterResult<InvestmentRequest> {
        let response: RequestResponse = self
            .call(Mode::Update, "create_investment_request", (request,))
            .await?;
        response.into_required("Failed to create investment request")
    }

    pub(crate) async fn respond_to_investment_request(
        &self,
        request: &RespondToRequestRequest,
    ) -> CanisterResult<InvestmentRequest> {
        let response: RequestResponse = self
            .call(Mode::Update, "respond_to_investment_request", (request,))
            .await?;
        response.into_required("Failed to respond to investment request")
    }

    pub(crate) async fn register(
        &self,
        request: &RegisterUserRequest,
    ) -> CanisterResult<UserProfile> {
        let response: ProfileResponse =
            self.call(Mode::Update, "register_user", (request,)).await?;
        response.into_required("Failed to register user")
    }
}
