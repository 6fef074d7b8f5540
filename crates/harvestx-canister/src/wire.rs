//! Candid wire records.
//!
//! These mirror `harvestx_backend.did` field for field. They never leave this
//! crate; `convert` maps them to core view models.

use candid::{CandidType, Principal};
use harvestx_core::normalize::{error_message_or, unwrap_double_opt, unwrap_opt};
use serde::Deserialize;

use crate::error::{CanisterError, CanisterResult};

// ============================================================================
// Variants
// ============================================================================

#[derive(CandidType, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum ProductType {
    Nuts,
    Grains,
    Legumes,
    Herbs,
    Vegetables,
    Other(String),
    Fruits,
}

#[derive(CandidType, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum QualityGrade {
    Premium,
    Grade1,
    Grade2,
    Certified(String),
    Standard,
    Organic,
}

#[derive(CandidType, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfferStatus {
    Active,
    Cancelled,
    Completed,
    Expired,
}

#[derive(CandidType, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    Farmer,
    Guest,
    Admin,
    Investor,
}

#[derive(CandidType, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestStatus {
    Rejected,
    Accepted,
    Cancelled,
    Expired,
    Pending,
}

#[derive(CandidType, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionStatus {
    Tokenized,
    Confirmed,
    Completed,
}

// ============================================================================
// Records
// ============================================================================

#[derive(CandidType, Deserialize, Debug, Clone, PartialEq)]
pub struct InvestmentOffer {
    pub id: String,
    pub status: OfferStatus,
    pub updated_at: u64,
    pub total_quantity: u64,
    pub minimum_investment: u64,
    pub description: String,
    pub created_at: u64,
    pub quality_grade: QualityGrade,
    pub product_name: String,
    pub product_type: ProductType,
    pub available_quantity: u64,
    pub price_per_kg: f64,
    pub location: String,
    pub farmer: Principal,
    pub harvest_date: String,
}

#[derive(CandidType, Deserialize, Debug, Clone, PartialEq)]
pub struct InvestmentRequest {
    pub id: String,
    pub status: RequestStatus,
    pub updated_at: u64,
    pub total_offered: f64,
    pub created_at: u64,
    pub offer_id: String,
    pub message: String,
    pub offered_price_per_kg: f64,
    pub requested_quantity: u64,
    pub expires_at: u64,
    pub investor: Principal,
}

#[derive(CandidType, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub updated_at: u64,
    pub principal: Principal,
    pub role: UserRole,
    pub created_at: u64,
    pub email: String,
    pub display_name: String,
}

#[derive(CandidType, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformStats {
    pub total_requests: u64,
    pub total_users: u64,
    pub total_transactions: u64,
    pub total_offers: u64,
    pub active_offers: u64,
}

// Settlement records are part of the interface but no query returns them yet.
#[allow(dead_code)]
#[derive(CandidType, Deserialize, Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: String,
    pub request_id: String,
    pub status: TransactionStatus,
    pub updated_at: u64,
    pub tokenized_at: Option<u64>,
    pub total_amount: f64,
    pub created_at: u64,
    pub offer_id: String,
    pub quantity: u64,
    pub price_per_kg: f64,
    pub farmer: Principal,
    pub investor: Principal,
}

// ============================================================================
// Call arguments
// ============================================================================

#[derive(CandidType, Deserialize, Debug, Clone, PartialEq)]
pub struct CreateOfferRequest {
    pub total_quantity: u64,
    pub minimum_investment: u64,
    pub description: String,
    pub quality_grade: QualityGrade,
    pub product_name: String,
    pub product_type: ProductType,
    pub price_per_kg: f64,
    pub location: String,
    pub harvest_date: String,
}

#[derive(CandidType, Deserialize, Debug, Clone, PartialEq)]
pub struct CreateInvestmentRequest {
    pub offer_id: String,
    pub message: String,
    pub offered_price_per_kg: f64,
    pub requested_quantity: u64,
}

#[derive(CandidType, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RespondToRequestRequest {
    pub request_id: String,
    pub accept: bool,
}

#[derive(CandidType, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RegisterUserRequest {
    pub role: UserRole,
    pub email: String,
    pub display_name: String,
}

// ============================================================================
// Response envelope
// ============================================================================

/// `record { success : bool; data : opt T; error : opt text }`
#[derive(CandidType, Deserialize, Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub data: Option<T>,
    pub error: Option<String>,
    pub success: bool,
}

pub type OfferResponse = ApiResponse<InvestmentOffer>;
pub type OfferListResponse = ApiResponse<Vec<InvestmentOffer>>;
pub type RequestResponse = ApiResponse<InvestmentRequest>;
pub type RequestListResponse = ApiResponse<Vec<InvestmentRequest>>;
pub type StatsResponse = ApiResponse<PlatformStats>;
pub type CurrentUserResponse = ApiResponse<Option<UserProfile>>;
pub type ProfileResponse = ApiResponse<UserProfile>;

impl<T> ApiResponse<T> {
    fn rejection(error: Option<String>, fallback: &str) -> CanisterError {
        CanisterError::Rejected {
            message: error_message_or(error, fallback),
        }
    }

    /// Unwrap an envelope whose value must be present.
    ///
    /// A successful envelope without data is treated as a failure.
    pub fn into_required(self, fallback: &str) -> CanisterResult<T> {
        let Self {
            data,
            error,
            success,
        } = self;
        if success {
            if let Some(value) = unwrap_opt(data) {
                return Ok(value);
            }
        }
        Err(Self::rejection(error, fallback))
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// Unwrap a list envelope. A successful envelope without data is an empty list.
    pub fn into_list(self, fallback: &str) -> CanisterResult<Vec<T>> {
        if self.success {
            Ok(unwrap_opt(self.data).unwrap_or_default())
        } else {
            Err(Self::rejection(self.error, fallback))
        }
    }
}

impl<T> ApiResponse<Option<T>> {
    /// Unwrap an `opt opt T` envelope. Either empty layer yields `None`.
    pub fn into_optional(self, fallback: &str) -> CanisterResult<Option<T>> {
        if self.success {
            Ok(unwrap_double_opt(self.data))
        } else {
            Err(Self::rejection(self.error, fallback))
        }
    }
}

#[cfg(test)]
impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
            success: true,
        }
    }

    pub fn empty() -> Self {
        Self {
            data: None,
            error: None,
            success: true,
        }
    }

    pub fn failed(error: Option<&str>) -> Self {
        Self {
            data: None,
            error: error.map(str::to_string),
            success: false,
        }
    }
}
