//! Core domain types, ports and services for the HarvestX marketplace client.
//!
//! The remote canister owns every business rule (offer lifecycle, custody,
//! token issuance). This crate only describes what the client sees:
//!
//! - [`domain`]: view models for offers, investment requests, profiles and stats
//! - [`normalize`]: unwrapping of wire-level optionals and error text
//! - [`forms`]: presence and range validation for user input
//! - [`ports`]: the [`MarketplacePort`] trait implemented by `harvestx-canister`
//! - [`services`]: marketplace browsing and dashboard aggregation on top of the port

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod forms;
pub mod normalize;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    HealthStatus, InvestmentOffer, InvestmentRequest, NewInvestmentRequest, NewOffer, NewUser,
    OfferStatus, PlatformStats, ProductType, QualityGrade, RequestResponse, RequestStatus,
    Transaction, TransactionStatus, UnknownVariant, UserProfile, UserRole, format_date,
    timestamp_to_datetime,
};
pub use forms::{FormError, InvestmentForm, OfferForm, RegistrationForm};
pub use normalize::{error_message_or, unwrap_double_opt, unwrap_opt};
pub use ports::{CoreError, MarketplaceError, MarketplacePort, MarketplaceResult};
pub use services::{FarmerDashboard, InvestorDashboard, MarketplaceService, OfferFilter};
