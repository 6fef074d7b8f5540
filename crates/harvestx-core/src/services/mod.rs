//! Core services.
//!
//! Services combine port calls with the client-side rules that shape what a
//! user sees: marketplace filtering and dashboard aggregates.

mod dashboards;
mod marketplace_service;
mod offer_filter;

pub use dashboards::{FarmerDashboard, InvestorDashboard};
pub use marketplace_service::MarketplaceService;
pub use offer_filter::OfferFilter;
