//! Marketplace canister port definitions.
//!
//! This module defines the port trait and error type for talking to the
//! marketplace backend. The actual implementation lives in `harvestx-canister`.

mod client;
mod error;

pub use client::MarketplacePort;
pub use error::{MarketplaceError, MarketplaceResult};

#[cfg(test)]
pub use client::MockMarketplacePort;
