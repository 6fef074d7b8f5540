//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.

pub mod marketplace;

use thiserror::Error;

use crate::forms::FormError;

pub use marketplace::{MarketplaceError, MarketplacePort, MarketplaceResult};

#[cfg(test)]
pub use marketplace::MockMarketplacePort;

/// Core error type for semantic domain errors.
///
/// This is the canonical error type used across the core domain.
/// Adapters map it to their own error types (CLI exit codes and hints).
#[derive(Debug, Error)]
pub enum CoreError {
    /// The marketplace canister call failed.
    #[error(transparent)]
    Marketplace(#[from] MarketplaceError),

    /// User input failed validation before any call was made.
    #[error(transparent)]
    Validation(#[from] FormError),

    /// A referenced record does not exist.
    #[error("Not found: {0}")]
    NotFound(String),
}
