//! Typed client for the HarvestX marketplace canister.
//!
//! Calls are Candid-encoded and sent through the Internet Computer HTTP
//! agent. Every reply except `health_check` is a
//! `{ success, data, error }` envelope; the client unwraps it and maps wire
//! records to `harvestx-core` view models. External code should use
//! [`DefaultCanisterClient`] through the `MarketplacePort` trait.
//!
//! The Candid interface this client speaks is [`CANDID_INTERFACE`].

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// Allow private types in public type alias - DefaultCanisterClient is meant to be used
// through the MarketplacePort trait, not its internal generic structure
#![allow(private_interfaces)]

mod client;
mod config;
mod convert;
mod error;
mod port;
mod transport;
mod wire;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultCanisterClient;

// Configuration
pub use config::{CanisterClientConfig, DEFAULT_CANISTER_ID, DEFAULT_HOST};

/// Candid interface of the marketplace canister.
pub const CANDID_INTERFACE: &str = include_str!("../harvestx_backend.did");

