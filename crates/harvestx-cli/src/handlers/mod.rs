//! Command handlers that delegate to the marketplace service.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Thin wrappers that:
//!   1. Turn CLI arguments into core forms and filters
//!   2. Call `MarketplaceService` methods
//!   3. Format output for the terminal (table or JSON)
//!
//! Handlers should NOT validate input themselves; the core forms do that.

pub mod account;
pub mod dashboard;
pub mod health;
pub mod offers;
pub mod requests;
pub mod stats;
