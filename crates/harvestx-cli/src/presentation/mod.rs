//! Shared CLI presentation utilities.
//!
//! Renderers return strings so handlers decide where output goes.
//!
//! # Guidelines
//!
//! - Keep this module format-only: no domain transforms
//! - Domain transforms belong in core services

pub mod account_display;
pub mod offer_display;
pub mod request_display;
pub mod tables;

// Re-export commonly used items
pub use account_display::{render_health, render_profile, render_stats};
pub use offer_display::{render_offer_detail, render_offer_table};
pub use request_display::render_request_table;
pub use tables::{print_json, separator, truncate_string};
