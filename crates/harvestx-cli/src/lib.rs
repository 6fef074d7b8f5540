//! Command-line client for the HarvestX marketplace.
//!
//! The binary wires a canister client into the core marketplace service in
//! [`bootstrap`], then dispatches each subcommand to a handler that calls
//! the service and prints the result as a table or as JSON.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by the binary only
use dotenvy as _;
use tracing_subscriber as _;
use tokio as _;

// Silence unused dev-dependency warnings (used by integration tests)
#[cfg(test)]
use async_trait as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::{Commands, DashboardCommand, OffersCommand, RequestsCommand};
pub use error::CliError;
pub use parser::Cli;
