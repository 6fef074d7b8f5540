//! CLI-specific error types and mappings.
//!
//! This module provides error types for the CLI adapter and mappings
//! from `CoreError` to exit codes and user-facing messages.

use harvestx_core::{CoreError, MarketplaceError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The canister rejected the call or returned something unusable.
    #[error("{0}")]
    Core(String),

    /// The requested record does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Input failed validation before any call was made.
    #[error("{0}")]
    Validation(String),

    /// The replica could not be reached.
    #[error("{message}")]
    Unavailable {
        message: String,
        /// Looks like a root key or certificate problem
        certificate: bool,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Core(_) | CliError::NotFound(_) => 1,
            CliError::Validation(_) => 2,      // EX_USAGE
            CliError::Unavailable { .. } => 69, // EX_UNAVAILABLE
            CliError::Config(_) => 78,         // EX_CONFIG
        }
    }

    /// Follow-up advice printed under the message.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            CliError::Unavailable {
                certificate: true, ..
            } => Some(
                "Certificate verification failed. This is usually temporary - please try again. \
                 If it persists, check that the local replica is running so its root key can be fetched.",
            ),
            CliError::Unavailable { .. } | CliError::Core(_) => Some("Please try again."),
            CliError::NotFound(_) => Some("Run 'harvestx offers list' to see the available offers."),
            CliError::Validation(_) | CliError::Config(_) => None,
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(form_err) => CliError::Validation(form_err.to_string()),
            CoreError::NotFound(what) => CliError::NotFound(what),
            CoreError::Marketplace(market_err) => market_err.into(),
        }
    }
}

impl From<MarketplaceError> for CliError {
    fn from(err: MarketplaceError) -> Self {
        let certificate = err.is_certificate_error();
        match err {
            MarketplaceError::Transport { .. } => CliError::Unavailable {
                message: err.to_string(),
                certificate,
            },
            MarketplaceError::Configuration { message } => CliError::Config(message),
            MarketplaceError::Rejected { .. } | MarketplaceError::InvalidResponse { .. } => {
                CliError::Core(err.to_string())
            }
        }
    }
}

/// Find the CLI error behind an `anyhow` chain, classifying anything else as general.
pub fn classify(err: &anyhow::Error) -> (i32, Option<&'static str>) {
    err.downcast_ref::<CliError>()
        .map_or((1, None), |cli| (cli.exit_code(), cli.hint()))
}
