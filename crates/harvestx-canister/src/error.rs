//! Internal error types for canister operations.
//!
//! These errors are internal to `harvestx-canister` and are mapped to core
//! port errors at the boundary.

use thiserror::Error;

/// Result type alias for canister operations.
pub type CanisterResult<T> = Result<T, CanisterError>;

/// Errors related to canister calls.
#[derive(Debug, Error)]
pub enum CanisterError {
    /// The agent failed to deliver the call or read its reply.
    #[error("Agent error: {0}")]
    Agent(#[from] ic_agent::AgentError),

    /// Candid encoding or decoding failed.
    #[error("Candid error: {0}")]
    Candid(#[from] candid::Error),

    /// The replica URL could not be parsed.
    #[error("Invalid host '{value}': {source}")]
    InvalidHost {
        /// The rejected text
        value: String,
        /// Parser error
        source: url::ParseError,
    },

    /// A configured principal could not be parsed.
    #[error("Invalid principal '{value}': {message}")]
    InvalidPrincipal {
        /// The rejected text
        value: String,
        /// Parser message
        message: String,
    },

    /// The identity file could not be loaded.
    #[error("Cannot load identity from {path}: {message}")]
    Identity {
        /// Path to the PEM file
        path: String,
        /// Loader message
        message: String,
    },

    /// The canister answered with an unsuccessful envelope.
    #[error("{message}")]
    Rejected {
        /// Envelope error text, or the operation's default message
        message: String,
    },
}
