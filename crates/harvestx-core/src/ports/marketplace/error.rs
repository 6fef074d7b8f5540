//! Error types for marketplace port operations.

use thiserror::Error;

/// Errors from marketplace port operations.
///
/// Every failure is either a transport problem or a domain failure that the
/// canister reported as text. The canister's text is carried verbatim so it
/// can be shown to the user unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarketplaceError {
    /// The canister could not be reached or the call was rejected in transit.
    #[error("Network error: {message}")]
    Transport {
        /// Description of the transport failure
        message: String,
    },

    /// The canister answered with `success = false`.
    #[error("{message}")]
    Rejected {
        /// Error text from the response envelope, or the operation's default
        message: String,
    },

    /// The reply could not be decoded.
    #[error("Invalid canister response: {message}")]
    InvalidResponse {
        /// What was invalid
        message: String,
    },

    /// Client configuration error (bad canister id, unreadable identity).
    #[error("Configuration error: {message}")]
    Configuration {
        /// What's wrong with the configuration
        message: String,
    },
}

impl MarketplaceError {
    /// The bare message without the category prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Transport { message }
            | Self::Rejected { message }
            | Self::InvalidResponse { message }
            | Self::Configuration { message } => message,
        }
    }

    /// Whether the failure looks like a missing or mismatched replica root key.
    ///
    /// Local replicas sign responses with a key the agent must fetch first;
    /// when that fetch fails, calls surface certificate or signature errors.
    pub fn is_certificate_error(&self) -> bool {
        let message = self.message().to_lowercase();
        ["certificate", "signature", "verification"]
            .iter()
            .any(|needle| message.contains(needle))
    }
}

/// Result type alias for marketplace port operations.
pub type MarketplaceResult<T> = Result<T, MarketplaceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_displays_message_verbatim() {
        let err = MarketplaceError::Rejected {
            message: "Offer is no longer active".to_string(),
        };
        assert_eq!(err.to_string(), "Offer is no longer active");
    }

    #[test]
    fn test_error_display() {
        let err = MarketplaceError::Transport {
            message: "connection refused".to_string(),
        };
        assert_eq!(err.to_string(), "Network error: connection refused");
        assert_eq!(err.message(), "connection refused");
    }

    #[test]
    fn test_is_certificate_error() {
        let err = MarketplaceError::Transport {
            message: "Certificate verification failed".to_string(),
        };
        assert!(err.is_certificate_error());

        let err = MarketplaceError::Transport {
            message: "Invalid signature".to_string(),
        };
        assert!(err.is_certificate_error());

        let err = MarketplaceError::Rejected {
            message: "User not registered".to_string(),
        };
        assert!(!err.is_certificate_error());
    }
}
