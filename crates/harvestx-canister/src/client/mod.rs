//! Canister client for the marketplace backend.
//!
//! This module provides the typed call layer. Each method encodes its
//! argument, sends it through the transport, decodes the reply and unwraps
//! the response envelope.

mod queries;
mod updates;

use candid::CandidType;
use candid::utils::ArgumentEncoder;
use serde::de::DeserializeOwned;

use harvestx_core::MarketplaceResult;

use crate::config::CanisterClientConfig;
use crate::error::CanisterResult;
use crate::port::map_error;
use crate::transport::{AgentTransport, CanisterTransport};

// ============================================================================
// Type Aliases
// ============================================================================

/// Default canister client using the IC HTTP agent.
pub type DefaultCanisterClient = CanisterClient<AgentTransport>;

// ============================================================================
// Client
// ============================================================================

/// Client for the marketplace canister.
///
/// This client is generic over a transport, allowing for easy testing.
/// Use `DefaultCanisterClient` for production code. The generic parameter
/// `T` is an implementation detail - external code should not instantiate
/// this directly but use `DefaultCanisterClient::new()`.
pub struct CanisterClient<T: CanisterTransport> {
    pub(crate) transport: T,
}

impl DefaultCanisterClient {
    /// Create a new client with the given configuration.
    ///
    /// Fails with a configuration error when the host, canister id or
    /// identity file is invalid. No call is made until the first request.
    pub fn new(config: &CanisterClientConfig) -> MarketplaceResult<Self> {
        let transport = AgentTransport::new(config).map_err(map_error)?;
        Ok(Self { transport })
    }
}

/// Call mode for a canister method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mode {
    Query,
    Update,
}

impl<T: CanisterTransport> CanisterClient<T> {
    /// Create a new client with a custom transport.
    ///
    /// Use this for testing with a fake transport.
    #[cfg(test)]
    pub(crate) const fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// Encode `args`, call `method` and decode a single return value.
    pub(crate) async fn call<A, R>(&self, mode: Mode, method: &str, args: A) -> CanisterResult<R>
    where
        A: ArgumentEncoder + Send,
        R: CandidType + DeserializeOwned,
    {
        let arg = candid::encode_args(args)?;
        tracing::debug!(method, ?mode, arg_bytes = arg.len(), "Calling canister");
        let reply = match mode {
            Mode::Query => self.transport.query(method, arg).await?,
            Mode::Update => self.transport.update(method, arg).await?,
        };
        Ok(candid::decode_one(&reply)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::testing::{CallKind, FakeTransport};

    #[test]
    fn test_default_client_creation() {
        let config = CanisterClientConfig::new();
        assert!(DefaultCanisterClient::new(&config).is_ok());
    }

    #[test]
    fn test_invalid_canister_id() {
        let config = CanisterClientConfig::new().with_canister_id("???");
        let err = DefaultCanisterClient::new(&config).err().unwrap();
        assert!(matches!(
            err,
            harvestx_core::MarketplaceError::Configuration { .. }
        ));
    }

    #[tokio::test]
    async fn test_call_decodes_reply() {
        let fake = FakeTransport::new().with_reply("health_check", &"OK".to_string());
        let calls = fake.calls();
        let client = CanisterClient::with_transport(fake);

        let reply: String = client.call(Mode::Query, "health_check", ()).await.unwrap();
        assert_eq!(reply, "OK");

        let calls = calls.lock().unwrap();
        assert_eq!(calls[0].kind, CallKind::Query);
        assert_eq!(calls[0].arg, candid::encode_args(()).unwrap());
    }

    #[tokio::test]
    async fn test_call_reports_undecodable_reply() {
        let fake = FakeTransport::new().with_raw_reply("health_check", vec![0, 1, 2]);
        let client = CanisterClient::with_transport(fake);

        let result: CanisterResult<String> = client.call(Mode::Query, "health_check", ()).await;
        assert!(matches!(result, Err(crate::error::CanisterError::Candid(_))));
    }
}
