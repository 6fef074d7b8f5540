//! Call transport for the marketplace canister.
//!
//! The client only needs "send these Candid bytes to this method and give me
//! the reply bytes". The production transport is the IC HTTP agent; tests
//! swap in a fake that serves canned replies.

use async_trait::async_trait;
use candid::Principal;
use ic_agent::Agent;
use ic_agent::identity::BasicIdentity;
use tokio::sync::OnceCell;
use url::Url;

use crate::config::CanisterClientConfig;
use crate::error::{CanisterError, CanisterResult};

// ============================================================================
// Transport Trait
// ============================================================================

/// Sends encoded calls to one canister.
///
/// This is an implementation detail - external code should use the
/// `MarketplacePort` trait.
#[async_trait]
pub trait CanisterTransport: Send + Sync {
    /// Read-only call, answered by a single replica.
    async fn query(&self, method: &str, arg: Vec<u8>) -> CanisterResult<Vec<u8>>;

    /// State-changing call, waits until the replicas agree on the reply.
    async fn update(&self, method: &str, arg: Vec<u8>) -> CanisterResult<Vec<u8>>;
}

/// Parse the configured canister id.
pub fn parse_canister_id(value: &str) -> CanisterResult<Principal> {
    Principal::from_text(value).map_err(|e| CanisterError::InvalidPrincipal {
        value: value.to_string(),
        message: e.to_string(),
    })
}

// ============================================================================
// Agent Transport
// ============================================================================

/// Production transport over the IC HTTP agent.
///
/// When root key fetching is enabled the key is fetched lazily before the
/// first call. A failed fetch is logged and the call proceeds anyway; the
/// fetch is attempted again on the next call.
pub struct AgentTransport {
    agent: Agent,
    canister_id: Principal,
    fetch_root_key: bool,
    root_key: OnceCell<()>,
}

impl AgentTransport {
    /// Build the agent from configuration. No network traffic happens here.
    pub fn new(config: &CanisterClientConfig) -> CanisterResult<Self> {
        let host = Url::parse(&config.host).map_err(|source| CanisterError::InvalidHost {
            value: config.host.clone(),
            source,
        })?;
        let canister_id = parse_canister_id(&config.canister_id)?;

        let builder = Agent::builder().with_url(host.as_str());
        let agent = match &config.identity_pem {
            Some(path) => {
                let identity =
                    BasicIdentity::from_pem_file(path).map_err(|e| CanisterError::Identity {
                        path: path.display().to_string(),
                        message: e.to_string(),
                    })?;
                builder.with_identity(identity).build()?
            }
            None => builder.build()?,
        };

        tracing::debug!(
            host = %host,
            canister_id = %canister_id,
            identity = ?config.identity_pem,
            "Canister agent configured"
        );

        Ok(Self {
            agent,
            canister_id,
            fetch_root_key: config.fetch_root_key,
            root_key: OnceCell::new(),
        })
    }

    async fn ensure_root_key(&self) {
        if !self.fetch_root_key {
            return;
        }
        let fetched = self
            .root_key
            .get_or_try_init(|| self.agent.fetch_root_key())
            .await;
        if let Err(e) = fetched {
            tracing::warn!(
                error = %e,
                "Unable to fetch root key. Check that the local replica is running"
            );
        }
    }
}

#[async_trait]
impl CanisterTransport for AgentTransport {
    async fn query(&self, method: &str, arg: Vec<u8>) -> CanisterResult<Vec<u8>> {
        self.ensure_root_key().await;
        let reply = self
            .agent
            .query(&self.canister_id, method)
            .with_arg(arg)
            .call()
            .await?;
        Ok(reply)
    }

    async fn update(&self, method: &str, arg: Vec<u8>) -> CanisterResult<Vec<u8>> {
        self.ensure_root_key().await;
        let reply = self
            .agent
            .update(&self.canister_id, method)
            .with_arg(arg)
            .call_and_wait()
            .await?;
        Ok(reply)
    }
}

// ============================================================================
// Fake Transport for Testing
// ============================================================================
