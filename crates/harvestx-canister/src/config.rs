//! Public configuration for the canister client.

use std::path::{Path, PathBuf};

/// Replica address used by a local `dfx start`.
pub const DEFAULT_HOST: &str = "http://127.0.0.1:4943";

/// Canister id assigned to the marketplace backend on a fresh local replica.
pub const DEFAULT_CANISTER_ID: &str = "uxrrr-q7777-77774-qaaaq-cai";

/// Configuration for the canister client.
///
/// Use the builder pattern methods to customize the client configuration.
///
/// # Example
///
/// ```
/// use harvestx_canister::CanisterClientConfig;
///
/// let config = CanisterClientConfig::new()
///     .with_host("https://icp-api.io")
///     .with_canister_id("rrkah-fqaaa-aaaaa-aaaaq-cai")
///     .with_fetch_root_key(false);
/// assert_eq!(config.host(), "https://icp-api.io");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanisterClientConfig {
    /// Replica or boundary node URL
    pub(crate) host: String,
    /// Textual principal of the marketplace canister
    pub(crate) canister_id: String,
    /// Fetch the replica root key before the first call (local replicas only)
    pub(crate) fetch_root_key: bool,
    /// PEM file of an Ed25519 identity; anonymous when unset
    pub(crate) identity_pem: Option<PathBuf>,
}

impl Default for CanisterClientConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            canister_id: DEFAULT_CANISTER_ID.to_string(),
            fetch_root_key: true,
            identity_pem: None,
        }
    }
}

impl CanisterClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the replica URL.
    ///
    /// Defaults to the local replica at `http://127.0.0.1:4943`.
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the marketplace canister id.
    #[must_use]
    pub fn with_canister_id(mut self, canister_id: impl Into<String>) -> Self {
        self.canister_id = canister_id.into();
        self
    }

    /// Whether to fetch the replica root key before calling.
    ///
    /// Required against a local replica, whose key is not the mainnet key.
    /// Never enable this against mainnet.
    #[must_use]
    pub const fn with_fetch_root_key(mut self, fetch: bool) -> Self {
        self.fetch_root_key = fetch;
        self
    }

    /// Sign calls with the identity stored in a PEM file.
    #[must_use]
    pub fn with_identity_pem(mut self, path: impl Into<PathBuf>) -> Self {
        self.identity_pem = Some(path.into());
        self
    }

    /// Set an optional identity PEM file.
    #[must_use]
    pub fn with_optional_identity_pem(mut self, path: Option<PathBuf>) -> Self {
        self.identity_pem = path;
        self
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn canister_id(&self) -> &str {
        &self.canister_id
    }

    pub const fn fetch_root_key(&self) -> bool {
        self.fetch_root_key
    }

    /// Identity file, `None` for the anonymous identity.
    pub fn identity_pem(&self) -> Option<&Path> {
        self.identity_pem.as_deref()
    }
}
