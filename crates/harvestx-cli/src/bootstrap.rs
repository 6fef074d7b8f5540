//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter: the canister client is built from configuration and
//! handed to the core marketplace service as its port.

use std::sync::Arc;

use harvestx_canister::{CanisterClientConfig, DefaultCanisterClient};
use harvestx_core::{MarketplacePort, MarketplaceService};

use crate::error::CliError;
use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Canister client settings.
    pub canister: CanisterClientConfig,
    /// Print JSON instead of tables.
    pub json: bool,
}

impl CliConfig {
    /// Resolve configuration from parsed arguments.
    ///
    /// Flags and environment variables were already merged by clap; anything
    /// left unset keeps the local replica defaults.
    pub fn from_cli(cli: &Cli) -> Self {
        let mut canister = CanisterClientConfig::new()
            .with_optional_identity_pem(cli.identity.clone())
            .with_fetch_root_key(!cli.no_fetch_root_key && cli.fetch_root_key.unwrap_or(true));
        if let Some(host) = &cli.host {
            canister = canister.with_host(host.as_str());
        }
        if let Some(canister_id) = &cli.canister_id {
            canister = canister.with_canister_id(canister_id.as_str());
        }
        Self {
            canister,
            json: cli.json,
        }
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// The core marketplace facade.
    pub service: MarketplaceService,
    /// Print JSON instead of tables.
    pub json: bool,
}

impl CliContext {
    /// Access the marketplace service.
    pub fn service(&self) -> &MarketplaceService {
        &self.service
    }
}

/// Bootstrap the CLI application.
///
/// Builds the canister client (no network traffic yet) and the service on
/// top of it. Fails with a configuration error for an unusable host,
/// canister id or identity file.
pub fn bootstrap(config: CliConfig) -> Result<CliContext, CliError> {
    let client = DefaultCanisterClient::new(&config.canister)
        .map_err(|e| CliError::Config(e.message().to_string()))?;
    tracing::debug!(
        host = config.canister.host(),
        canister_id = config.canister.canister_id(),
        "Marketplace client ready"
    );
    let port: Arc<dyn MarketplacePort> = Arc::new(client);
    Ok(bootstrap_with(port, config.json))
}

/// Bootstrap with a custom port (for testing).
pub fn bootstrap_with(port: Arc<dyn MarketplacePort>, json: bool) -> CliContext {
    CliContext {
        service: MarketplaceService::new(port),
        json,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults_without_flags() {
        let cli = Cli::parse_from(["harvestx", "health"]);
        let config = CliConfig::from_cli(&cli);
        if std::env::var_os("HARVESTX_HOST").is_none() {
            assert_eq!(config.canister.host(), harvestx_canister::DEFAULT_HOST);
        }
        assert!(!config.json);
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::parse_from([
            "harvestx",
            "--host",
            "https://icp-api.io",
            "--canister-id",
            "rrkah-fqaaa-aaaaa-aaaaq-cai",
            "--no-fetch-root-key",
            "--json",
            "stats",
        ]);
        let config = CliConfig::from_cli(&cli);
        assert_eq!(config.canister.host(), "https://icp-api.io");
        assert_eq!(config.canister.canister_id(), "rrkah-fqaaa-aaaaa-aaaaq-cai");
        assert!(!config.canister.fetch_root_key());
        assert!(config.json);
    }

    #[test]
    fn test_no_fetch_flag_wins() {
        let cli = Cli::parse_from([
            "harvestx",
            "--fetch-root-key",
            "true",
            "--no-fetch-root-key",
            "stats",
        ]);
        assert!(!CliConfig::from_cli(&cli).canister.fetch_root_key());
    }

    #[test]
    fn test_bootstrap_rejects_bad_canister_id() {
        let cli = Cli::parse_from(["harvestx", "--canister-id", "nope", "stats"]);
        let err = bootstrap(CliConfig::from_cli(&cli)).err().unwrap();
        assert!(matches!(err, CliError::Config(_)));
        assert_eq!(err.exit_code(), 78);
    }

    #[test]
    fn test_bootstrap_with_defaults() {
        let cli = Cli::parse_from([
            "harvestx",
            "--host",
            harvestx_canister::DEFAULT_HOST,
            "--canister-id",
            harvestx_canister::DEFAULT_CANISTER_ID,
            "stats",
        ]);
        let ctx = bootstrap(CliConfig::from_cli(&cli)).unwrap();
        assert!(!ctx.json);
    }
}
