//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options. Every
//! connection option can also come from the environment (or a `.env` file).

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for the HarvestX marketplace.
///
/// Farmers list harvests and answer investment requests; investors browse
/// listings and submit requests. All state lives in the marketplace canister.
#[derive(Parser, Debug)]
#[command(name = "harvestx")]
#[command(about = "Pre-finance agricultural harvests on the HarvestX marketplace")]
#[command(version)]
pub struct Cli {
    /// Replica URL
    #[arg(long, global = true, env = "HARVESTX_HOST")]
    pub host: Option<String>,

    /// Marketplace canister id
    #[arg(long = "canister-id", global = true, env = "HARVESTX_CANISTER_ID")]
    pub canister_id: Option<String>,

    /// PEM file of the identity that signs calls (anonymous when omitted)
    #[arg(long, global = true, env = "HARVESTX_IDENTITY")]
    pub identity: Option<PathBuf>,

    /// Whether to fetch the replica root key (local replicas only)
    #[arg(
        long = "fetch-root-key",
        global = true,
        env = "HARVESTX_FETCH_ROOT_KEY",
        value_name = "BOOL",
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub fetch_root_key: Option<bool>,

    /// Do not fetch the replica root key (use against mainnet)
    #[arg(long = "no-fetch-root-key", global = true)]
    pub no_fetch_root_key: bool,

    /// Print records as JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
