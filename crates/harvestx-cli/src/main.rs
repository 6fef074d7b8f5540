//! CLI entry point - the composition root.
//!
//! Configuration is resolved from flags, the environment and `.env`, the
//! marketplace client is wired in `bootstrap`, and each command is dispatched
//! to its handler. Failures print the canister's message and exit with a
//! code derived from the error category.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use harvestx_cli::error::classify;
use harvestx_cli::{Cli, CliConfig, Commands, bootstrap, handlers};

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "error" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = CliConfig::from_cli(&cli);

    // No command provided - show help
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let ctx = bootstrap(config)?;

    match command {
        Commands::Health => handlers::health::execute(&ctx).await,
        Commands::Stats => handlers::stats::execute(&ctx).await,
        Commands::Offers { command } => handlers::offers::execute(&ctx, command).await,
        Commands::Requests { command } => handlers::requests::execute(&ctx, command).await,
        Commands::Dashboard { command } => handlers::dashboard::execute(&ctx, command).await,
        Commands::Register { name, email, role } => {
            handlers::account::register(&ctx, name, email, role).await
        }
        Commands::Whoami => handlers::account::whoami(&ctx).await,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables before clap reads them
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let (code, hint) = classify(&err);
            eprintln!("Error: {err}");
            if let Some(hint) = hint {
                eprintln!("{hint}");
            }
            tracing::debug!(error = ?err, "Command failed");
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}
