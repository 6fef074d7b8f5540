//! Dashboard command handlers.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::commands::DashboardCommand;
use crate::error::CliError;
use crate::presentation::{print_json, render_offer_table, render_request_table, render_stats};

/// Dispatch a `dashboard` subcommand.
pub async fn execute(ctx: &CliContext, command: DashboardCommand) -> Result<()> {
    match command {
        DashboardCommand::Farmer { offer_id } => farmer(ctx, offer_id.as_deref()).await,
        DashboardCommand::Investor => investor(ctx).await,
    }
}

pub async fn farmer(ctx: &CliContext, offer_id: Option<&str>) -> Result<()> {
    let dashboard = ctx
        .service()
        .farmer_dashboard(offer_id)
        .await
        .map_err(CliError::from)?;
    if ctx.json {
        return print_json(&dashboard);
    }

    println!(
        "My offers: {} ({} active)\n",
        dashboard.offers.len(),
        dashboard.active_offers
    );
    if !dashboard.offers.is_empty() {
        print!("{}", render_offer_table(&dashboard.offers));
    }
    println!();

    match &dashboard.selected_offer {
        None => {
            println!("Please select an offer to view its investment requests (--offer ID).");
        }
        Some(selected) => {
            println!(
                "Requests for {selected}: {} total, {} pending\n",
                dashboard.total_requests, dashboard.pending_requests
            );
            if !dashboard.requests.is_empty() {
                print!("{}", render_request_table(&dashboard.requests));
            }
        }
    }
    Ok(())
}

pub async fn investor(ctx: &CliContext) -> Result<()> {
    let dashboard = ctx
        .service()
        .investor_dashboard()
        .await
        .map_err(CliError::from)?;
    if ctx.json {
        return print_json(&dashboard);
    }

    print!("{}", render_stats(&dashboard.stats));
    println!();
    println!("Total invested:     {:.2}", dashboard.total_invested);
    println!("Active investments: {}", dashboard.active_investments);
    println!("Pending requests:   {}\n", dashboard.pending_requests);

    if dashboard.featured.is_empty() {
        println!("No active offers right now.");
    } else {
        println!("Featured offers:\n");
        print!("{}", render_offer_table(&dashboard.featured));
    }

    if !dashboard.requests.is_empty() {
        println!("\nMy investment requests:\n");
        print!("{}", render_request_table(&dashboard.requests));
    }
    Ok(())
}
