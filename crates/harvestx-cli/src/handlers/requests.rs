//! Investment request command handlers.

use anyhow::Result;
use harvestx_core::{InvestmentForm, InvestmentRequest};

use crate::bootstrap::CliContext;
use crate::commands::RequestsCommand;
use crate::error::CliError;
use crate::presentation::{print_json, render_request_table};

/// Dispatch a `requests` subcommand.
pub async fn execute(ctx: &CliContext, command: RequestsCommand) -> Result<()> {
    match command {
        RequestsCommand::Mine => {
            let requests = ctx
                .service()
                .investor_requests()
                .await
                .map_err(CliError::from)?;
            print_requests(ctx, &requests, "You have not submitted any requests yet.")
        }
        RequestsCommand::ForOffer { offer_id } => {
            let requests = ctx
                .service()
                .requests_for_offer(&offer_id)
                .await
                .map_err(CliError::from)?;
            print_requests(ctx, &requests, "No investment requests for this offer yet.")
        }
        RequestsCommand::Create {
            offer_id,
            quantity,
            price,
            message,
        } => {
            let form = InvestmentForm {
                requested_quantity: quantity,
                offered_price_per_kg: price.unwrap_or_default(),
                message: message.unwrap_or_default(),
            };
            create(ctx, &offer_id, &form).await
        }
        RequestsCommand::Respond {
            request_id, accept, ..
        } => respond(ctx, &request_id, accept).await,
    }
}

fn print_requests(
    ctx: &CliContext,
    requests: &[InvestmentRequest],
    empty_hint: &str,
) -> Result<()> {
    if ctx.json {
        return print_json(requests);
    }
    if requests.is_empty() {
        println!("{empty_hint}");
        return Ok(());
    }
    print!("{}", render_request_table(requests));
    Ok(())
}

pub async fn create(ctx: &CliContext, offer_id: &str, form: &InvestmentForm) -> Result<()> {
    let request = ctx
        .service()
        .request_investment(offer_id, form)
        .await
        .map_err(CliError::from)?;
    if ctx.json {
        return print_json(&request);
    }
    println!("Investment request submitted successfully!\n");
    print!("{}", render_request_table(std::slice::from_ref(&request)));
    Ok(())
}

pub async fn respond(ctx: &CliContext, request_id: &str, accept: bool) -> Result<()> {
    let request = ctx
        .service()
        .respond(request_id, accept)
        .await
        .map_err(CliError::from)?;
    if ctx.json {
        return print_json(&request);
    }
    let verb = if accept { "accepted" } else { "rejected" };
    println!("Request {verb} successfully\n");
    print!("{}", render_request_table(std::slice::from_ref(&request)));
    Ok(())
}
