//! Offer command handlers.
//!
//! Browsing, listing the caller's own offers and creating a listing.

use anyhow::Result;
use harvestx_core::{InvestmentOffer, OfferFilter, OfferForm, ProductType, QualityGrade};

use crate::bootstrap::CliContext;
use crate::commands::{CreateOfferArgs, OffersCommand};
use crate::error::CliError;
use crate::presentation::{print_json, render_offer_detail, render_offer_table};

/// Dispatch an `offers` subcommand.
pub async fn execute(ctx: &CliContext, command: OffersCommand) -> Result<()> {
    match command {
        OffersCommand::List {
            search,
            product_type,
            grade,
        } => {
            let chosen: for<'a> fn(Option<&'a str>) -> Option<&'a str> =
                |label| label.filter(|l| *l != "all");
            print_notes(&label_notes(
                chosen(product_type.as_deref()),
                chosen(grade.as_deref()),
            ));
            let filter = OfferFilter {
                search,
                product_type,
                quality_grade: grade,
            };
            list(ctx, &filter).await
        }
        OffersCommand::Mine => mine(ctx).await,
        OffersCommand::Show { offer_id } => show(ctx, &offer_id).await,
        OffersCommand::Create(args) => create(ctx, args).await,
    }
}

/// Notes for type and grade labels outside the fixed choices.
///
/// Labels are case-sensitive: "grains" is not `Grains` and is kept as a
/// custom type.
pub fn label_notes(product_type: Option<&str>, grade: Option<&str>) -> Vec<String> {
    let mut notes = Vec::new();
    if let Some(label) = product_type.map(str::trim).filter(|l| !l.is_empty()) {
        if !ProductType::CATEGORIES.contains(&label) {
            notes.push(format!(
                "'{label}' is not one of {}; it is treated as a custom product type.",
                ProductType::CATEGORIES.join(", ")
            ));
        }
    }
    if let Some(label) = grade.map(str::trim).filter(|l| !l.is_empty()) {
        if !QualityGrade::GRADES.contains(&label) {
            notes.push(format!(
                "'{label}' is not one of {}; it is treated as a certification.",
                QualityGrade::GRADES.join(", ")
            ));
        }
    }
    notes
}

fn print_notes(notes: &[String]) {
    for note in notes {
        eprintln!("Note: {note}");
    }
}

fn print_offers(ctx: &CliContext, offers: &[InvestmentOffer], empty_hint: &str) -> Result<()> {
    if ctx.json {
        return print_json(offers);
    }
    if offers.is_empty() {
        println!("{empty_hint}");
        return Ok(());
    }
    println!("Found {} offer(s):\n", offers.len());
    print!("{}", render_offer_table(offers));
    Ok(())
}

/// Active marketplace offers matching the filter.
pub async fn list(ctx: &CliContext, filter: &OfferFilter) -> Result<()> {
    let offers = ctx.service().browse(filter).await.map_err(CliError::from)?;
    print_offers(ctx, &offers, "No offers match your search.")
}

/// Offers listed by the calling identity.
pub async fn mine(ctx: &CliContext) -> Result<()> {
    let offers = ctx
        .service()
        .farmer_offers()
        .await
        .map_err(CliError::from)?;
    print_offers(
        ctx,
        &offers,
        "You have not listed any offers yet.\nUse 'harvestx offers create' to list your first harvest.",
    )
}

pub async fn show(ctx: &CliContext, offer_id: &str) -> Result<()> {
    let offer = ctx
        .service()
        .offer(offer_id)
        .await
        .map_err(CliError::from)?;
    if ctx.json {
        return print_json(&offer);
    }
    print!("{}", render_offer_detail(&offer));
    Ok(())
}

/// Build the listing form from arguments. Absent flags stay blank so the
/// form reports them together.
pub fn offer_form(args: CreateOfferArgs) -> OfferForm {
    OfferForm {
        product_name: args.name.unwrap_or_default(),
        product_type: args.product_type.unwrap_or_default(),
        quality_grade: args.grade.unwrap_or_default(),
        description: args.description.unwrap_or_default(),
        total_quantity: args.quantity.unwrap_or_default(),
        price_per_kg: args.price.unwrap_or_default(),
        minimum_investment: args.min_investment.unwrap_or_default(),
        location: args.location.unwrap_or_default(),
        harvest_date: args.harvest_date.unwrap_or_default(),
    }
}

/// Create a listing and print the stored record.
pub async fn create(ctx: &CliContext, args: CreateOfferArgs) -> Result<()> {
    print_notes(&label_notes(
        args.product_type.as_deref(),
        args.grade.as_deref(),
    ));
    let form = offer_form(args);
    let offer = ctx
        .service()
        .create_offer(&form)
        .await
        .map_err(CliError::from)?;
    if ctx.json {
        return print_json(&offer);
    }
    println!("Crop listing created.\n");
    print!("{}", render_offer_detail(&offer));
    Ok(())
}
