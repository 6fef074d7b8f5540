//! Offer tables and detail views.

use std::fmt::Write;

use harvestx_core::{InvestmentOffer, format_date};

use super::tables::{separator, truncate_string};

/// Offers as a fixed-width table.
pub fn render_offer_table(offers: &[InvestmentOffer]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<14} {:<22} {:<12} {:<10} {:>10} {:>9} {:>9} {:<18} {:<10}",
        "ID", "Product", "Type", "Grade", "Avail kg", "Price/kg", "Min", "Location", "Status"
    );
    let _ = writeln!(out, "{}", separator(122));
    for offer in offers {
        let _ = writeln!(
            out,
            "{:<14} {:<22} {:<12} {:<10} {:>10} {:>9.2} {:>9} {:<18} {:<10}",
            truncate_string(&offer.id, 14),
            truncate_string(&offer.product_name, 22),
            truncate_string(offer.product_type.label(), 12),
            truncate_string(offer.quality_grade.label(), 10),
            offer.available_quantity,
            offer.price_per_kg,
            offer.minimum_investment,
            truncate_string(&offer.location, 18),
            offer.status,
        );
    }
    out
}

/// One offer with every field.
pub fn render_offer_detail(offer: &InvestmentOffer) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", offer.product_name, offer.id);
    let _ = writeln!(out, "  Farmer:             {}", offer.farmer);
    let _ = writeln!(out, "  Type:               {}", offer.product_type);
    let _ = writeln!(out, "  Quality grade:      {}", offer.quality_grade);
    let _ = writeln!(
        out,
        "  Quantity:           {} of {} kg available",
        offer.available_quantity, offer.total_quantity
    );
    let _ = writeln!(out, "  Price per kg:       {:.2}", offer.price_per_kg);
    let _ = writeln!(out, "  Minimum investment: {}", offer.minimum_investment);
    let _ = writeln!(out, "  Location:           {}", offer.location);
    let _ = writeln!(out, "  Harvest date:       {}", offer.harvest_date);
    let _ = writeln!(out, "  Status:             {}", offer.status);
    let _ = writeln!(out, "  Listed:             {}", format_date(offer.created_at));
    if !offer.description.is_empty() {
        let _ = writeln!(out, "  {}", offer.description);
    }
    out
}
