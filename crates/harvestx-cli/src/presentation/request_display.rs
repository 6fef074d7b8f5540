//! Investment request tables.

use std::fmt::Write;

use harvestx_core::{InvestmentRequest, format_date};

use super::tables::{separator, truncate_string};

/// Requests as a fixed-width table.
pub fn render_request_table(requests: &[InvestmentRequest]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<14} {:<14} {:>8} {:>9} {:>11} {:<10} {:<10} {:<10} Message",
        "ID", "Offer", "Qty kg", "Price/kg", "Total", "Status", "Submitted", "Expires"
    );
    let _ = writeln!(out, "{}", separator(110));
    for request in requests {
        let _ = writeln!(
            out,
            "{:<14} {:<14} {:>8} {:>9.2} {:>11.2} {:<10} {:<10} {:<10} {}",
            truncate_string(&request.id, 14),
            truncate_string(&request.offer_id, 14),
            request.requested_quantity,
            request.offered_price_per_kg,
            request.total_offered,
            request.status,
            format_date(request.created_at),
            format_date(request.expires_at),
            truncate_string(&request.message, 30),
        );
    }
    out
}
