//! Health badge, platform stats and profile views.

use std::fmt::Write;

use chrono::{DateTime, Utc};
use harvestx_core::{HealthStatus, PlatformStats, UserProfile};

/// Status badge line.
pub fn render_health(status: HealthStatus) -> String {
    format!("Canister status: {}", status.label())
}

pub fn render_stats(stats: &PlatformStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Platform statistics");
    let _ = writeln!(out, "  Users:         {}", stats.total_users);
    let _ = writeln!(
        out,
        "  Offers:        {} ({} active)",
        stats.total_offers, stats.active_offers
    );
    let _ = writeln!(out, "  Requests:      {}", stats.total_requests);
    let _ = writeln!(out, "  Transactions:  {}", stats.total_transactions);
    out
}

fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M UTC").to_string()
}

pub fn render_profile(profile: &UserProfile) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} <{}>", profile.display_name, profile.email);
    let _ = writeln!(out, "  Role:         {}", profile.role);
    let _ = writeln!(out, "  Principal:    {}", profile.principal);
    let _ = writeln!(
        out,
        "  Member since: {}",
        format_timestamp(profile.member_since())
    );
    out
}
