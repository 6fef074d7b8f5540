//! Canister timestamp helpers.
//!
//! The canister stamps records with nanoseconds since the Unix epoch.

use chrono::{DateTime, Utc};

/// Convert a nanosecond timestamp to a UTC date-time.
///
/// Precision is truncated to milliseconds. Out-of-range values map to the epoch.
pub fn timestamp_to_datetime(nanos: u64) -> DateTime<Utc> {
    i64::try_from(nanos / 1_000_000)
        .ok()
        .and_then(DateTime::from_timestamp_millis)
        .unwrap_or_default()
}

/// Format a nanosecond timestamp as a calendar date (`YYYY-MM-DD`).
pub fn format_date(nanos: u64) -> String {
    timestamp_to_datetime(nanos).format("%Y-%m-%d").to_string()
}
