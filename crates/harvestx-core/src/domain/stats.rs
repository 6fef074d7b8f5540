use serde::{Deserialize, Serialize};

/// Aggregate platform counters reported by the canister.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformStats {
    pub total_users: u64,
    pub total_offers: u64,
    pub active_offers: u64,
    pub total_requests: u64,
    pub total_transactions: u64,
}
