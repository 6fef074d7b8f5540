use serde::{Deserialize, Serialize};

use super::variants::TransactionStatus;

/// Settlement record created by the canister when a request is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub offer_id: String,
    pub request_id: String,
    pub farmer: String,
    pub investor: String,
    /// Kilograms
    pub quantity: u64,
    pub price_per_kg: f64,
    pub total_amount: f64,
    pub status: TransactionStatus,
    pub created_at: u64,
    pub updated_at: u64,
    /// Set once the harvest share has been minted as tokens.
    pub tokenized_at: Option<u64>,
}

impl Transaction {
    #[must_use]
    pub const fn is_tokenized(&self) -> bool {
        self.tokenized_at.is_some()
    }
}
