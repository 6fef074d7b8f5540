use serde::{Deserialize, Serialize};

use super::time::timestamp_to_datetime;
use super::variants::UserRole;
use chrono::{DateTime, Utc};

/// A registered account, keyed by its principal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Principal in its textual form.
    pub principal: String,
    pub display_name: String,
    pub email: String,
    pub role: UserRole,
    /// Nanoseconds since epoch
    pub created_at: u64,
    /// Nanoseconds since epoch
    pub updated_at: u64,
}

impl UserProfile {
    /// When the account was registered.
    pub fn member_since(&self) -> DateTime<Utc> {
        timestamp_to_datetime(self.created_at)
    }
}

/// Registration payload for `register_user`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub display_name: String,
    pub email: String,
    pub role: UserRole,
}
