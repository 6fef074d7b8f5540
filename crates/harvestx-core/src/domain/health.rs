//! Canister reachability as shown in the status badge.

use serde::{Deserialize, Serialize};

/// Whether the marketplace canister answered its health check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthStatus {
    Live,
    Offline,
}

impl HealthStatus {
    /// Classify a `health_check` reply.
    ///
    /// The canister answers `"OK"` or a sentence containing "healthy".
    /// Anything else counts as offline.
    pub fn from_reply(reply: &str) -> Self {
        if reply == "OK" || reply.contains("healthy") {
            Self::Live
        } else {
            Self::Offline
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Live => "Live",
            Self::Offline => "Offline",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_reply() {
        assert_eq!(HealthStatus::from_reply("OK"), HealthStatus::Live);
        assert_eq!(
            HealthStatus::from_reply("HarvestX backend is healthy"),
            HealthStatus::Live
        );
        assert_eq!(HealthStatus::from_reply("ok"), HealthStatus::Offline);
        assert_eq!(HealthStatus::from_reply(""), HealthStatus::Offline);
    }

    #[test]
    fn test_json_matches_badge_label() {
        for status in [HealthStatus::Live, HealthStatus::Offline] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.label()));
        }
    }
}
