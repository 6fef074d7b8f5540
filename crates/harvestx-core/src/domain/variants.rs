//! Tagged enumerations and their display labels.
//!
//! Every enumeration has exactly one tag per value. Two tags carry free text:
//! [`ProductType::Other`] and [`QualityGrade::Certified`]. Their label is the
//! payload itself rather than the tag name.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A label did not name any tag of a closed enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {kind} '{value}'")]
pub struct UnknownVariant {
    /// Enumeration being parsed (e.g. "offer status").
    pub kind: &'static str,
    /// The rejected label.
    pub value: String,
}

impl UnknownVariant {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

// ============================================================================
// Product type
// ============================================================================

/// Crop category of an offer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductType {
    Grains,
    Vegetables,
    Fruits,
    Legumes,
    Nuts,
    Herbs,
    /// Any crop outside the fixed categories, named by the farmer.
    Other(String),
}

impl ProductType {
    /// Fixed category labels. Any other label is kept as `Other`.
    pub const CATEGORIES: [&'static str; 6] =
        ["Grains", "Vegetables", "Fruits", "Legumes", "Nuts", "Herbs"];

    /// Display label. `Other` yields its payload.
    pub fn label(&self) -> &str {
        match self {
            Self::Grains => "Grains",
            Self::Vegetables => "Vegetables",
            Self::Fruits => "Fruits",
            Self::Legumes => "Legumes",
            Self::Nuts => "Nuts",
            Self::Herbs => "Herbs",
            Self::Other(name) => name,
        }
    }

    /// Parse a label. Unrecognized text becomes `Other(text)`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Grains" => Self::Grains,
            "Vegetables" => Self::Vegetables,
            "Fruits" => Self::Fruits,
            "Legumes" => Self::Legumes,
            "Nuts" => Self::Nuts,
            "Herbs" => Self::Herbs,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

// ============================================================================
// Quality grade
// ============================================================================

/// Quality grade of an offer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QualityGrade {
    Premium,
    Grade1,
    Grade2,
    Standard,
    Organic,
    /// Certified produce, carrying the certification name.
    Certified(String),
}

impl QualityGrade {
    /// Fixed grade labels. Any other label is kept as `Certified`.
    pub const GRADES: [&'static str; 5] = ["Premium", "Grade1", "Grade2", "Standard", "Organic"];

    /// Display label. `Certified` yields its payload.
    pub fn label(&self) -> &str {
        match self {
            Self::Premium => "Premium",
            Self::Grade1 => "Grade1",
            Self::Grade2 => "Grade2",
            Self::Standard => "Standard",
            Self::Organic => "Organic",
            Self::Certified(name) => name,
        }
    }

    /// Parse a label. Unrecognized text becomes `Certified(text)`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Premium" => Self::Premium,
            "Grade1" => Self::Grade1,
            "Grade2" => Self::Grade2,
            "Standard" => Self::Standard,
            "Organic" => Self::Organic,
            other => Self::Certified(other.to_string()),
        }
    }
}

impl fmt::Display for QualityGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

// ============================================================================
// User role
// ============================================================================

/// Role of a registered account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum UserRole {
    #[default]
    Farmer,
    Investor,
    Admin,
    Guest,
}

impl UserRole {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Farmer => "Farmer",
            Self::Investor => "Investor",
            Self::Admin => "Admin",
            Self::Guest => "Guest",
        }
    }

    /// Parse a label. Unrecognized text becomes `Guest`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Farmer" => Self::Farmer,
            "Investor" => Self::Investor,
            "Admin" => Self::Admin,
            _ => Self::Guest,
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

// ============================================================================
// Statuses
// ============================================================================

/// Lifecycle status of an offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OfferStatus {
    Active,
    Completed,
    Cancelled,
    Expired,
}

impl OfferStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
            Self::Expired => "Expired",
        }
    }
}

impl fmt::Display for OfferStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for OfferStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(Self::Active),
            "Completed" => Ok(Self::Completed),
            "Cancelled" => Ok(Self::Cancelled),
            "Expired" => Ok(Self::Expired),
            other => Err(UnknownVariant::new("offer status", other)),
        }
    }
}

/// Status of an investment request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestStatus {
    Pending,
    Accepted,
    Rejected,
    Cancelled,
    Expired,
}

impl RequestStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Accepted => "Accepted",
            Self::Rejected => "Rejected",
            Self::Cancelled => "Cancelled",
            Self::Expired => "Expired",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for RequestStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Self::Pending),
            "Accepted" => Ok(Self::Accepted),
            "Rejected" => Ok(Self::Rejected),
            "Cancelled" => Ok(Self::Cancelled),
            "Expired" => Ok(Self::Expired),
            other => Err(UnknownVariant::new("request status", other)),
        }
    }
}

/// Settlement status of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionStatus {
    Confirmed,
    Tokenized,
    Completed,
}

impl TransactionStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Confirmed => "Confirmed",
            Self::Tokenized => "Tokenized",
            Self::Completed => "Completed",
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for TransactionStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Confirmed" => Ok(Self::Confirmed),
            "Tokenized" => Ok(Self::Tokenized),
            "Completed" => Ok(Self::Completed),
            other => Err(UnknownVariant::new("transaction status", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_type_labels() {
        for label in ProductType::CATEGORIES {
            assert_eq!(ProductType::from_label(label).label(), label);
        }
        assert_eq!(ProductType::Other("Quinoa".to_string()).label(), "Quinoa");
        assert_eq!(
            ProductType::from_label("Quinoa"),
            ProductType::Other("Quinoa".to_string())
        );
    }

    #[test]
    fn test_quality_grade_labels() {
        for label in QualityGrade::GRADES {
            assert_eq!(QualityGrade::from_label(label).label(), label);
        }
        let certified = QualityGrade::from_label("Fair Trade");
        assert_eq!(certified, QualityGrade::Certified("Fair Trade".to_string()));
        assert_eq!(certified.to_string(), "Fair Trade");
    }

    #[test]
    fn test_user_role_falls_back_to_guest() {
        assert_eq!(UserRole::from_label("Farmer"), UserRole::Farmer);
        assert_eq!(UserRole::from_label("Investor"), UserRole::Investor);
        assert_eq!(UserRole::from_label("Admin"), UserRole::Admin);
        assert_eq!(UserRole::from_label("farmer"), UserRole::Guest);
        assert_eq!(UserRole::from_label(""), UserRole::Guest);
    }

    #[test]
    fn test_status_labels_round_trip_through_from_str() {
        for status in [
            OfferStatus::Active,
            OfferStatus::Completed,
            OfferStatus::Cancelled,
            OfferStatus::Expired,
        ] {
            assert_eq!(status.label().parse::<OfferStatus>(), Ok(status));
        }
        assert_eq!(RequestStatus::Pending.to_string(), "Pending");
        assert_eq!(TransactionStatus::Tokenized.to_string(), "Tokenized");
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let err = "Paused".parse::<OfferStatus>().unwrap_err();
        assert_eq!(err.kind, "offer status");
        assert_eq!(err.to_string(), "Unknown offer status 'Paused'");
        assert!("pending".parse::<RequestStatus>().is_err());
    }

    #[test]
    fn test_serialization_keeps_tag_shape() {
        let json = serde_json::to_string(&ProductType::Other("Quinoa".to_string())).unwrap();
        assert_eq!(json, r#"{"Other":"Quinoa"}"#);
        let json = serde_json::to_string(&OfferStatus::Active).unwrap();
        assert_eq!(json, r#""Active""#);
    }
}
