//! Presence and range validation for user input.
//!
//! Forms hold raw text as entered. `validate` turns them into the typed
//! payloads the port accepts. These checks are the only invariants enforced
//! on the client; everything else is decided by the canister.

use thiserror::Error;

use crate::domain::{
    InvestmentOffer, NewInvestmentRequest, NewOffer, NewUser, ProductType, QualityGrade, UserRole,
};

/// Input validation failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    /// One or more required fields were left blank.
    #[error("Please fill in all required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// A field could not be parsed or is out of range.
    #[error("Invalid {field}: {reason}")]
    InvalidField {
        field: &'static str,
        reason: String,
    },

    /// The investment total does not reach the offer's minimum.
    #[error("Minimum investment is {minimum} kg worth (offered total {total:.2})")]
    BelowMinimum { minimum: u64, total: f64 },

    /// More kilograms were requested than the offer has left.
    #[error("Requested quantity {requested} kg exceeds the {available} kg available")]
    ExceedsAvailable { requested: u64, available: u64 },
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn parse_whole(field: &'static str, value: &str) -> Result<u64, FormError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| FormError::InvalidField {
            field,
            reason: format!("'{}' is not a whole number", value.trim()),
        })
}

fn parse_price(field: &'static str, value: &str) -> Result<f64, FormError> {
    let price = value
        .trim()
        .parse::<f64>()
        .map_err(|_| FormError::InvalidField {
            field,
            reason: format!("'{}' is not a number", value.trim()),
        })?;
    if !price.is_finite() || price <= 0.0 {
        return Err(FormError::InvalidField {
            field,
            reason: "must be greater than zero".to_string(),
        });
    }
    Ok(price)
}

// ============================================================================
// Offer listing
// ============================================================================

/// Crop listing form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OfferForm {
    pub product_name: String,
    pub product_type: String,
    pub quality_grade: String,
    pub description: String,
    pub total_quantity: String,
    pub price_per_kg: String,
    pub minimum_investment: String,
    pub location: String,
    pub harvest_date: String,
}

impl OfferForm {
    /// Check presence of every field, then parse the numeric ones.
    pub fn validate(&self) -> Result<NewOffer, FormError> {
        let fields = [
            ("product_name", &self.product_name),
            ("product_type", &self.product_type),
            ("quality_grade", &self.quality_grade),
            ("description", &self.description),
            ("total_quantity", &self.total_quantity),
            ("price_per_kg", &self.price_per_kg),
            ("minimum_investment", &self.minimum_investment),
            ("location", &self.location),
            ("harvest_date", &self.harvest_date),
        ];
        let missing: Vec<&'static str> = fields
            .iter()
            .filter(|(_, value)| is_blank(value))
            .map(|(name, _)| *name)
            .collect();
        if !missing.is_empty() {
            return Err(FormError::MissingFields(missing));
        }

        let total_quantity = parse_whole("total_quantity", &self.total_quantity)?;
        if total_quantity == 0 {
            return Err(FormError::InvalidField {
                field: "total_quantity",
                reason: "must be at least 1 kg".to_string(),
            });
        }

        Ok(NewOffer {
            product_name: self.product_name.trim().to_string(),
            product_type: ProductType::from_label(self.product_type.trim()),
            quality_grade: QualityGrade::from_label(self.quality_grade.trim()),
            description: self.description.trim().to_string(),
            total_quantity,
            price_per_kg: parse_price("price_per_kg", &self.price_per_kg)?,
            minimum_investment: parse_whole("minimum_investment", &self.minimum_investment)?,
            location: self.location.trim().to_string(),
            harvest_date: self.harvest_date.trim().to_string(),
        })
    }
}

// ============================================================================
// Investment request
// ============================================================================

/// Investment request form, filled in against a specific offer.
///
/// A blank price means "accept the listing price".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvestmentForm {
    pub requested_quantity: String,
    pub offered_price_per_kg: String,
    pub message: String,
}

impl InvestmentForm {
    pub fn validate(&self, offer: &InvestmentOffer) -> Result<NewInvestmentRequest, FormError> {
        if is_blank(&self.requested_quantity) {
            return Err(FormError::MissingFields(vec!["requested_quantity"]));
        }
        let requested_quantity = parse_whole("requested_quantity", &self.requested_quantity)?;
        if requested_quantity == 0 {
            return Err(FormError::InvalidField {
                field: "requested_quantity",
                reason: "must be at least 1 kg".to_string(),
            });
        }
        if requested_quantity > offer.available_quantity {
            return Err(FormError::ExceedsAvailable {
                requested: requested_quantity,
                available: offer.available_quantity,
            });
        }

        let offered_price_per_kg = if is_blank(&self.offered_price_per_kg) {
            offer.price_per_kg
        } else {
            parse_price("offered_price_per_kg", &self.offered_price_per_kg)?
        };

        #[allow(clippy::cast_precision_loss)] // kilogram counts stay far below 2^52
        let (total, minimum) = (
            requested_quantity as f64 * offered_price_per_kg,
            offer.minimum_investment as f64,
        );
        if total < minimum {
            return Err(FormError::BelowMinimum {
                minimum: offer.minimum_investment,
                total,
            });
        }

        Ok(NewInvestmentRequest {
            offer_id: offer.id.clone(),
            message: self.message.trim().to_string(),
            offered_price_per_kg,
            requested_quantity,
        })
    }
}

// ============================================================================
// Registration
// ============================================================================

/// Account registration form. A blank role registers a farmer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub display_name: String,
    pub email: String,
    pub role: String,
}

impl RegistrationForm {
    pub fn validate(&self) -> Result<NewUser, FormError> {
        let missing: Vec<&'static str> = [
            ("display_name", &self.display_name),
            ("email", &self.email),
        ]
        .iter()
        .filter(|(_, value)| is_blank(value))
        .map(|(name, _)| *name)
        .collect();
        if !missing.is_empty() {
            return Err(FormError::MissingFields(missing));
        }

        let email = self.email.trim();
        if !email.contains('@') {
            return Err(FormError::InvalidField {
                field: "email",
                reason: format!("'{email}' is not an email address"),
            });
        }

        let role = if is_blank(&self.role) {
            UserRole::default()
        } else {
            UserRole::from_label(self.role.trim())
        };

        Ok(NewUser {
            display_name: self.display_name.trim().to_string(),
            email: email.to_string(),
            role,
        })
    }
}
