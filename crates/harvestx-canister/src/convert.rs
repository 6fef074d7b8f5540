//! Conversions between Candid wire records and core view models.
//!
//! Principals become their textual form; tagged variants map one to one.

use harvestx_core::{
    InvestmentOffer, InvestmentRequest, NewInvestmentRequest, NewOffer, NewUser, OfferStatus,
    PlatformStats, ProductType, QualityGrade, RequestResponse, RequestStatus, Transaction,
    TransactionStatus, UserProfile, UserRole,
};

use crate::wire;

// ============================================================================
// Variants
// ============================================================================

fn to_product_type(value: wire::ProductType) -> ProductType {
    match value {
        wire::ProductType::Grains => ProductType::Grains,
        wire::ProductType::Vegetables => ProductType::Vegetables,
        wire::ProductType::Fruits => ProductType::Fruits,
        wire::ProductType::Legumes => ProductType::Legumes,
        wire::ProductType::Nuts => ProductType::Nuts,
        wire::ProductType::Herbs => ProductType::Herbs,
        wire::ProductType::Other(text) => ProductType::Other(text),
    }
}

fn from_product_type(value: &ProductType) -> wire::ProductType {
    match value {
        ProductType::Grains => wire::ProductType::Grains,
        ProductType::Vegetables => wire::ProductType::Vegetables,
        ProductType::Fruits => wire::ProductType::Fruits,
        ProductType::Legumes => wire::ProductType::Legumes,
        ProductType::Nuts => wire::ProductType::Nuts,
        ProductType::Herbs => wire::ProductType::Herbs,
        ProductType::Other(text) => wire::ProductType::Other(text.clone()),
    }
}

fn to_quality_grade(value: wire::QualityGrade) -> QualityGrade {
    match value {
        wire::QualityGrade::Premium => QualityGrade::Premium,
        wire::QualityGrade::Grade1 => QualityGrade::Grade1,
        wire::QualityGrade::Grade2 => QualityGrade::Grade2,
        wire::QualityGrade::Standard => QualityGrade::Standard,
        wire::QualityGrade::Organic => QualityGrade::Organic,
        wire::QualityGrade::Certified(text) => QualityGrade::Certified(text),
    }
}

fn from_quality_grade(value: &QualityGrade) -> wire::QualityGrade {
    match value {
        QualityGrade::Premium => wire::QualityGrade::Premium,
        QualityGrade::Grade1 => wire::QualityGrade::Grade1,
        QualityGrade::Grade2 => wire::QualityGrade::Grade2,
        QualityGrade::Standard => wire::QualityGrade::Standard,
        QualityGrade::Organic => wire::QualityGrade::Organic,
        QualityGrade::Certified(text) => wire::QualityGrade::Certified(text.clone()),
    }
}

const fn to_role(value: wire::UserRole) -> UserRole {
    match value {
        wire::UserRole::Farmer => UserRole::Farmer,
        wire::UserRole::Investor => UserRole::Investor,
        wire::UserRole::Admin => UserRole::Admin,
        wire::UserRole::Guest => UserRole::Guest,
    }
}

const fn from_role(value: UserRole) -> wire::UserRole {
    match value {
        UserRole::Farmer => wire::UserRole::Farmer,
        UserRole::Investor => wire::UserRole::Investor,
        UserRole::Admin => wire::UserRole::Admin,
        UserRole::Guest => wire::UserRole::Guest,
    }
}

const fn to_offer_status(value: wire::OfferStatus) -> OfferStatus {
    match value {
        wire::OfferStatus::Active => OfferStatus::Active,
        wire::OfferStatus::Completed => OfferStatus::Completed,
        wire::OfferStatus::Cancelled => OfferStatus::Cancelled,
        wire::OfferStatus::Expired => OfferStatus::Expired,
    }
}

const fn to_request_status(value: wire::RequestStatus) -> RequestStatus {
    match value {
        wire::RequestStatus::Pending => RequestStatus::Pending,
        wire::RequestStatus::Accepted => RequestStatus::Accepted,
        wire::RequestStatus::Rejected => RequestStatus::Rejected,
        wire::RequestStatus::Cancelled => RequestStatus::Cancelled,
        wire::RequestStatus::Expired => RequestStatus::Expired,
    }
}

const fn to_transaction_status(value: wire::TransactionStatus) -> TransactionStatus {
    match value {
        wire::TransactionStatus::Confirmed => TransactionStatus::Confirmed,
        wire::TransactionStatus::Tokenized => TransactionStatus::Tokenized,
        wire::TransactionStatus::Completed => TransactionStatus::Completed,
    }
}

// ============================================================================
// Records
// ============================================================================

pub fn to_offer(offer: wire::InvestmentOffer) -> InvestmentOffer {
    InvestmentOffer {
        id: offer.id,
        farmer: offer.farmer.to_text(),
        product_name: offer.product_name,
        product_type: to_product_type(offer.product_type),
        quality_grade: to_quality_grade(offer.quality_grade),
        description: offer.description,
        total_quantity: offer.total_quantity,
        available_quantity: offer.available_quantity,
        price_per_kg: offer.price_per_kg,
        minimum_investment: offer.minimum_investment,
        location: offer.location,
        harvest_date: offer.harvest_date,
        status: to_offer_status(offer.status),
        created_at: offer.created_at,
        updated_at: offer.updated_at,
    }
}

pub fn to_request(request: wire::InvestmentRequest) -> InvestmentRequest {
    InvestmentRequest {
        id: request.id,
        offer_id: request.offer_id,
        investor: request.investor.to_text(),
        requested_quantity: request.requested_quantity,
        offered_price_per_kg: request.offered_price_per_kg,
        total_offered: request.total_offered,
        message: request.message,
        status: to_request_status(request.status),
        created_at: request.created_at,
        updated_at: request.updated_at,
        expires_at: request.expires_at,
    }
}

pub fn to_profile(profile: wire::UserProfile) -> UserProfile {
    UserProfile {
        principal: profile.principal.to_text(),
        display_name: profile.display_name,
        email: profile.email,
        role: to_role(profile.role),
        created_at: profile.created_at,
        updated_at: profile.updated_at,
    }
}

pub const fn to_stats(stats: wire::PlatformStats) -> PlatformStats {
    PlatformStats {
        total_users: stats.total_users,
        total_offers: stats.total_offers,
        active_offers: stats.active_offers,
        total_requests: stats.total_requests,
        total_transactions: stats.total_transactions,
    }
}

// Settlement records have no query yet; kept so the mapping is ready when one lands.
#[allow(dead_code)]
pub fn to_transaction(tx: wire::Transaction) -> Transaction {
    Transaction {
        id: tx.id,
        offer_id: tx.offer_id,
        request_id: tx.request_id,
        farmer: tx.farmer.to_text(),
        investor: tx.investor.to_text(),
        quantity: tx.quantity,
        price_per_kg: tx.price_per_kg,
        total_amount: tx.total_amount,
        status: to_transaction_status(tx.status),
        created_at: tx.created_at,
        updated_at: tx.updated_at,
        tokenized_at: tx.tokenized_at,
    }
}

// ============================================================================
// Call arguments
// ============================================================================

pub fn from_new_offer(offer: &NewOffer) -> wire::CreateOfferRequest {
    wire::CreateOfferRequest {
        total_quantity: offer.total_quantity,
        minimum_investment: offer.minimum_investment,
        description: offer.description.clone(),
        quality_grade: from_quality_grade(&offer.quality_grade),
        product_name: offer.product_name.clone(),
        product_type: from_product_type(&offer.product_type),
        price_per_kg: offer.price_per_kg,
        location: offer.location.clone(),
        harvest_date: offer.harvest_date.clone(),
    }
}

pub fn from_new_request(request: &NewInvestmentRequest) -> wire::CreateInvestmentRequest {
    wire::CreateInvestmentRequest {
        offer_id: request.offer_id.clone(),
        message: request.message.clone(),
        offered_price_per_kg: request.offered_price_per_kg,
        requested_quantity: request.requested_quantity,
    }
}

pub fn from_response(response: &RequestResponse) -> wire::RespondToRequestRequest {
    wire::RespondToRequestRequest {
        request_id: response.request_id.clone(),
        accept: response.accept,
    }
}

pub fn from_new_user(user: &NewUser) -> wire::RegisterUserRequest {
    wire::RegisterUserRequest {
        role: from_role(user.role),
        email: user.email.clone(),
        display_name: user.display_name.clone(),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_offer_keeps_payload_variants() {
        let offer = to_offer(fixtures::offer("offer-1"));
        assert_eq!(offer.farmer, "2vxsx-fae");
        assert_eq!(offer.product_type.label(), "Coffee");
        assert_eq!(offer.quality_grade.label(), "Fairtrade");
        assert_eq!(offer.status, OfferStatus::Active);
        assert_eq!(offer.available_quantity, 800);
    }

    #[test]
    fn test_to_request_status() {
        let request = to_request(fixtures::request("r1", wire::RequestStatus::Accepted));
        assert_eq!(request.status, RequestStatus::Accepted);
        assert_eq!(request.investor, candid::Principal::anonymous().to_text());
        assert!(request.is_accepted());
    }

    #[test]
    fn test_to_profile() {
        let profile = to_profile(fixtures::profile(wire::UserRole::Investor));
        assert_eq!(profile.role, UserRole::Investor);
        assert_eq!(profile.principal, "2vxsx-fae");
        assert_eq!(profile.display_name, "Amara");
    }

    #[test]
    fn test_to_transaction() {
        let tx = to_transaction(wire::Transaction {
            id: "tx-1".to_string(),
            request_id: "r1".to_string(),
            status: wire::TransactionStatus::Tokenized,
            updated_at: 0,
            tokenized_at: Some(42),
            total_amount: 450.0,
            created_at: 0,
            offer_id: "offer-1".to_string(),
            quantity: 100,
            price_per_kg: 4.5,
            farmer: fixtures::farmer(),
            investor: candid::Principal::anonymous(),
        });
        assert_eq!(tx.status, TransactionStatus::Tokenized);
        assert!(tx.is_tokenized());
    }

    #[test]
    fn test_from_new_offer() {
        let offer = NewOffer {
            product_name: "Cashews".to_string(),
            product_type: ProductType::Nuts,
            quality_grade: QualityGrade::Certified("Organic EU".to_string()),
            description: "Raw".to_string(),
            total_quantity: 300,
            price_per_kg: 7.0,
            minimum_investment: 50,
            location: "Tamale".to_string(),
            harvest_date: "2025-03-01".to_string(),
        };
        let arg = from_new_offer(&offer);
        assert_eq!(arg.product_type, wire::ProductType::Nuts);
        assert_eq!(
            arg.quality_grade,
            wire::QualityGrade::Certified("Organic EU".to_string())
        );
        assert_eq!(arg.total_quantity, 300);
    }

    #[test]
    fn test_from_new_user() {
        let arg = from_new_user(&NewUser {
            display_name: "Kofi".to_string(),
            email: "kofi@example.org".to_string(),
            role: UserRole::Admin,
        });
        assert_eq!(arg.role, wire::UserRole::Admin);
        assert_eq!(arg.display_name, "Kofi");
    }
}
