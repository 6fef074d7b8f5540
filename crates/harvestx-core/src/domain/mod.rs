//! Domain view models.
//!
//! These are the types the rest of the client works with. They carry no
//! wire details: principals are plain text and variant tags are Rust enums.
//! Lifecycle transitions are owned by the canister; these types only
//! describe the state it reports.

mod health;
mod offer;
mod request;
mod stats;
mod time;
mod transaction;
mod user;
mod variants;

pub use health::HealthStatus;
pub use offer::{InvestmentOffer, NewOffer};
pub use request::{InvestmentRequest, NewInvestmentRequest, RequestResponse};
pub use stats::PlatformStats;
pub use time::{format_date, timestamp_to_datetime};
pub use transaction::Transaction;
pub use user::{NewUser, UserProfile};
pub use variants::{
    OfferStatus, ProductType, QualityGrade, RequestStatus, TransactionStatus, UnknownVariant,
    UserRole,
};

#[cfg(test)]
pub(crate) use offer::fixtures as offer_fixtures;
#[cfg(test)]
pub(crate) use request::fixtures as request_fixtures;
