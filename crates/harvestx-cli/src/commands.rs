//! Main commands enum and subcommand groups.
//!
//! This module defines the available commands for the CLI tool.

use clap::{Args, Subcommand};

/// Available commands for the marketplace client.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check whether the marketplace canister is reachable
    Health,

    /// Show platform-wide totals
    Stats,

    /// Browse, list and create crop offers
    Offers {
        #[command(subcommand)]
        command: OffersCommand,
    },

    /// Submit, list and answer investment requests
    Requests {
        #[command(subcommand)]
        command: RequestsCommand,
    },

    /// Summaries for farmers and investors
    Dashboard {
        #[command(subcommand)]
        command: DashboardCommand,
    },

    /// Register the calling identity
    Register {
        /// Display name
        #[arg(long)]
        name: String,
        /// Contact email
        #[arg(long)]
        email: String,
        /// Role: Farmer, Investor or Admin (defaults to Farmer)
        #[arg(long)]
        role: Option<String>,
    },

    /// Show the profile of the calling identity
    Whoami,
}

/// Offer subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum OffersCommand {
    /// List active offers on the marketplace
    List {
        /// Match product name, location or farmer principal
        #[arg(short, long)]
        search: Option<String>,
        /// Product type (e.g. "Grains", "Fruits"); "all" disables the filter
        #[arg(short = 't', long = "type")]
        product_type: Option<String>,
        /// Quality grade (e.g. "Premium", "Organic"); "all" disables the filter
        #[arg(short, long)]
        grade: Option<String>,
    },

    /// List offers created by the calling identity
    Mine,

    /// Show one listed offer
    Show {
        /// Offer id
        offer_id: String,
    },

    /// Create a new crop listing
    Create(CreateOfferArgs),
}

/// Arguments for `offers create`.
///
/// Values are taken as text and validated together, so every missing or
/// malformed field is reported at once.
#[derive(Args, Debug, Clone, Default)]
pub struct CreateOfferArgs {
    /// Product name
    #[arg(long)]
    pub name: Option<String>,
    /// Product type (Grains, Vegetables, Fruits, Legumes, Nuts, Herbs or any other text)
    #[arg(long = "type")]
    pub product_type: Option<String>,
    /// Quality grade (Premium, Grade1, Grade2, Standard, Organic or a certification)
    #[arg(long)]
    pub grade: Option<String>,
    /// Description of the harvest
    #[arg(long)]
    pub description: Option<String>,
    /// Total quantity in kg
    #[arg(long)]
    pub quantity: Option<String>,
    /// Price per kg
    #[arg(long)]
    pub price: Option<String>,
    /// Minimum investment
    #[arg(long = "min-investment")]
    pub min_investment: Option<String>,
    /// Farm location
    #[arg(long)]
    pub location: Option<String>,
    /// Expected harvest date
    #[arg(long = "harvest-date")]
    pub harvest_date: Option<String>,
}

/// Investment request subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum RequestsCommand {
    /// List requests submitted by the calling identity
    Mine,

    /// List requests submitted against one offer
    ForOffer {
        /// Offer id
        offer_id: String,
    },

    /// Request to invest in an offer
    Create {
        /// Offer id
        offer_id: String,
        /// Quantity in kg
        #[arg(long)]
        quantity: String,
        /// Offered price per kg (defaults to the listed price)
        #[arg(long)]
        price: Option<String>,
        /// Message to the farmer
        #[arg(long)]
        message: Option<String>,
    },

    /// Accept or reject a request on one of your offers
    Respond {
        /// Request id
        request_id: String,
        /// Accept the request
        #[arg(long, conflicts_with = "reject", required_unless_present = "reject")]
        accept: bool,
        /// Reject the request
        #[arg(long)]
        reject: bool,
    },
}

/// Dashboard subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum DashboardCommand {
    /// Your offers and the requests on one of them
    Farmer {
        /// Offer whose requests to list
        #[arg(long = "offer")]
        offer_id: Option<String>,
    },

    /// Platform stats, featured offers and your requests
    Investor,
}
