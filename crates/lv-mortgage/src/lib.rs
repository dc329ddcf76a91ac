//! Mortgage and affordability calculator for the Latvian housing market.
//!
//! # Modules
//!
//! - [`bank`]: Bank table with rates and lending limits
//! - [`calculator`]: Annuity mortgage, bank comparison, affordability
//! - [`region`]: Regional price data and market snapshot

pub mod bank;
pub mod calculator;
pub mod error;
pub mod region;

// Re-export commonly used types
pub use bank::{Bank, BankRegistry, InterestRates, LoanProduct};
pub use calculator::{
    annuity_payment, calculate_affordability, Affordability, MortgageCalculation,
};
pub use error::{MortgageError, MortgageResult};
pub use region::{market_trends, MarketTrends, Region, RegionRegistry};
