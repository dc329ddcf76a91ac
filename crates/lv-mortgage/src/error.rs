//! Mortgage calculation errors.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MortgageError {
    #[error("Unknown bank: {0}")]
    UnknownBank(String),

    #[error("Unknown region: {0}")]
    UnknownRegion(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Loan amount {loan:.2} exceeds {bank} limit of €{max:.0}")]
    LoanExceedsLimit { bank: String, loan: f64, max: f64 },

    #[error("{bank} requires a down payment of at least {min_pct}%")]
    DownPaymentTooLow { bank: String, min_pct: f64 },

    #[error("{bank} loan term cannot exceed {max_years} years")]
    TermTooLong { bank: String, max_years: u32 },
}

pub type MortgageResult<T> = Result<T, MortgageError>;
