//! Latvian banks and their lending terms.

use serde::{Deserialize, Serialize};

use crate::error::{MortgageError, MortgageResult};

/// Loan product whose rate is looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanProduct {
    Mortgage,
    Consumer,
    Business,
}

/// Annual nominal rates in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterestRates {
    pub mortgage: f64,
    pub consumer: f64,
    pub business: f64,
}

impl InterestRates {
    pub fn rate(&self, product: LoanProduct) -> f64 {
        match product {
            LoanProduct::Mortgage => self.mortgage,
            LoanProduct::Consumer => self.consumer,
            LoanProduct::Business => self.business,
        }
    }
}

/// A lender and its limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bank {
    pub id: String,
    pub name: String,
    pub interest_rates: InterestRates,
    /// Largest loan in EUR
    pub max_loan_amount: f64,
    /// Smallest down payment, percent of price
    pub min_down_payment: f64,
    pub max_loan_term_years: u32,
    /// One-time fee, percent of the loan
    pub processing_fee: f64,
}

/// The configured set of banks, in presentation order.
#[derive(Debug, Clone, PartialEq)]
pub struct BankRegistry {
    banks: Vec<Bank>,
}

fn bank(
    id: &str,
    name: &str,
    rates: (f64, f64, f64),
    max_loan_amount: f64,
    min_down_payment: f64,
    max_loan_term_years: u32,
    processing_fee: f64,
) -> Bank {
    Bank {
        id: id.into(),
        name: name.into(),
        interest_rates: InterestRates {
            mortgage: rates.0,
            consumer: rates.1,
            business: rates.2,
        },
        max_loan_amount,
        min_down_payment,
        max_loan_term_years,
        processing_fee,
    }
}

impl BankRegistry {
    pub fn new(banks: Vec<Bank>) -> Self {
        Self { banks }
    }

    /// The five major Latvian lenders.
    pub fn latvian() -> Self {
        Self::new(vec![
            bank("swedbank", "Swedbank", (4.2, 8.5, 5.8), 500_000.0, 15.0, 30, 0.5),
            bank("seb", "SEB Banka", (4.1, 8.3, 5.6), 600_000.0, 15.0, 30, 0.4),
            bank("luminor", "Luminor Bank", (4.3, 8.7, 6.0), 450_000.0, 20.0, 25, 0.6),
            bank("citadele", "Citadele Banka", (4.5, 9.0, 6.2), 400_000.0, 20.0, 30, 0.7),
            bank("rietumu", "Rietumu Banka", (4.8, 9.5, 6.8), 350_000.0, 25.0, 25, 0.8),
        ])
    }

    pub fn all(&self) -> &[Bank] {
        &self.banks
    }

    pub fn get(&self, id: &str) -> Option<&Bank> {
        self.banks.iter().find(|b| b.id == id)
    }

    pub(crate) fn require(&self, id: &str) -> MortgageResult<&Bank> {
        self.get(id)
            .ok_or_else(|| MortgageError::UnknownBank(id.to_string()))
    }
}

impl Default for BankRegistry {
    fn default() -> Self {
        Self::latvian()
    }
}
