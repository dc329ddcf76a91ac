//! Fixed-rate annuity mortgage math.

use serde::{Deserialize, Serialize};

use crate::bank::{Bank, BankRegistry, LoanProduct};
use crate::error::{MortgageError, MortgageResult};

/// Largest share of income that may go to debt service.
pub const MAX_DEBT_TO_INCOME: f64 = 0.4;

/// Reference annual rate (percent) for affordability estimates.
pub const REFERENCE_RATE: f64 = 4.3;

/// Reference term for affordability estimates.
pub const REFERENCE_TERM_YEARS: u32 = 25;

/// Loan share of the price assumed when recommending a price (20% down).
pub const REFERENCE_LOAN_TO_VALUE: f64 = 0.8;

/// One bank's offer for a given price, down payment and term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MortgageCalculation {
    pub bank_id: String,
    pub bank_name: String,
    pub loan_amount: f64,
    /// Annuity payment without the fee
    pub base_monthly_payment: f64,
    /// Annuity payment plus the fee spread evenly over all payments
    pub monthly_payment: f64,
    /// Sum of all payments plus the fee
    pub total_amount: f64,
    /// Interest plus fee
    pub total_interest: f64,
    pub processing_fee: f64,
    pub down_payment: f64,
    /// Percent
    pub loan_to_value: f64,
    pub term_years: u32,
    /// Annual rate in percent
    pub interest_rate: f64,
}

/// Income-based borrowing limits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Affordability {
    pub max_monthly_payment: f64,
    pub max_loan_amount: f64,
    pub recommended_price: f64,
    /// Percent of income including existing debts
    pub debt_to_income_ratio: f64,
}

/// Monthly payment of a fixed-rate annuity loan.
///
/// `annual_rate` is in percent. A zero rate repays the principal evenly.
pub fn annuity_payment(principal: f64, annual_rate: f64, payments: u32) -> f64 {
    let n = f64::from(payments);
    let r = annual_rate / 100.0 / 12.0;
    if r == 0.0 {
        return principal / n;
    }
    let growth = (1.0 + r).powf(n);
    principal * (r * growth) / (growth - 1.0)
}

/// Principal that a monthly payment can service; inverse of [`annuity_payment`].
pub fn annuity_principal(payment: f64, annual_rate: f64, payments: u32) -> f64 {
    let n = f64::from(payments);
    let r = annual_rate / 100.0 / 12.0;
    if r == 0.0 {
        return payment * n;
    }
    let growth = (1.0 + r).powf(n);
    payment * (growth - 1.0) / (r * growth)
}

fn validate(price: f64, down_payment_pct: f64, term_years: u32) -> MortgageResult<()> {
    if !price.is_finite() || price <= 0.0 {
        return Err(MortgageError::InvalidInput(format!(
            "property price must be positive, got {}",
            price
        )));
    }
    if !(0.0..=100.0).contains(&down_payment_pct) {
        return Err(MortgageError::InvalidInput(format!(
            "down payment must be between 0 and 100 percent, got {}",
            down_payment_pct
        )));
    }
    if term_years == 0 {
        return Err(MortgageError::InvalidInput(
            "loan term must be at least one year".into(),
        ));
    }
    Ok(())
}

/// Offer from one bank, after checking its limits.
///
/// Checks run in order: inputs, loan above the bank maximum, down payment
/// below the bank minimum, term above the bank maximum.
pub fn calculate_for_bank(
    bank: &Bank,
    price: f64,
    down_payment_pct: f64,
    term_years: u32,
) -> MortgageResult<MortgageCalculation> {
    validate(price, down_payment_pct, term_years)?;

    let down_payment = price * down_payment_pct / 100.0;
    let loan_amount = price - down_payment;

    if loan_amount > bank.max_loan_amount {
        return Err(MortgageError::LoanExceedsLimit {
            bank: bank.name.clone(),
            loan: loan_amount,
            max: bank.max_loan_amount,
        });
    }
    if down_payment_pct < bank.min_down_payment {
        return Err(MortgageError::DownPaymentTooLow {
            bank: bank.name.clone(),
            min_pct: bank.min_down_payment,
        });
    }
    if term_years > bank.max_loan_term_years {
        return Err(MortgageError::TermTooLong {
            bank: bank.name.clone(),
            max_years: bank.max_loan_term_years,
        });
    }

    let rate = bank.interest_rates.rate(LoanProduct::Mortgage);
    let payments = term_years * 12;
    let n = f64::from(payments);

    let base_monthly_payment = annuity_payment(loan_amount, rate, payments);
    let processing_fee = loan_amount * bank.processing_fee / 100.0;
    let repaid = base_monthly_payment * n;

    Ok(MortgageCalculation {
        bank_id: bank.id.clone(),
        bank_name: bank.name.clone(),
        loan_amount,
        base_monthly_payment,
        monthly_payment: base_monthly_payment + processing_fee / n,
        total_amount: repaid + processing_fee,
        total_interest: repaid - loan_amount + processing_fee,
        processing_fee,
        down_payment,
        loan_to_value: loan_amount / price * 100.0,
        term_years,
        interest_rate: rate,
    })
}

impl BankRegistry {
    /// Offer from the bank with the given id.
    pub fn calculate_mortgage(
        &self,
        price: f64,
        down_payment_pct: f64,
        term_years: u32,
        bank_id: &str,
    ) -> MortgageResult<MortgageCalculation> {
        let bank = self.require(bank_id)?;
        calculate_for_bank(bank, price, down_payment_pct, term_years)
    }

    /// Offers from every bank that accepts the terms, cheapest total first.
    ///
    /// Banks that reject the terms are logged and skipped.
    pub fn compare_all_banks(
        &self,
        price: f64,
        down_payment_pct: f64,
        term_years: u32,
    ) -> Vec<MortgageCalculation> {
        let mut offers: Vec<MortgageCalculation> = self
            .all()
            .iter()
            .filter_map(
                |bank| match calculate_for_bank(bank, price, down_payment_pct, term_years) {
                    Ok(offer) => Some(offer),
                    Err(e) => {
                        tracing::warn!(bank = %bank.id, reason = %e, "skipping bank");
                        None
                    }
                },
            )
            .collect();

        offers.sort_by(|a, b| a.total_amount.total_cmp(&b.total_amount));
        offers
    }
}

/// Borrowing limits for a monthly net income and existing monthly debts.
///
/// Payments are capped at 40% of income minus existing debts (never below
/// zero), priced at 4.3% over 25 years, with 20% down.
pub fn calculate_affordability(
    monthly_income: f64,
    existing_debts: f64,
) -> MortgageResult<Affordability> {
    if !monthly_income.is_finite() || monthly_income <= 0.0 {
        return Err(MortgageError::InvalidInput(format!(
            "monthly income must be positive, got {}",
            monthly_income
        )));
    }
    if !existing_debts.is_finite() || existing_debts < 0.0 {
        return Err(MortgageError::InvalidInput(format!(
            "existing debts cannot be negative, got {}",
            existing_debts
        )));
    }

    let max_monthly_payment = (monthly_income * MAX_DEBT_TO_INCOME - existing_debts).max(0.0);
    let max_loan_amount = annuity_principal(
        max_monthly_payment,
        REFERENCE_RATE,
        REFERENCE_TERM_YEARS * 12,
    );

    Ok(Affordability {
        max_monthly_payment,
        max_loan_amount,
        recommended_price: max_loan_amount / REFERENCE_LOAN_TO_VALUE,
        debt_to_income_ratio: (existing_debts + max_monthly_payment) / monthly_income * 100.0,
    })
}
