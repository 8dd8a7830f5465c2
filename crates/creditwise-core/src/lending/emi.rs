//! EMI calculation with totals and a full amortization schedule.
//!
//! All math in `rust_decimal::Decimal`. The installment itself is the
//! unrounded closed-form value; schedule rows carry the unrounded
//! interest/principal split with the final row absorbing the residual so
//! the balance closes at exactly zero.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::loan_math;
use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::CreditWiseResult;

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmiInput {
    pub principal: Money,
    /// Quoted APR (12 = 12%).
    pub annual_rate_pct: Rate,
    pub term_months: u32,
    /// Emit the per-month schedule. Off by default; the schedule is
    /// `term_months` rows.
    #[serde(default)]
    pub include_schedule: bool,
}

/// One month of the amortization schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmortizationPeriod {
    /// 1-based month number.
    pub month: u32,
    pub interest: Money,
    pub principal: Money,
    pub closing_balance: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmiOutput {
    pub monthly_payment: Money,
    pub total_payment: Money,
    pub total_interest: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Vec<AmortizationPeriod>>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Compute the fixed monthly installment, lifetime totals, and optionally
/// the month-by-month amortization schedule.
pub fn calculate_emi(input: &EmiInput) -> CreditWiseResult<ComputationOutput<EmiOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let payment = loan_math::monthly_installment(
        input.principal,
        input.annual_rate_pct,
        input.term_months,
    )?;

    let total_payment = payment * Decimal::from(input.term_months);
    let total_interest = total_payment - input.principal;

    if input.annual_rate_pct > dec!(36) {
        warnings.push(format!(
            "Rate {}% is far above typical retail lending rates",
            input.annual_rate_pct
        ));
    }

    let schedule = if input.include_schedule {
        Some(build_schedule(input, payment))
    } else {
        None
    };

    let output = EmiOutput {
        monthly_payment: payment,
        total_payment,
        total_interest,
        schedule,
    };

    Ok(with_metadata(
        "Fixed-rate amortization: P*r*(1+r)^n / ((1+r)^n - 1), \
         straight-line when r = 0",
        input,
        warnings,
        start.elapsed().as_micros() as u64,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Internals
// ---------------------------------------------------------------------------

fn build_schedule(input: &EmiInput, payment: Money) -> Vec<AmortizationPeriod> {
    let monthly_rate = input.annual_rate_pct / dec!(1200);
    let mut schedule = Vec::with_capacity(input.term_months as usize);
    let mut balance = input.principal;

    for month in 1..=input.term_months {
        let interest = balance * monthly_rate;
        let mut principal_part = payment - interest;

        // Final row absorbs the accumulated rounding residual.
        if month == input.term_months {
            principal_part = balance;
        }

        balance -= principal_part;
        schedule.push(AmortizationPeriod {
            month,
            interest,
            principal: principal_part,
            closing_balance: balance,
        });
    }

    schedule
}
