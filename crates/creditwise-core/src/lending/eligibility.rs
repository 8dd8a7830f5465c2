//! Loan-eligibility estimate: how much principal a profile's disposable
//! income can safely service, by inverting the EMI formula against an
//! assumed safe-EMI fraction.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::CreditWiseError;
use crate::loan_math;
use crate::types::{with_metadata, ComputationOutput, Money, Rate, UserProfile};
use crate::CreditWiseResult;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Assumed tenure for a typical personal loan.
const DEFAULT_TERM_MONTHS: u32 = 60;

/// Assumed APR for a typical personal loan.
const DEFAULT_RATE_PCT: Decimal = dec!(12);

/// Share of disposable income assumed safe to commit to an EMI.
const DEFAULT_SAFE_EMI_FRACTION: Decimal = dec!(0.4);

/// Principal below which a typical personal loan is not worth originating.
const DEFAULT_MIN_PRINCIPAL: Decimal = dec!(100_000);

fn default_term_months() -> u32 {
    DEFAULT_TERM_MONTHS
}

fn default_rate_pct() -> Rate {
    DEFAULT_RATE_PCT
}

fn default_safe_emi_fraction() -> Decimal {
    DEFAULT_SAFE_EMI_FRACTION
}

fn default_min_principal() -> Money {
    DEFAULT_MIN_PRINCIPAL
}

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityInput {
    pub profile: UserProfile,
    #[serde(default = "default_term_months")]
    pub term_months: u32,
    /// Quoted APR (12 = 12%).
    #[serde(default = "default_rate_pct")]
    pub annual_rate_pct: Rate,
    /// Fraction of disposable income committed to the EMI, in (0, 1].
    #[serde(default = "default_safe_emi_fraction")]
    pub safe_emi_fraction: Decimal,
    /// Eligibility cutoff on the estimated principal.
    #[serde(default = "default_min_principal")]
    pub min_principal: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityOutput {
    pub disposable_income: Money,
    /// Disposable income times the safe-EMI fraction.
    pub safe_emi: Money,
    /// Principal that `safe_emi` services over the assumed term and rate.
    pub max_principal: Money,
    /// Installment at `max_principal`; round-trips to `safe_emi`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example_emi: Option<Money>,
    pub eligible: bool,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Estimate the maximum affordable principal and the eligibility flag.
pub fn check_eligibility(
    input: &EligibilityInput,
) -> CreditWiseResult<ComputationOutput<EligibilityOutput>> {
    let start = Instant::now();
    let mut warnings = input.profile.validate()?;

    if input.safe_emi_fraction <= Decimal::ZERO || input.safe_emi_fraction > Decimal::ONE {
        return Err(CreditWiseError::InvalidInput {
            field: "safe_emi_fraction".into(),
            reason: "Must be within (0, 1]".into(),
        });
    }

    let disposable = input.profile.disposable_income();
    let safe_emi = disposable * input.safe_emi_fraction;

    let max_principal = loan_math::principal_from_installment(
        safe_emi,
        input.annual_rate_pct,
        input.term_months,
    )?;

    let example_emi = if max_principal > Decimal::ZERO {
        Some(loan_math::monthly_installment(
            max_principal,
            input.annual_rate_pct,
            input.term_months,
        )?)
    } else {
        warnings.push("No disposable income available for an EMI".to_string());
        None
    };

    let output = EligibilityOutput {
        disposable_income: disposable,
        safe_emi,
        max_principal,
        example_emi,
        eligible: max_principal > input.min_principal,
    };

    Ok(with_metadata(
        "Safe-EMI inversion: principal = safeEmi * ((1+r)^n - 1) / (r * (1+r)^n)",
        input,
        warnings,
        start.elapsed().as_micros() as u64,
        output,
    ))
}
