//! Multi-lender loan comparison: price a requested principal and tenure
//! across a set of loan products and rank the offers.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::CreditWiseError;
use crate::loan_math;
use crate::types::{with_metadata, ComputationOutput, Money, Rate, UserProfile};
use crate::CreditWiseResult;

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

/// A lender's loan product. Ranges mirror the typical product sheet:
/// amount and tenure windows, a rate band, and applicant floors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanProduct {
    pub bank_name: String,
    pub loan_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_amount: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_amount: Option<Money>,
    /// Lower bound of the quoted APR band (11.5 = 11.5%).
    pub interest_rate_min: Rate,
    /// Upper bound of the quoted APR band.
    pub interest_rate_max: Rate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_tenure_months: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tenure_months: Option<u32>,
    /// Upfront fee as a percentage of the principal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_fee_pct: Option<Rate>,
    #[serde(default = "default_min_age")]
    pub min_age: u32,
    #[serde(default = "default_max_age")]
    pub max_age: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_income: Option<Money>,
}

fn default_min_age() -> u32 {
    21
}

fn default_max_age() -> u32 {
    65
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonInput {
    pub products: Vec<LoanProduct>,
    pub principal: Money,
    pub term_months: u32,
    /// When present, each offer is additionally screened against the
    /// applicant's age and income.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<UserProfile>,
}

/// One priced offer. EMI and interest are ranges across the product's
/// rate band.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanOffer {
    pub bank_name: String,
    pub loan_type: String,
    pub emi_at_min_rate: Money,
    pub emi_at_max_rate: Money,
    pub total_interest_at_min_rate: Money,
    pub total_interest_at_max_rate: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_fee: Option<Money>,
    pub qualifies: bool,
    /// Why the applicant or the request fails this product's bounds.
    pub disqualifications: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonOutput {
    /// Offers sorted cheapest EMI (at the band floor) first.
    pub offers: Vec<LoanOffer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_offer: Option<String>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Price the requested loan across every product and rank the offers.
pub fn compare_loans(
    input: &ComparisonInput,
) -> CreditWiseResult<ComputationOutput<ComparisonOutput>> {
    let start = Instant::now();
    let warnings: Vec<String> = Vec::new();

    if input.products.is_empty() {
        return Err(CreditWiseError::InsufficientData(
            "At least one loan product required".into(),
        ));
    }

    let mut offers = Vec::with_capacity(input.products.len());
    for product in &input.products {
        offers.push(price_offer(product, input)?);
    }

    offers.sort_by(|a, b| a.emi_at_min_rate.cmp(&b.emi_at_min_rate));

    let best_offer = offers
        .iter()
        .find(|o| o.qualifies)
        .map(|o| o.bank_name.clone());

    Ok(with_metadata(
        "Per-product EMI at the rate-band bounds, screened against amount, \
         tenure, age, and income windows, ranked by cheapest EMI",
        input,
        warnings,
        start.elapsed().as_micros() as u64,
        ComparisonOutput { offers, best_offer },
    ))
}

// ---------------------------------------------------------------------------
// Internals
// ---------------------------------------------------------------------------

fn price_offer(product: &LoanProduct, input: &ComparisonInput) -> CreditWiseResult<LoanOffer> {
    let n = Decimal::from(input.term_months);

    let emi_min = loan_math::monthly_installment(
        input.principal,
        product.interest_rate_min,
        input.term_months,
    )?;
    let emi_max = loan_math::monthly_installment(
        input.principal,
        product.interest_rate_max,
        input.term_months,
    )?;

    let processing_fee = product
        .processing_fee_pct
        .map(|pct| input.principal * pct / dec!(100));

    let mut disqualifications = Vec::new();

    if let Some(min) = product.min_amount {
        if input.principal < min {
            disqualifications.push(format!("Principal below product minimum {min}"));
        }
    }
    if let Some(max) = product.max_amount {
        if input.principal > max {
            disqualifications.push(format!("Principal above product maximum {max}"));
        }
    }
    if let Some(min) = product.min_tenure_months {
        if input.term_months < min {
            disqualifications.push(format!("Tenure below product minimum {min} months"));
        }
    }
    if let Some(max) = product.max_tenure_months {
        if input.term_months > max {
            disqualifications.push(format!("Tenure above product maximum {max} months"));
        }
    }
    if let Some(profile) = &input.profile {
        if profile.age < product.min_age || profile.age > product.max_age {
            disqualifications.push(format!(
                "Age {} outside product window {}-{}",
                profile.age, product.min_age, product.max_age
            ));
        }
        if let Some(min_income) = product.min_income {
            if profile.monthly_income < min_income {
                disqualifications
                    .push(format!("Income below product minimum {min_income}"));
            }
        }
    }

    Ok(LoanOffer {
        bank_name: product.bank_name.clone(),
        loan_type: product.loan_type.clone(),
        emi_at_min_rate: emi_min,
        emi_at_max_rate: emi_max,
        total_interest_at_min_rate: emi_min * n - input.principal,
        total_interest_at_max_rate: emi_max * n - input.principal,
        processing_fee,
        qualifies: disqualifications.is_empty(),
        disqualifications,
    })
}
