//! Heuristic credit-score estimate from an income/expense/debt profile.
//!
//! This is an educational simulation, not a bureau model: a base score is
//! adjusted by a disposable-income boost and penalties for loan count and
//! utilization, then clamped to [300, 900]. Deterministic: identical input
//! always yields the identical score.
//!
//! The ratio components are evaluated in IEEE doubles in the reference
//! operation order; the floor steps sit on exact-integer boundaries for
//! round-number profiles, where decimal and double arithmetic disagree.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::types::{
    with_metadata_f64, ComputationOutput, Money, UserProfile, SCORE_MAX, SCORE_MIN,
};
use crate::CreditWiseResult;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Neutral starting score before adjustments.
const BASE_SCORE: i32 = 600;

/// Cap on the disposable-income boost.
const INCOME_BOOST_CAP: i32 = 200;

/// Disposable-income share is scaled by this factor into score points.
const INCOME_BOOST_SCALE: f64 = 300.0;

/// Score points deducted per existing loan.
const PER_LOAN_PENALTY: i32 = 40;

/// Cap on the loan-count penalty.
const LOANS_PENALTY_CAP: i32 = 200;

/// Utilization ratio is scaled by this factor into penalty points.
const UTILIZATION_PENALTY_SCALE: f64 = 150.0;

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// Score band, per the typical lender read of the 300-900 range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreRating {
    Excellent,
    Good,
    Fair,
    Poor,
    VeryPoor,
}

impl ScoreRating {
    pub fn from_score(score: i32) -> Self {
        if score >= 750 {
            ScoreRating::Excellent
        } else if score >= 700 {
            ScoreRating::Good
        } else if score >= 650 {
            ScoreRating::Fair
        } else if score >= 600 {
            ScoreRating::Poor
        } else {
            ScoreRating::VeryPoor
        }
    }
}

impl std::fmt::Display for ScoreRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreRating::Excellent => write!(f, "Excellent"),
            ScoreRating::Good => write!(f, "Good"),
            ScoreRating::Fair => write!(f, "Fair"),
            ScoreRating::Poor => write!(f, "Poor"),
            ScoreRating::VeryPoor => write!(f, "Very Poor"),
        }
    }
}

/// Score with its component breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditScoreOutput {
    /// Final score in [300, 900].
    pub score: i32,
    pub rating: ScoreRating,
    /// Income after expenses and existing EMI, floored at zero.
    pub disposable_income: Money,
    /// (existing EMI + expenses) / income. Not the revolving-limit ratio.
    pub utilization: f64,
    pub income_boost: i32,
    pub loans_penalty: i32,
    pub utilization_penalty: i32,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Estimate a synthetic credit score from a financial profile.
pub fn calculate_credit_score(
    profile: &UserProfile,
) -> CreditWiseResult<ComputationOutput<CreditScoreOutput>> {
    let start = Instant::now();
    let warnings = profile.validate()?;

    let output = score_components(profile);

    Ok(with_metadata_f64(
        "Heuristic score: base 600 + disposable-income boost (cap 200) \
         - 40/loan penalty (cap 200) - floor(150 * utilization), \
         clamped to [300, 900]",
        profile,
        warnings,
        start.elapsed().as_micros() as u64,
        output,
    ))
}

/// Bare score without the envelope; used by the simulator and session flows.
pub fn estimate_score(profile: &UserProfile) -> i32 {
    score_components(profile).score
}

/// Dashboard health gauge: disposable share of income scaled to [0, 100].
pub fn financial_health_score(profile: &UserProfile) -> u32 {
    if profile.monthly_income <= Decimal::ZERO {
        return 0;
    }
    let disposable = profile.disposable_income().to_f64().unwrap_or(0.0);
    let income = profile.monthly_income.to_f64().unwrap_or(1.0);
    let raw = (disposable / income * 200.0).round();
    raw.min(100.0).max(0.0) as u32
}

// ---------------------------------------------------------------------------
// Internals
// ---------------------------------------------------------------------------

fn score_components(profile: &UserProfile) -> CreditScoreOutput {
    let disposable = profile.disposable_income();
    // max(1, income) keeps both ratios total when income is zero.
    let income_floor = profile.monthly_income.max(Decimal::ONE);

    let disposable_f = disposable.to_f64().unwrap_or(0.0);
    let income_f = income_floor.to_f64().unwrap_or(1.0);
    let debt_service_f = (profile.existing_emi + profile.monthly_expenses)
        .to_f64()
        .unwrap_or(0.0);

    let utilization = debt_service_f / income_f;

    let income_boost =
        ((disposable_f / income_f * INCOME_BOOST_SCALE).floor() as i32).min(INCOME_BOOST_CAP);

    let loans_penalty =
        (profile.existing_loans as i32 * PER_LOAN_PENALTY).min(LOANS_PENALTY_CAP);

    let utilization_penalty = (utilization * UTILIZATION_PENALTY_SCALE).floor() as i32;

    let score = (BASE_SCORE + income_boost - loans_penalty - utilization_penalty)
        .clamp(SCORE_MIN, SCORE_MAX);

    CreditScoreOutput {
        score,
        rating: ScoreRating::from_score(score),
        disposable_income: disposable,
        utilization,
        income_boost,
        loans_penalty,
        utilization_penalty,
    }
}
