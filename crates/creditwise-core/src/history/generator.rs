//! Synthetic monthly score trend via a bounded random walk.
//!
//! The walk seeds at the supplied current score and drifts as it emits
//! month points from oldest to newest, so every point — the newest
//! included — is perturbed away from the input score. Non-deterministic
//! unless a seed is supplied.

use chrono::{Months, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::CreditWiseError;
use crate::types::{
    with_metadata, ComputationOutput, CreditScoreData, SCORE_MAX, SCORE_MIN,
};
use crate::CreditWiseResult;

/// Per-step perturbation: floor((U(0,1) - WALK_BIAS) * WALK_SPAN), an
/// integer in [-8, 11] biased slightly downward.
const WALK_BIAS: f64 = 0.4;
const WALK_SPAN: f64 = 20.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryInput {
    /// Score the walk starts from, in [300, 900].
    pub current_score: i32,
    /// Date of the newest point; earlier points step back one month each.
    pub as_of: NaiveDate,
    /// Number of monthly points to produce.
    #[serde(default = "default_months")]
    pub months: u32,
    /// Optional seed for reproducibility.
    pub seed: Option<u64>,
}

fn default_months() -> u32 {
    12
}

/// Generate a month-stamped score trend ending at `as_of`.
///
/// Output is chronologically ascending, every score clamped to [300, 900].
pub fn generate_score_history(
    input: &HistoryInput,
) -> CreditWiseResult<ComputationOutput<Vec<CreditScoreData>>> {
    let start = Instant::now();
    let warnings: Vec<String> = Vec::new();

    if input.current_score < SCORE_MIN || input.current_score > SCORE_MAX {
        return Err(CreditWiseError::InvalidInput {
            field: "current_score".into(),
            reason: format!("Must be within [{SCORE_MIN}, {SCORE_MAX}]"),
        });
    }
    if input.months == 0 {
        return Err(CreditWiseError::InsufficientData(
            "At least one month of history required".into(),
        ));
    }

    let mut rng = match input.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let history = walk(input, &mut rng)?;

    Ok(with_metadata(
        "Bounded random walk from the current score, stepping backward one \
         month per point, each step clamped to [300, 900]",
        input,
        warnings,
        start.elapsed().as_micros() as u64,
        history,
    ))
}

fn walk(input: &HistoryInput, rng: &mut StdRng) -> CreditWiseResult<Vec<CreditScoreData>> {
    let mut history = Vec::with_capacity(input.months as usize);
    let mut score = input.current_score;

    for months_back in (0..input.months).rev() {
        let date = input
            .as_of
            .checked_sub_months(Months::new(months_back))
            .ok_or_else(|| {
                CreditWiseError::DateError(format!(
                    "Cannot step {months_back} months back from {}",
                    input.as_of
                ))
            })?;

        let delta = ((rng.gen::<f64>() - WALK_BIAS) * WALK_SPAN).floor() as i32;
        score = (score + delta).clamp(SCORE_MIN, SCORE_MAX);
        history.push(CreditScoreData { date, score });
    }

    Ok(history)
}
