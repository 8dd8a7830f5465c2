//! What-if score projection: compare the score of the current profile
//! against an adjusted copy and report the movement.

use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::scoring::estimate::{estimate_score, ScoreRating};
use crate::types::{with_metadata_f64, ComputationOutput, UserProfile};
use crate::CreditWiseResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationInput {
    pub current: UserProfile,
    pub adjusted: UserProfile,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationOutput {
    pub current_score: i32,
    pub projected_score: i32,
    /// Projected minus current; positive means the adjustment helps.
    pub delta: i32,
    pub current_rating: ScoreRating,
    pub projected_rating: ScoreRating,
}

/// Score both profiles with the identical heuristic and report the delta.
pub fn simulate_score(
    input: &SimulationInput,
) -> CreditWiseResult<ComputationOutput<SimulationOutput>> {
    let start = Instant::now();
    let mut warnings = input.current.validate()?;
    warnings.extend(input.adjusted.validate()?);

    let current_score = estimate_score(&input.current);
    let projected_score = estimate_score(&input.adjusted);

    let output = SimulationOutput {
        current_score,
        projected_score,
        delta: projected_score - current_score,
        current_rating: ScoreRating::from_score(current_score),
        projected_rating: ScoreRating::from_score(projected_score),
    };

    Ok(with_metadata_f64(
        "Deterministic re-score of an adjusted profile against the current one",
        input,
        warnings,
        start.elapsed().as_micros() as u64,
        output,
    ))
}
