use napi::Result as NapiResult;
use napi_derive::napi;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

#[napi]
pub fn estimate_score(profile_json: String) -> NapiResult<String> {
    let profile: creditwise_core::UserProfile =
        serde_json::from_str(&profile_json).map_err(to_napi_error)?;
    let output = creditwise_core::scoring::estimate::calculate_credit_score(&profile)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn score_history(input_json: String) -> NapiResult<String> {
    let input: creditwise_core::history::generator::HistoryInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = creditwise_core::history::generator::generate_score_history(&input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn simulate_score(input_json: String) -> NapiResult<String> {
    let input: creditwise_core::scoring::simulator::SimulationInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = creditwise_core::scoring::simulator::simulate_score(&input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Lending
// ---------------------------------------------------------------------------

#[napi]
pub fn monthly_emi(input_json: String) -> NapiResult<String> {
    let input: creditwise_core::lending::emi::EmiInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        creditwise_core::lending::emi::calculate_emi(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn check_eligibility(input_json: String) -> NapiResult<String> {
    let input: creditwise_core::lending::eligibility::EligibilityInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = creditwise_core::lending::eligibility::check_eligibility(&input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn compare_loans(input_json: String) -> NapiResult<String> {
    let input: creditwise_core::lending::comparison::ComparisonInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = creditwise_core::lending::comparison::compare_loans(&input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Gamification
// ---------------------------------------------------------------------------

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct AwardXpRequest {
    action: creditwise_core::gamification::progression::XpAction,
    stats: creditwise_core::UserStats,
}

#[napi]
pub fn award_xp(input_json: String) -> NapiResult<String> {
    let request: AwardXpRequest =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let stats = creditwise_core::gamification::progression::award_action(
        &request.stats,
        request.action,
    );
    serde_json::to_string(&stats).map_err(to_napi_error)
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct EvaluateAchievementsRequest {
    profile: creditwise_core::UserProfile,
    score: i32,
    stats: creditwise_core::UserStats,
    now: chrono::DateTime<chrono::Utc>,
}

#[napi]
pub fn evaluate_achievements(input_json: String) -> NapiResult<String> {
    let request: EvaluateAchievementsRequest =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let achievements = creditwise_core::gamification::achievements::evaluate_achievements(
        &request.profile,
        request.score,
        &request.stats,
        request.now,
    );
    serde_json::to_string(&achievements).map_err(to_napi_error)
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct ComputeStreakRequest {
    last_visit: chrono::DateTime<chrono::Utc>,
    now: chrono::DateTime<chrono::Utc>,
    previous_streak: Option<u32>,
}

#[napi]
pub fn compute_streak(input_json: String) -> NapiResult<String> {
    let request: ComputeStreakRequest =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let streak = creditwise_core::gamification::streak::compute_streak(
        request.last_visit,
        request.now,
        request.previous_streak,
    );
    serde_json::to_string(&streak).map_err(to_napi_error)
}
