use chrono::NaiveDate;
use creditwise_core::history::generator::{generate_score_history, HistoryInput};
use creditwise_core::scoring::estimate::{
    calculate_credit_score, estimate_score, financial_health_score, ScoreRating,
};
use creditwise_core::scoring::simulator::{simulate_score, SimulationInput};
use creditwise_core::{EmploymentType, UserProfile};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

fn sample_profile() -> UserProfile {
    UserProfile {
        name: "Asha".to_string(),
        age: 29,
        employment_type: EmploymentType::Salaried,
        monthly_income: dec!(75_000),
        monthly_expenses: dec!(35_000),
        existing_loans: 1,
        existing_emi: dec!(12_000),
    }
}

// ===========================================================================
// Score heuristic
// ===========================================================================

#[test]
fn test_reference_profile_scores_579() {
    // disposable 28k, utilization 47k/75k, boost 112, penalties 40 + 93
    let output = calculate_credit_score(&sample_profile()).unwrap().result;

    assert_eq!(output.income_boost, 112);
    assert_eq!(output.loans_penalty, 40);
    assert_eq!(output.utilization_penalty, 93);
    assert_eq!(output.score, 579);
    assert_eq!(output.rating, ScoreRating::VeryPoor);
    assert_eq!(output.disposable_income, dec!(28_000));
}

#[test]
fn test_score_is_deterministic() {
    let profile = sample_profile();
    let first = estimate_score(&profile);
    for _ in 0..10 {
        assert_eq!(estimate_score(&profile), first);
    }
}

#[test]
fn test_score_stays_in_band_at_extremes() {
    let mut broke = sample_profile();
    broke.monthly_income = dec!(0);
    broke.monthly_expenses = dec!(90_000);
    broke.existing_loans = 10;
    broke.existing_emi = dec!(50_000);
    assert_eq!(estimate_score(&broke), 300);

    let mut flush = sample_profile();
    flush.monthly_income = dec!(500_000);
    flush.monthly_expenses = dec!(10_000);
    flush.existing_loans = 0;
    flush.existing_emi = dec!(0);
    let score = estimate_score(&flush);
    assert!((300..=900).contains(&score));
    assert!(score > 700);
}

#[test]
fn test_zero_income_does_not_divide_by_zero() {
    let mut profile = sample_profile();
    profile.monthly_income = dec!(0);
    profile.monthly_expenses = dec!(0);
    profile.existing_emi = dec!(0);
    profile.existing_loans = 0;

    // Denominators floor at 1, so this must simply produce a banded score
    let score = estimate_score(&profile);
    assert!((300..=900).contains(&score));
}

#[test]
fn test_rating_bands() {
    assert_eq!(ScoreRating::from_score(800), ScoreRating::Excellent);
    assert_eq!(ScoreRating::from_score(750), ScoreRating::Excellent);
    assert_eq!(ScoreRating::from_score(749), ScoreRating::Good);
    assert_eq!(ScoreRating::from_score(700), ScoreRating::Good);
    assert_eq!(ScoreRating::from_score(650), ScoreRating::Fair);
    assert_eq!(ScoreRating::from_score(600), ScoreRating::Poor);
    assert_eq!(ScoreRating::from_score(599), ScoreRating::VeryPoor);
}

#[test]
fn test_financial_health_score() {
    // 28k / 75k * 200 = 74.67 -> 75
    assert_eq!(financial_health_score(&sample_profile()), 75);

    let mut rich = sample_profile();
    rich.monthly_expenses = dec!(5_000);
    rich.existing_emi = dec!(0);
    assert_eq!(financial_health_score(&rich), 100);

    let mut zero = sample_profile();
    zero.monthly_income = dec!(0);
    assert_eq!(financial_health_score(&zero), 0);
}

// ===========================================================================
// What-if simulator
// ===========================================================================

#[test]
fn test_simulator_paying_off_loans_raises_score() {
    let current = sample_profile();
    let mut adjusted = current.clone();
    adjusted.existing_loans = 0;
    adjusted.existing_emi = dec!(0);

    let output = simulate_score(&SimulationInput { current, adjusted })
        .unwrap()
        .result;

    assert_eq!(output.current_score, 579);
    assert!(output.projected_score > output.current_score);
    assert_eq!(output.delta, output.projected_score - output.current_score);
}

#[test]
fn test_simulator_identical_profiles_have_zero_delta() {
    let profile = sample_profile();
    let output = simulate_score(&SimulationInput {
        current: profile.clone(),
        adjusted: profile,
    })
    .unwrap()
    .result;

    assert_eq!(output.delta, 0);
    assert_eq!(output.current_rating, output.projected_rating);
}

// ===========================================================================
// Mock history walk
// ===========================================================================

fn history_input(seed: u64) -> HistoryInput {
    HistoryInput {
        current_score: 579,
        as_of: NaiveDate::from_ymd_opt(2026, 8, 6).unwrap(),
        months: 12,
        seed: Some(seed),
    }
}

#[test]
fn test_history_invariants() {
    let history = generate_score_history(&history_input(42)).unwrap().result;

    assert_eq!(history.len(), 12);
    for point in &history {
        assert!(
            (300..=900).contains(&point.score),
            "score {} out of band",
            point.score
        );
    }

    // Month-stamped, strictly ascending, ending at as_of
    for pair in history.windows(2) {
        assert!(pair[0].date < pair[1].date);
    }
    assert_eq!(
        history.last().unwrap().date,
        NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
    );
    assert_eq!(
        history.first().unwrap().date,
        NaiveDate::from_ymd_opt(2025, 9, 6).unwrap()
    );
}

#[test]
fn test_history_is_reproducible_with_a_seed() {
    let a = generate_score_history(&history_input(7)).unwrap().result;
    let b = generate_score_history(&history_input(7)).unwrap().result;
    assert_eq!(a, b);
}

#[test]
fn test_history_walk_perturbs_every_point() {
    // The walk applies a step before the first emit, so even the newest
    // point carries accumulated drift; only the clamp bounds are promised.
    let history = generate_score_history(&history_input(3)).unwrap().result;
    let newest = history.last().unwrap().score;
    assert!((300..=900).contains(&newest));
}

#[test]
fn test_history_rejects_out_of_band_score() {
    let mut input = history_input(1);
    input.current_score = 250;
    assert!(generate_score_history(&input).is_err());

    input.current_score = 579;
    input.months = 0;
    assert!(generate_score_history(&input).is_err());
}
