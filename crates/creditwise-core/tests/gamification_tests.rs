use chrono::{Duration, TimeZone, Utc};
use creditwise_core::gamification::achievements::{evaluate_achievements, newly_unlocked};
use creditwise_core::gamification::progression::{
    award_action, level_from_xp, xp_reward, xp_threshold_for_level, XpAction,
};
use creditwise_core::gamification::streak::compute_streak;
use creditwise_core::{EmploymentType, UserProfile, UserStats};
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

fn sample_stats() -> UserStats {
    UserStats {
        level: 1,
        xp: 0,
        xp_to_next_level: 100,
        streak: 1,
        last_visit: Utc.with_ymd_and_hms(2026, 8, 6, 9, 0, 0).unwrap(),
        achievements: Vec::new(),
    }
}

// ===========================================================================
// Level curve
// ===========================================================================

#[test]
fn test_level_curve_reference_points() {
    assert_eq!(level_from_xp(0), 1);
    assert_eq!(level_from_xp(99), 1);
    assert_eq!(level_from_xp(100), 2);
    assert_eq!(level_from_xp(400), 3);
}

#[test]
fn test_level_curve_is_monotonic() {
    let mut last = 0;
    for xp in (0..5_000).step_by(50) {
        let level = level_from_xp(xp);
        assert!(level >= last);
        last = level;
    }
}

#[test]
fn test_threshold_and_curve_are_consistent_inverses() {
    // level^2 * 100 is exactly where level + 1 begins
    for level in 1..20u32 {
        let threshold = xp_threshold_for_level(level);
        assert_eq!(level_from_xp(threshold), level + 1);
        assert_eq!(level_from_xp(threshold - 1), level);
    }
}

#[test]
fn test_threshold_reference_points() {
    assert_eq!(xp_threshold_for_level(1), 100);
    assert_eq!(xp_threshold_for_level(2), 400);
    assert_eq!(xp_threshold_for_level(5), 2_500);
}

// ===========================================================================
// Action rewards
// ===========================================================================

#[test]
fn test_xp_rewards() {
    assert_eq!(xp_reward(XpAction::Login), 10);
    assert_eq!(xp_reward(XpAction::ProfileUpdate), 20);
    assert_eq!(xp_reward(XpAction::CalculatorUse), 15);
    assert_eq!(xp_reward(XpAction::ComparisonView), 15);
    assert_eq!(xp_reward(XpAction::EligibilityCheck), 25);
    assert_eq!(xp_reward(XpAction::SimulatorUse), 30);
    assert_eq!(xp_reward(XpAction::Other), 5);
}

#[test]
fn test_unknown_action_names_fall_back_silently() {
    let action: XpAction = "dance_party".parse().unwrap();
    assert_eq!(action, XpAction::Other);
    assert_eq!(xp_reward(action), 5);

    let known: XpAction = "eligibility_check".parse().unwrap();
    assert_eq!(known, XpAction::EligibilityCheck);
}

#[test]
fn test_action_serde_round_trip_with_fallback() {
    let login: XpAction = serde_json::from_str("\"login\"").unwrap();
    assert_eq!(login, XpAction::Login);

    let unknown: XpAction = serde_json::from_str("\"totally_new_action\"").unwrap();
    assert_eq!(unknown, XpAction::Other);

    assert_eq!(serde_json::to_string(&XpAction::ProfileUpdate).unwrap(), "\"profile_update\"");
}

#[test]
fn test_award_action_recomputes_level_and_threshold() {
    let mut stats = sample_stats();
    stats.xp = 95;

    let after = award_action(&stats, XpAction::Login);
    assert_eq!(after.xp, 105);
    assert_eq!(after.level, 2);
    assert_eq!(after.xp_to_next_level, 400);
    // Streak and visit bookkeeping untouched
    assert_eq!(after.streak, stats.streak);
    assert_eq!(after.last_visit, stats.last_visit);
}

// ===========================================================================
// Streaks
// ===========================================================================

#[test]
fn test_streak_same_day_without_history_starts_at_one() {
    let now = Utc.with_ymd_and_hms(2026, 8, 6, 20, 0, 0).unwrap();
    let last = now - Duration::hours(5);
    assert_eq!(compute_streak(last, now, None), 1);
}

#[test]
fn test_streak_within_a_day_increments() {
    let now = Utc.with_ymd_and_hms(2026, 8, 6, 20, 0, 0).unwrap();
    let last = now - Duration::hours(20);
    assert_eq!(compute_streak(last, now, Some(6)), 7);
}

#[test]
fn test_streak_gap_resets_to_one() {
    let now = Utc.with_ymd_and_hms(2026, 8, 6, 20, 0, 0).unwrap();
    let last = now - Duration::days(3);
    assert_eq!(compute_streak(last, now, Some(30)), 1);
}

#[test]
fn test_streak_boundary_at_one_day() {
    let now = Utc.with_ymd_and_hms(2026, 8, 6, 20, 0, 0).unwrap();

    // 47h59m is still one whole day of gap
    let last = now - Duration::hours(47) - Duration::minutes(59);
    assert_eq!(compute_streak(last, now, Some(4)), 5);

    // 48h is two whole days
    let last = now - Duration::hours(48);
    assert_eq!(compute_streak(last, now, Some(4)), 1);
}

// ===========================================================================
// Achievements
// ===========================================================================

#[test]
fn test_debt_free_hero_tracks_loan_count() {
    let mut profile = sample_profile();
    let stats = sample_stats();

    profile.existing_loans = 0;
    let unlocked =
        evaluate_achievements(&profile, 579, &stats, stats.last_visit);
    let low_debt = unlocked.iter().find(|a| a.id == "low_debt").unwrap();
    assert!(low_debt.unlocked);
    assert_eq!(low_debt.unlocked_at, Some(stats.last_visit));

    profile.existing_loans = 2;
    let locked = evaluate_achievements(&profile, 579, &stats, stats.last_visit);
    let low_debt = locked.iter().find(|a| a.id == "low_debt").unwrap();
    assert!(!low_debt.unlocked);
    assert!(low_debt.unlocked_at.is_none());
}

#[test]
fn test_catalog_shape_and_onboarding_entries() {
    let profile = sample_profile();
    let stats = sample_stats();
    let achievements =
        evaluate_achievements(&profile, 579, &stats, stats.last_visit);

    assert_eq!(achievements.len(), 9);
    // The onboarding pair is unconditionally unlocked
    assert!(achievements.iter().find(|a| a.id == "first_login").unwrap().unlocked);
    assert!(achievements.iter().find(|a| a.id == "profile_complete").unwrap().unlocked);
}

#[test]
fn test_credit_band_achievements() {
    let profile = sample_profile();
    let stats = sample_stats();

    let at_720 = evaluate_achievements(&profile, 720, &stats, stats.last_visit);
    assert!(at_720.iter().find(|a| a.id == "credit_good").unwrap().unlocked);
    assert!(!at_720.iter().find(|a| a.id == "credit_excellent").unwrap().unlocked);

    let at_820 = evaluate_achievements(&profile, 820, &stats, stats.last_visit);
    assert!(at_820.iter().find(|a| a.id == "credit_good").unwrap().unlocked);
    assert!(at_820.iter().find(|a| a.id == "credit_excellent").unwrap().unlocked);
}

#[test]
fn test_savings_champion_is_strict() {
    let mut profile = sample_profile();
    let stats = sample_stats();

    // Exactly half of income is not below half
    profile.monthly_income = dec!(60_000);
    profile.monthly_expenses = dec!(30_000);
    let at_half = evaluate_achievements(&profile, 579, &stats, stats.last_visit);
    assert!(!at_half.iter().find(|a| a.id == "savings_master").unwrap().unlocked);

    profile.monthly_expenses = dec!(29_999);
    let below = evaluate_achievements(&profile, 579, &stats, stats.last_visit);
    assert!(below.iter().find(|a| a.id == "savings_master").unwrap().unlocked);
}

#[test]
fn test_streak_and_level_achievements() {
    let profile = sample_profile();
    let mut stats = sample_stats();
    stats.streak = 7;
    stats.level = 5;

    let achievements =
        evaluate_achievements(&profile, 579, &stats, stats.last_visit);
    assert!(achievements.iter().find(|a| a.id == "streak_7").unwrap().unlocked);
    assert!(!achievements.iter().find(|a| a.id == "streak_30").unwrap().unlocked);
    assert!(achievements.iter().find(|a| a.id == "financial_guru").unwrap().unlocked);
}

#[test]
fn test_newly_unlocked_reports_transitions_only() {
    let profile = sample_profile();
    let stats = sample_stats();
    let now = stats.last_visit;

    let before = evaluate_achievements(&profile, 579, &stats, now);
    let after = evaluate_achievements(&profile, 820, &stats, now);

    let fresh = newly_unlocked(&before, &after);
    let ids: Vec<&str> = fresh.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["credit_good", "credit_excellent"]);

    // No transitions when nothing changed
    assert!(newly_unlocked(&after, &after).is_empty());
}
