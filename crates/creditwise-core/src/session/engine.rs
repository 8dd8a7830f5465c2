//! Pure session transitions: every function takes the current state and an
//! explicit clock and returns the next state or a derived snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::gamification::achievements::evaluate_achievements;
use crate::gamification::progression::{
    award_action, level_from_xp, xp_threshold_for_level, XpAction,
};
use crate::gamification::streak::compute_streak;
use crate::history::generator::{generate_score_history, HistoryInput};
use crate::scoring::estimate::{estimate_score, ScoreRating};
use crate::session::state::SessionState;
use crate::types::{CreditScoreData, UserProfile, UserStats};
use crate::CreditWiseResult;

/// Derived view of a session: score, trend, achievements.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub score: i32,
    pub rating: ScoreRating,
    pub history: Vec<CreditScoreData>,
    pub achievements: Vec<crate::types::Achievement>,
}

/// Fresh session with default stats: level 1, no XP, streak 1.
pub fn new_session(profile: UserProfile, now: DateTime<Utc>) -> SessionState {
    SessionState {
        profile,
        stats: UserStats {
            level: 1,
            xp: 0,
            xp_to_next_level: xp_threshold_for_level(1),
            streak: 1,
            last_visit: now,
            achievements: Vec::new(),
        },
    }
}

/// A login: extend or reset the streak from the previous visit, grant login
/// XP, and stamp the visit.
pub fn record_login(state: &SessionState, now: DateTime<Utc>) -> SessionState {
    let streak = compute_streak(state.stats.last_visit, now, Some(state.stats.streak));
    let stats = award_action(&state.stats, XpAction::Login);
    SessionState {
        profile: state.profile.clone(),
        stats: UserStats {
            streak,
            last_visit: now,
            ..stats
        },
    }
}

/// Wholesale profile replacement plus the profile-update reward.
pub fn record_profile_update(
    state: &SessionState,
    profile: UserProfile,
    now: DateTime<Utc>,
) -> SessionState {
    let stats = award_action(&state.stats, XpAction::ProfileUpdate);
    let mut next = SessionState { profile, stats };
    refresh_achievements(&mut next, now);
    next
}

/// Generic XP grant for any other rewardable action.
pub fn record_action(state: &SessionState, action: XpAction) -> SessionState {
    SessionState {
        profile: state.profile.clone(),
        stats: award_action(&state.stats, action),
    }
}

/// Score the profile, generate the trend, and evaluate achievements.
/// `as_of` is the trend's newest month; `seed` makes the trend
/// reproducible.
pub fn assess(
    state: &SessionState,
    now: DateTime<Utc>,
    seed: Option<u64>,
) -> CreditWiseResult<Assessment> {
    let score = estimate_score(&state.profile);
    let history = generate_score_history(&HistoryInput {
        current_score: score,
        as_of: now.date_naive(),
        months: 12,
        seed,
    })?
    .result;
    let achievements = evaluate_achievements(&state.profile, score, &state.stats, now);

    Ok(Assessment {
        score,
        rating: ScoreRating::from_score(score),
        history,
        achievements,
    })
}

/// Recompute the achievement catalog against the current profile and score
/// and write it back into the stats.
pub fn refresh_achievements(state: &mut SessionState, now: DateTime<Utc>) {
    let score = estimate_score(&state.profile);
    state.stats.achievements =
        evaluate_achievements(&state.profile, score, &state.stats, now);
}

/// Level consistency guard used by shells restoring persisted stats: the
/// stored level and threshold are derived values, so recompute them from XP
/// after a load.
pub fn normalize_stats(stats: &UserStats) -> UserStats {
    let level = level_from_xp(stats.xp);
    UserStats {
        level,
        xp_to_next_level: xp_threshold_for_level(level),
        ..stats.clone()
    }
}
