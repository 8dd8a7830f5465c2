//! Consecutive-day engagement streaks.

use chrono::{DateTime, Utc};

/// Streak after a visit at `now`, given the previous visit time and the
/// previously persisted streak (an explicit parameter — there is no hidden
/// persisted-state read here).
///
/// A gap of at most one whole day extends the streak (1 when none was
/// persisted); a longer gap resets it to 1. Always >= 1.
pub fn compute_streak(
    last_visit: DateTime<Utc>,
    now: DateTime<Utc>,
    previous_streak: Option<u32>,
) -> u32 {
    let gap_days = (now - last_visit).num_days().abs();
    if gap_days <= 1 {
        previous_streak.map(|s| s + 1).unwrap_or(1)
    } else {
        1
    }
}
