//! XP, levels, and action rewards.
//!
//! The level curve is `floor(sqrt(xp / 100)) + 1`, so level N begins at
//! exactly (N-1)^2 * 100 XP and `xp_threshold_for_level` marks where the
//! next level starts.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::types::UserStats;

/// XP per unit of the quadratic level curve.
const XP_CURVE_SCALE: u64 = 100;

/// Reward granted for action names outside the known set. Unknown actions
/// never fail.
const FALLBACK_XP: u64 = 5;

/// The closed set of rewardable actions. Free-form action names parse into
/// `Other`, which earns the fallback reward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum XpAction {
    Login,
    ProfileUpdate,
    CalculatorUse,
    ComparisonView,
    EligibilityCheck,
    SimulatorUse,
    #[serde(other)]
    Other,
}

impl FromStr for XpAction {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "login" => XpAction::Login,
            "profile_update" => XpAction::ProfileUpdate,
            "calculator_use" => XpAction::CalculatorUse,
            "comparison_view" => XpAction::ComparisonView,
            "eligibility_check" => XpAction::EligibilityCheck,
            "simulator_use" => XpAction::SimulatorUse,
            _ => XpAction::Other,
        })
    }
}

impl std::fmt::Display for XpAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            XpAction::Login => write!(f, "login"),
            XpAction::ProfileUpdate => write!(f, "profile_update"),
            XpAction::CalculatorUse => write!(f, "calculator_use"),
            XpAction::ComparisonView => write!(f, "comparison_view"),
            XpAction::EligibilityCheck => write!(f, "eligibility_check"),
            XpAction::SimulatorUse => write!(f, "simulator_use"),
            XpAction::Other => write!(f, "other"),
        }
    }
}

/// XP granted for an action.
pub fn xp_reward(action: XpAction) -> u64 {
    match action {
        XpAction::Login => 10,
        XpAction::ProfileUpdate => 20,
        XpAction::CalculatorUse => 15,
        XpAction::ComparisonView => 15,
        XpAction::EligibilityCheck => 25,
        XpAction::SimulatorUse => 30,
        XpAction::Other => FALLBACK_XP,
    }
}

/// Level for a cumulative XP total. Monotonic non-decreasing, starts at 1.
pub fn level_from_xp(xp: u64) -> u32 {
    ((xp / XP_CURVE_SCALE) as f64).sqrt() as u32 + 1
}

/// XP at which `level + 1` begins: `level^2 * 100`.
pub fn xp_threshold_for_level(level: u32) -> u64 {
    (level as u64).pow(2) * XP_CURVE_SCALE
}

/// Apply an action's reward to the stats, recomputing the level and the
/// next-level threshold. Streak and visit bookkeeping are left to the
/// session layer.
pub fn award_action(stats: &UserStats, action: XpAction) -> UserStats {
    let xp = stats.xp + xp_reward(action);
    let level = level_from_xp(xp);
    UserStats {
        xp,
        level,
        xp_to_next_level: xp_threshold_for_level(level),
        ..stats.clone()
    }
}
