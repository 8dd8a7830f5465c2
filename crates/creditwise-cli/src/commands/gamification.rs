use chrono::{DateTime, Utc};
use clap::Args;
use serde_json::{json, Value};

use creditwise_core::gamification::achievements::evaluate_achievements;
use creditwise_core::gamification::progression::{
    level_from_xp, xp_reward, xp_threshold_for_level, XpAction,
};
use creditwise_core::gamification::streak::compute_streak;
use creditwise_core::scoring::estimate::estimate_score;
use creditwise_core::session::{new_session, normalize_stats, record_login, SessionStore};
use creditwise_core::UserStats;

use crate::commands::ProfileArgs;
use crate::store::JsonFileStore;

/// Arguments for granting XP
#[derive(Args)]
pub struct AwardArgs {
    /// Action name (unknown names earn the fallback reward)
    #[arg(long)]
    pub action: String,

    /// Current XP total to add the reward to
    #[arg(long, default_value_t = 0)]
    pub xp: u64,
}

/// Arguments for streak computation
#[derive(Args)]
pub struct StreakArgs {
    /// Previous visit timestamp (RFC 3339)
    #[arg(long)]
    pub last_visit: DateTime<Utc>,

    /// Previously persisted streak, if any
    #[arg(long)]
    pub previous: Option<u32>,
}

/// Arguments for achievement evaluation
#[derive(Args)]
pub struct AchievementsArgs {
    #[command(flatten)]
    pub profile: ProfileArgs,

    /// Credit score (default: estimated from the profile)
    #[arg(long)]
    pub score: Option<i32>,

    /// Current login streak
    #[arg(long, default_value_t = 1)]
    pub streak: u32,

    /// Current level
    #[arg(long, default_value_t = 1)]
    pub level: u32,
}

/// Arguments for the persisted-session login
#[derive(Args)]
pub struct LoginArgs {
    /// Path to the session state file (created on first login)
    #[arg(long)]
    pub state: String,

    #[command(flatten)]
    pub profile: ProfileArgs,
}

pub fn run_award(args: AwardArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let action: XpAction = args.action.parse()?;
    let awarded = xp_reward(action);
    let total = args.xp + awarded;
    let level = level_from_xp(total);

    Ok(json!({
        "result": {
            "action": action.to_string(),
            "xpAwarded": awarded,
            "totalXp": total,
            "level": level,
            "xpToNextLevel": xp_threshold_for_level(level),
        }
    }))
}

pub fn run_streak(args: StreakArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let streak = compute_streak(args.last_visit, Utc::now(), args.previous);
    Ok(json!({ "result": { "streak": streak } }))
}

pub fn run_achievements(args: AchievementsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let profile = args.profile.resolve()?;
    let score = args.score.unwrap_or_else(|| estimate_score(&profile));
    let now = Utc::now();

    let stats = UserStats {
        level: args.level,
        xp: 0,
        xp_to_next_level: xp_threshold_for_level(args.level),
        streak: args.streak,
        last_visit: now,
        achievements: Vec::new(),
    };

    let achievements = evaluate_achievements(&profile, score, &stats, now);
    Ok(json!({ "result": achievements }))
}

pub fn run_login(args: LoginArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let store = JsonFileStore::new(&args.state);
    let now = Utc::now();

    let state = match store.load()? {
        Some(mut existing) => {
            existing.stats = normalize_stats(&existing.stats);
            existing
        }
        None => new_session(args.profile.resolve()?, now),
    };

    let after = record_login(&state, now);
    store.save(&after)?;

    Ok(serde_json::to_value(&after.stats)?)
}
