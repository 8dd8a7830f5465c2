//! The fixed achievement catalog.
//!
//! Every evaluation recomputes the whole catalog against the current
//! profile, score, and stats; `unlocked_at` is the evaluation instant
//! supplied by the caller, not a persisted first-unlock record. The two
//! onboarding entries are unconditionally unlocked.

use chrono::{DateTime, Utc};
use rust_decimal_macros::dec;

use crate::types::{Achievement, UserProfile, UserStats};

struct CatalogEntry {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    icon: &'static str,
}

const CATALOG: [CatalogEntry; 9] = [
    CatalogEntry {
        id: "first_login",
        title: "First Steps",
        description: "Complete your first login",
        icon: "🎯",
    },
    CatalogEntry {
        id: "profile_complete",
        title: "Profile Master",
        description: "Complete your financial profile",
        icon: "📝",
    },
    CatalogEntry {
        id: "credit_good",
        title: "Good Credit",
        description: "Achieve a credit score above 700",
        icon: "⭐",
    },
    CatalogEntry {
        id: "credit_excellent",
        title: "Excellent Credit",
        description: "Achieve a credit score above 800",
        icon: "💎",
    },
    CatalogEntry {
        id: "low_debt",
        title: "Debt-Free Hero",
        description: "Have no existing loans",
        icon: "🎈",
    },
    CatalogEntry {
        id: "savings_master",
        title: "Savings Champion",
        description: "Keep expenses below 50% of income",
        icon: "💰",
    },
    CatalogEntry {
        id: "streak_7",
        title: "Week Warrior",
        description: "7-day login streak",
        icon: "🔥",
    },
    CatalogEntry {
        id: "streak_30",
        title: "Monthly Master",
        description: "30-day login streak",
        icon: "🏆",
    },
    CatalogEntry {
        id: "financial_guru",
        title: "Financial Guru",
        description: "Reach Level 5",
        icon: "🧙",
    },
];

/// Re-evaluate the full catalog. Ordered as the catalog is declared.
pub fn evaluate_achievements(
    profile: &UserProfile,
    credit_score: i32,
    stats: &UserStats,
    now: DateTime<Utc>,
) -> Vec<Achievement> {
    CATALOG
        .iter()
        .map(|entry| {
            let unlocked = rule(entry.id, profile, credit_score, stats);
            Achievement {
                id: entry.id.to_string(),
                title: entry.title.to_string(),
                description: entry.description.to_string(),
                icon: entry.icon.to_string(),
                unlocked,
                unlocked_at: unlocked.then_some(now),
            }
        })
        .collect()
}

/// Achievements unlocked in `after` that were not unlocked in `before`.
/// Drives one-shot unlock notifications in the owning shell.
pub fn newly_unlocked(before: &[Achievement], after: &[Achievement]) -> Vec<Achievement> {
    after
        .iter()
        .filter(|a| {
            a.unlocked
                && !before
                    .iter()
                    .any(|b| b.id == a.id && b.unlocked)
        })
        .cloned()
        .collect()
}

fn rule(id: &str, profile: &UserProfile, credit_score: i32, stats: &UserStats) -> bool {
    match id {
        // Onboarding entries are unconditionally unlocked.
        "first_login" | "profile_complete" => true,
        "credit_good" => credit_score >= 700,
        "credit_excellent" => credit_score >= 800,
        "low_debt" => profile.existing_loans == 0,
        "savings_master" => {
            profile.monthly_expenses < profile.monthly_income * dec!(0.5)
        }
        "streak_7" => stats.streak >= 7,
        "streak_30" => stats.streak >= 30,
        "financial_guru" => stats.level >= 5,
        _ => false,
    }
}
