use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::CreditWiseError;
use crate::CreditWiseResult;

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Interest rates quoted as annual percentages (12 = 12% APR), matching the
/// convention of every loan formula in this crate.
pub type Rate = Decimal;

/// Credit scores are integers in [300, 900].
pub const SCORE_MIN: i32 = 300;
pub const SCORE_MAX: i32 = 900;

/// Employment category on a financial profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentType {
    #[default]
    Salaried,
    SelfEmployed,
    Student,
    Unemployed,
}

/// A user's financial profile. The owning shell holds the canonical copy and
/// replaces it wholesale on edits; calculations only ever borrow it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub age: u32,
    pub employment_type: EmploymentType,
    pub monthly_income: Money,
    pub monthly_expenses: Money,
    pub existing_loans: u32,
    pub existing_emi: Money,
}

impl UserProfile {
    /// Income remaining after expenses and existing debt service.
    /// Floored at zero.
    pub fn disposable_income(&self) -> Money {
        (self.monthly_income - self.monthly_expenses - self.existing_emi)
            .max(Decimal::ZERO)
    }

    /// Debt-to-income ratio as a percentage of monthly income.
    /// Zero income yields zero rather than a fault.
    pub fn debt_to_income(&self) -> Decimal {
        if self.monthly_income <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        (self.monthly_expenses + self.existing_emi) / self.monthly_income
            * Decimal::ONE_HUNDRED
    }

    /// Boundary validation: non-negative amounts only. Range advisories
    /// (e.g. age outside the typical 21-65 lending window) are returned as
    /// warnings, not failures.
    pub fn validate(&self) -> CreditWiseResult<Vec<String>> {
        if self.monthly_income < Decimal::ZERO {
            return Err(CreditWiseError::InvalidInput {
                field: "monthly_income".into(),
                reason: "Must be non-negative".into(),
            });
        }
        if self.monthly_expenses < Decimal::ZERO {
            return Err(CreditWiseError::InvalidInput {
                field: "monthly_expenses".into(),
                reason: "Must be non-negative".into(),
            });
        }
        if self.existing_emi < Decimal::ZERO {
            return Err(CreditWiseError::InvalidInput {
                field: "existing_emi".into(),
                reason: "Must be non-negative".into(),
            });
        }

        let mut warnings = Vec::new();
        if self.age < 21 || self.age > 65 {
            warnings.push(format!(
                "Age {} is outside the typical 21-65 lending window",
                self.age
            ));
        }
        if self.monthly_expenses + self.existing_emi > self.monthly_income {
            warnings.push(
                "Expenses plus existing EMI exceed monthly income".to_string(),
            );
        }
        Ok(warnings)
    }
}

/// One point on a credit-score trend. Immutable once produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditScoreData {
    pub date: NaiveDate,
    pub score: i32,
}

/// A single achievement in the fixed catalog. Recomputed wholesale on every
/// evaluation; `unlocked_at` is the evaluation instant, not a first-unlock
/// record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub unlocked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unlocked_at: Option<DateTime<Utc>>,
}

/// Gamification state for a user. Created with defaults on first use and
/// mutated by every XP-granting action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    /// Progression tier, >= 1. Derived from `xp`.
    pub level: u32,
    pub xp: u64,
    /// XP at which the next level begins. Derived, never set independently.
    pub xp_to_next_level: u64,
    /// Consecutive-day engagement counter, >= 1.
    pub streak: u32,
    pub last_visit: DateTime<Utc>,
    pub achievements: Vec<Achievement>,
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Variant of [`with_metadata`] for computations whose reference semantics
/// are IEEE double arithmetic rather than decimal.
pub fn with_metadata_f64<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    let mut output = with_metadata(methodology, assumptions, warnings, elapsed_us, result);
    output.metadata.precision = "ieee754_f64".to_string();
    output
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
