use clap::Args;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::Value;

use creditwise_core::lending::comparison::{compare_loans, ComparisonInput};
use creditwise_core::lending::eligibility::{check_eligibility, EligibilityInput};
use creditwise_core::lending::emi::{calculate_emi, EmiInput};

use crate::commands::ProfileArgs;
use crate::input;

/// Arguments for EMI calculation
#[derive(Args)]
pub struct EmiArgs {
    /// Loan principal
    #[arg(long)]
    pub principal: Decimal,

    /// Annual interest rate as a percentage (12 = 12% APR)
    #[arg(long, alias = "apr")]
    pub rate: Decimal,

    /// Tenure in months
    #[arg(long)]
    pub months: u32,

    /// Include the month-by-month amortization schedule
    #[arg(long)]
    pub schedule: bool,
}

/// Arguments for the eligibility estimate
#[derive(Args)]
pub struct EligibilityArgs {
    #[command(flatten)]
    pub profile: ProfileArgs,

    /// Assumed tenure in months
    #[arg(long, default_value_t = 60)]
    pub term_months: u32,

    /// Assumed APR percentage
    #[arg(long, default_value_t = dec!(12))]
    pub rate: Decimal,

    /// Fraction of disposable income committed to the EMI
    #[arg(long, default_value_t = dec!(0.4))]
    pub safe_emi_fraction: Decimal,

    /// Minimum principal for a loan to be worth originating
    #[arg(long, default_value_t = dec!(100000))]
    pub min_principal: Decimal,
}

/// Arguments for lender comparison
#[derive(Args)]
pub struct CompareArgs {
    /// Path to a ComparisonInput JSON file (products, principal, term)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_emi(args: EmiArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let input = EmiInput {
        principal: args.principal,
        annual_rate_pct: args.rate,
        term_months: args.months,
        include_schedule: args.schedule,
    };
    let result = calculate_emi(&input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_eligibility(args: EligibilityArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let input = EligibilityInput {
        profile: args.profile.resolve()?,
        term_months: args.term_months,
        annual_rate_pct: args.rate,
        safe_emi_fraction: args.safe_emi_fraction,
        min_principal: args.min_principal,
    };
    let result = check_eligibility(&input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_compare(args: CompareArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let input: ComparisonInput = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--input file with loan products is required".into());
    };

    let result = compare_loans(&input)?;
    Ok(serde_json::to_value(result)?)
}
