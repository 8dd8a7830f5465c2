use chrono::{NaiveDate, Utc};
use clap::Args;
use serde_json::Value;

use creditwise_core::history::generator::{generate_score_history, HistoryInput};
use creditwise_core::scoring::estimate::calculate_credit_score;
use creditwise_core::scoring::simulator::{simulate_score, SimulationInput};

use crate::commands::ProfileArgs;
use crate::input;

/// Arguments for credit-score estimation
#[derive(Args)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub profile: ProfileArgs,
}

/// Arguments for trend generation
#[derive(Args)]
pub struct HistoryArgs {
    /// Current score the trend ends at
    #[arg(long)]
    pub score: i32,

    /// Number of monthly points
    #[arg(long, default_value_t = 12)]
    pub months: u32,

    /// Newest month of the trend (YYYY-MM-DD, default today)
    #[arg(long)]
    pub as_of: Option<NaiveDate>,

    /// Seed for a reproducible walk
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Arguments for the what-if simulator
#[derive(Args)]
pub struct SimulateArgs {
    /// Path to a JSON file holding {"current": ..., "adjusted": ...}
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_score(args: ScoreArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let profile = args.profile.resolve()?;
    let result = calculate_credit_score(&profile)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_history(args: HistoryArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let input = HistoryInput {
        current_score: args.score,
        as_of: args.as_of.unwrap_or_else(|| Utc::now().date_naive()),
        months: args.months,
        seed: args.seed,
    };
    let result = generate_score_history(&input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_simulate(args: SimulateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let sim_input: SimulationInput = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--input file with current and adjusted profiles is required".into());
    };

    let result = simulate_score(&sim_input)?;
    Ok(serde_json::to_value(result)?)
}
