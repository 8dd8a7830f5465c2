mod commands;
mod input;
mod output;
mod store;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::gamification::{AchievementsArgs, AwardArgs, LoginArgs, StreakArgs};
use commands::lending::{CompareArgs, EligibilityArgs, EmiArgs};
use commands::literacy::{QuizArgs, TipArgs};
use commands::scoring::{HistoryArgs, ScoreArgs, SimulateArgs};

/// Credit health, loan, and gamified financial-literacy calculations
#[derive(Parser)]
#[command(
    name = "cwise",
    version,
    about = "Credit health, loan, and gamified financial-literacy calculations",
    long_about = "A CLI for the CreditWise calculation engine: heuristic credit \
                  scoring with a synthetic trend, EMI and amortization math, \
                  loan eligibility and lender comparison, plus the XP/level/\
                  streak/achievement gamification layer."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate a credit score from a financial profile
    Score(ScoreArgs),
    /// Generate a synthetic 12-month score trend
    History(HistoryArgs),
    /// Project the score impact of profile changes
    Simulate(SimulateArgs),
    /// Calculate EMI, totals, and the amortization schedule
    Emi(EmiArgs),
    /// Estimate the maximum affordable loan principal
    Eligibility(EligibilityArgs),
    /// Compare a loan across lender products
    Compare(CompareArgs),
    /// Grant XP for an action and report the resulting level
    Award(AwardArgs),
    /// Compute a login streak from the previous visit
    Streak(StreakArgs),
    /// Evaluate the achievement catalog
    Achievements(AchievementsArgs),
    /// Record a login against a persisted session file
    Login(LoginArgs),
    /// List quiz questions or grade an answer
    Quiz(QuizArgs),
    /// Print the financial tip of the day
    Tip(TipArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Score(args) => commands::scoring::run_score(args),
        Commands::History(args) => commands::scoring::run_history(args),
        Commands::Simulate(args) => commands::scoring::run_simulate(args),
        Commands::Emi(args) => commands::lending::run_emi(args),
        Commands::Eligibility(args) => commands::lending::run_eligibility(args),
        Commands::Compare(args) => commands::lending::run_compare(args),
        Commands::Award(args) => commands::gamification::run_award(args),
        Commands::Streak(args) => commands::gamification::run_streak(args),
        Commands::Achievements(args) => commands::gamification::run_achievements(args),
        Commands::Login(args) => commands::gamification::run_login(args),
        Commands::Quiz(args) => commands::literacy::run_quiz(args),
        Commands::Tip(args) => commands::literacy::run_tip(args),
        Commands::Version => {
            println!("cwise {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
