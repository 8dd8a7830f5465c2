pub mod gamification;
pub mod lending;
pub mod literacy;
pub mod scoring;

use creditwise_core::{EmploymentType, UserProfile};
use rust_decimal::Decimal;

/// Shared profile flags used by every profile-driven command.
#[derive(clap::Args)]
pub struct ProfileArgs {
    /// Path to a UserProfile JSON file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Applicant name
    #[arg(long, default_value = "User")]
    pub name: String,

    /// Applicant age in years
    #[arg(long, default_value_t = 30)]
    pub age: u32,

    /// Employment type: salaried, self-employed, student, unemployed
    #[arg(long, default_value = "salaried")]
    pub employment_type: String,

    /// Monthly income
    #[arg(long)]
    pub monthly_income: Option<Decimal>,

    /// Monthly expenses
    #[arg(long)]
    pub monthly_expenses: Option<Decimal>,

    /// Number of existing loans
    #[arg(long, default_value_t = 0)]
    pub existing_loans: u32,

    /// Total EMI already being serviced each month
    #[arg(long, default_value_t = Decimal::ZERO)]
    pub existing_emi: Decimal,
}

impl ProfileArgs {
    /// Materialise the profile: file input wins, then piped stdin, then flags.
    pub fn resolve(&self) -> Result<UserProfile, Box<dyn std::error::Error>> {
        if let Some(ref path) = self.input {
            return crate::input::read_json(path);
        }
        if let Some(data) = crate::input::read_stdin()? {
            return Ok(serde_json::from_value(data)?);
        }

        let employment_type = match self.employment_type.as_str() {
            "salaried" => EmploymentType::Salaried,
            "self-employed" => EmploymentType::SelfEmployed,
            "student" => EmploymentType::Student,
            "unemployed" => EmploymentType::Unemployed,
            other => return Err(format!("Unknown employment type '{other}'").into()),
        };

        Ok(UserProfile {
            name: self.name.clone(),
            age: self.age,
            employment_type,
            monthly_income: self
                .monthly_income
                .ok_or("--monthly-income is required (or provide --input)")?,
            monthly_expenses: self
                .monthly_expenses
                .ok_or("--monthly-expenses is required (or provide --input)")?,
            existing_loans: self.existing_loans,
            existing_emi: self.existing_emi,
        })
    }
}
