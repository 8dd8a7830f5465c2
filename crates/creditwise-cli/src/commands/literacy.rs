use chrono::Utc;
use clap::Args;
use serde_json::{json, Value};

use creditwise_core::literacy::content::QUIZ_QUESTIONS;
use creditwise_core::literacy::quiz::{find_question, grade_answer, tip_of_the_day};

/// Arguments for the quiz
#[derive(Args)]
pub struct QuizArgs {
    /// Question id to answer (omit to list the question bank)
    #[arg(long)]
    pub question: Option<String>,

    /// Selected option index (0-based)
    #[arg(long)]
    pub answer: Option<usize>,
}

/// Arguments for the daily tip
#[derive(Args)]
pub struct TipArgs {
    /// Date to pick the tip for (YYYY-MM-DD, default today)
    #[arg(long)]
    pub date: Option<chrono::NaiveDate>,
}

pub fn run_quiz(args: QuizArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let Some(ref id) = args.question else {
        // No question selected: show the bank without the answer keys
        let bank: Vec<Value> = QUIZ_QUESTIONS
            .iter()
            .map(|q| {
                json!({
                    "id": q.id,
                    "question": q.question,
                    "options": q.options,
                    "xpReward": q.xp_reward,
                })
            })
            .collect();
        return Ok(json!({ "result": bank }));
    };

    let question = find_question(id).ok_or_else(|| format!("Unknown question id '{id}'"))?;
    let selected = args
        .answer
        .ok_or("--answer is required when --question is given")?;

    let outcome = grade_answer(question, selected)?;
    Ok(json!({ "result": outcome }))
}

pub fn run_tip(args: TipArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let date = args.date.unwrap_or_else(|| Utc::now().date_naive());
    let tip = tip_of_the_day(date);
    Ok(json!({ "result": tip }))
}
