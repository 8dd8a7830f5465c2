//! Quiz grading and the daily-tip rotation.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::error::CreditWiseError;
use crate::literacy::content::{DailyTip, QuizQuestion, DAILY_TIPS, QUIZ_QUESTIONS};
use crate::CreditWiseResult;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizOutcome {
    pub question_id: &'static str,
    pub correct: bool,
    /// The question's reward when correct, zero otherwise.
    pub xp_awarded: u64,
    pub explanation: &'static str,
}

/// Look up a question by id.
pub fn find_question(id: &str) -> Option<&'static QuizQuestion> {
    QUIZ_QUESTIONS.iter().find(|q| q.id == id)
}

/// Grade a selected option against a question.
pub fn grade_answer(
    question: &'static QuizQuestion,
    selected: usize,
) -> CreditWiseResult<QuizOutcome> {
    if selected >= question.options.len() {
        return Err(CreditWiseError::InvalidInput {
            field: "selected".into(),
            reason: format!(
                "Option index {selected} out of range for {} options",
                question.options.len()
            ),
        });
    }

    let correct = selected == question.correct_answer;
    Ok(QuizOutcome {
        question_id: question.id,
        correct,
        xp_awarded: if correct { question.xp_reward } else { 0 },
        explanation: question.explanation,
    })
}

/// The tip for a given day: day-of-year rotation through the catalog.
pub fn tip_of_the_day(date: NaiveDate) -> &'static DailyTip {
    let index = (date.ordinal0() as usize) % DAILY_TIPS.len();
    &DAILY_TIPS[index]
}
