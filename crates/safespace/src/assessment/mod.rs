//! Twelve-question stress assessment: scoring, summaries and recovery plans.

pub mod domain;
mod recovery;
mod scoring;
mod summary;

pub use domain::{
    questions_for, AssessmentAnswers, AssessmentError, AssessmentQuestion, StressCategory,
    StressLevel, MAX_ANSWER, QUESTIONS, SCALE_LABELS,
};
pub use recovery::{recovery_plan, PlanStep, RecoveryPlan, PRO_TIPS};
pub use scoring::{category_average, score_assessment, AssessmentResult, CategoryScores};
pub use summary::{dominant_category, level_overview, summarize, AssessmentSummary};

use serde::Serialize;

/// Everything shown after an assessment is submitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentReport {
    pub result: AssessmentResult,
    pub summary: AssessmentSummary,
    pub recovery_plan: RecoveryPlan,
}

impl AssessmentReport {
    pub fn build(answers: &AssessmentAnswers) -> Self {
        let result = score_assessment(answers);
        Self {
            summary: summarize(&result),
            recovery_plan: recovery_plan(result.overall),
            result,
        }
    }
}

/// Parses a comma separated list of twelve answers in question order.
pub fn parse_ordered_answers(raw: &str) -> Result<AssessmentAnswers, AssessmentError> {
    let values = raw
        .split(',')
        .map(|part| {
            let part = part.trim();
            part.parse::<u8>()
                .map_err(|_| AssessmentError::InvalidAnswer(part.to_string()))
        })
        .collect::<Result<Vec<u8>, _>>()?;

    let ordered: [u8; 12] = values
        .as_slice()
        .try_into()
        .map_err(|_| AssessmentError::AnswerCount {
            expected: QUESTIONS.len(),
            received: values.len(),
        })?;

    let answers = AssessmentAnswers::from_ordered(ordered);
    answers.validate()?;
    Ok(answers)
}
