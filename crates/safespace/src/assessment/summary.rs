use serde::Serialize;

use super::domain::{StressCategory, StressLevel};
use super::scoring::AssessmentResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessmentSummary {
    pub level: StressLevel,
    pub title: &'static str,
    pub message: &'static str,
    pub dominant_category: StressCategory,
    pub insight: &'static str,
}

pub const fn level_overview(level: StressLevel) -> (&'static str, &'static str) {
    match level {
        StressLevel::Low => (
            "Low Stress Level",
            "You seem to be managing well. Keep maintaining healthy habits!",
        ),
        StressLevel::Medium => (
            "Moderate Stress Level",
            "You could benefit from some additional self-care. Check out our resources.",
        ),
        StressLevel::High => (
            "High Stress Level",
            "Consider reaching out for support. We have resources available.",
        ),
    }
}

const fn category_insight(category: StressCategory) -> &'static str {
    match category {
        StressCategory::Academic => "Your academic stress is notably high. Consider time management strategies and breaking tasks into smaller steps.",
        StressCategory::Emotional => "Your emotional fatigue is elevated. Practice self-compassion and consider activities that help you recharge.",
        StressCategory::Social => "Your social pressure is significant. Remember to set boundaries and engage in activities you truly enjoy.",
    }
}

/// Category with the highest score; ties go to the earlier category.
pub fn dominant_category(result: &AssessmentResult) -> StressCategory {
    StressCategory::ordered()
        .into_iter()
        .fold(StressCategory::Academic, |best, candidate| {
            if result.scores.get(candidate) > result.scores.get(best) {
                candidate
            } else {
                best
            }
        })
}

pub fn summarize(result: &AssessmentResult) -> AssessmentSummary {
    let (title, message) = level_overview(result.overall);
    let dominant = dominant_category(result);

    AssessmentSummary {
        level: result.overall,
        title,
        message,
        dominant_category: dominant,
        insight: category_insight(dominant),
    }
}
