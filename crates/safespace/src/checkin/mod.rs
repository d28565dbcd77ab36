//! Check-in evaluation: threshold insights, resource recommendations and the
//! polarity-normalized wellbeing score.

pub mod domain;
mod insights;
mod resources;
mod wellbeing;

pub use domain::{
    is_truthy, parse_scale, CheckInResponses, CheckInScores, Polarity, RatingBand, ScaleCategory,
    NEUTRAL_RATING,
};
pub use insights::{generate_insights, insight_lines, FALLBACK_INSIGHT};
pub use resources::{recommend_resources, resource_for, ResourceRecommendation, GENERAL_WELLNESS};
pub use wellbeing::{
    normalized_rating, wellbeing_profile, wellbeing_score, WellbeingDimension, WellbeingProfile,
    FULL_MARK,
};

use serde::Serialize;

/// Insight text and resources produced for one check-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckInReport {
    pub insights: String,
    pub resources: Vec<ResourceRecommendation>,
}

impl CheckInReport {
    pub fn from_scores(scores: &CheckInScores) -> Self {
        Self {
            insights: generate_insights(scores),
            resources: recommend_resources(scores),
        }
    }
}

pub fn evaluate_check_in(responses: &CheckInResponses) -> CheckInReport {
    CheckInReport::from_scores(&responses.scores())
}
