use serde::Serialize;

use super::domain::{CheckInScores, Polarity, ScaleCategory};

/// Highest rating on the check-in scale.
pub const FULL_MARK: i64 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WellbeingDimension {
    pub category: ScaleCategory,
    pub label: &'static str,
    /// Rating flipped so that higher is always better.
    pub score: i64,
    pub full_mark: i64,
}

/// Polarity-normalized view of one check-in, as plotted on a radar chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WellbeingProfile {
    pub dimensions: Vec<WellbeingDimension>,
    /// Mean normalized rating scaled to a percentage.
    pub overall_score: i64,
}

pub fn normalized_rating(category: ScaleCategory, rating: i64) -> i64 {
    match category.polarity() {
        Polarity::Direct => rating,
        Polarity::Inverted => (FULL_MARK + 1).saturating_sub(rating),
    }
}

pub fn wellbeing_profile(scores: &CheckInScores) -> WellbeingProfile {
    let dimensions: Vec<WellbeingDimension> = ScaleCategory::ordered()
        .into_iter()
        .map(|category| WellbeingDimension {
            category,
            label: category.label(),
            score: normalized_rating(category, scores.rating(category)),
            full_mark: FULL_MARK,
        })
        .collect();

    let total: f64 = dimensions.iter().map(|dimension| dimension.score as f64).sum();
    let mean = total / dimensions.len() as f64;

    WellbeingProfile {
        dimensions,
        overall_score: (mean * 20.0).round() as i64,
    }
}

/// Overall wellbeing percentage for a check-in.
pub fn wellbeing_score(scores: &CheckInScores) -> i64 {
    wellbeing_profile(scores).overall_score
}
