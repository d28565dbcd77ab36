use serde::Serialize;

use super::domain::{questions_for, AssessmentAnswers, StressCategory, StressLevel};

/// Per-category stress percentages (0-100 for in-range answers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryScores {
    pub academic: u32,
    pub emotional: u32,
    pub social: u32,
}

impl CategoryScores {
    pub fn get(&self, category: StressCategory) -> u32 {
        match category {
            StressCategory::Academic => self.academic,
            StressCategory::Emotional => self.emotional,
            StressCategory::Social => self.social,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AssessmentResult {
    pub overall: StressLevel,
    pub scores: CategoryScores,
    /// Mean of the three category averages on the 0-4 answer scale.
    pub overall_average: f64,
}

/// Average answer for a category; unanswered questions contribute 0.
pub fn category_average(answers: &AssessmentAnswers, category: StressCategory) -> f64 {
    let (sum, count) = questions_for(category).fold((0u32, 0u32), |(sum, count), question| {
        (sum + u32::from(answers.value(question.id)), count + 1)
    });

    if count == 0 {
        0.0
    } else {
        f64::from(sum) / f64::from(count)
    }
}

fn percentage(average: f64) -> u32 {
    (average * 20.0).round() as u32
}

pub fn score_assessment(answers: &AssessmentAnswers) -> AssessmentResult {
    let academic = category_average(answers, StressCategory::Academic);
    let emotional = category_average(answers, StressCategory::Emotional);
    let social = category_average(answers, StressCategory::Social);
    let overall_average = (academic + emotional + social) / 3.0;

    AssessmentResult {
        overall: StressLevel::classify(overall_average),
        scores: CategoryScores {
            academic: percentage(academic),
            emotional: percentage(emotional),
            social: percentage(social),
        },
        overall_average,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_fours_is_high_stress() {
        let result = score_assessment(&AssessmentAnswers::from_ordered([4; 12]));
        assert_eq!(result.overall, StressLevel::High);
        assert_eq!(
            result.scores,
            CategoryScores {
                academic: 80,
                emotional: 80,
                social: 80
            }
        );
        assert!((result.overall_average - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn all_zeros_is_low_stress() {
        let result = score_assessment(&AssessmentAnswers::from_ordered([0; 12]));
        assert_eq!(result.overall, StressLevel::Low);
        assert_eq!(result.scores.academic, 0);
        assert_eq!(result.scores.emotional, 0);
        assert_eq!(result.scores.social, 0);
        assert_eq!(result.overall_average, 0.0);
    }

    #[test]
    fn mixed_answers_land_in_medium_band() {
        let answers = AssessmentAnswers::from_ordered([4, 4, 4, 4, 2, 2, 2, 2, 2, 2, 2, 2]);
        let result = score_assessment(&answers);
        assert_eq!(result.scores.academic, 80);
        assert_eq!(result.scores.emotional, 40);
        assert_eq!(result.scores.social, 40);
        assert!((result.overall_average - 8.0 / 3.0).abs() < 1e-9);
        assert_eq!(result.overall, StressLevel::Medium);
    }

    #[test]
    fn missing_answers_default_to_zero() {
        let mut answers = AssessmentAnswers::new();
        for id in ["1", "2", "3", "4"] {
            answers.set(id, 4);
        }

        let result = score_assessment(&answers);
        assert_eq!(result.scores.academic, 80);
        assert_eq!(result.scores.emotional, 0);
        assert_eq!(result.scores.social, 0);
        assert_eq!(result.overall, StressLevel::Low);
    }

    #[test]
    fn quarter_steps_round_to_whole_percentages() {
        let answers = AssessmentAnswers::from_ordered([1, 0, 0, 0, 3, 3, 3, 2, 0, 0, 0, 0]);
        let result = score_assessment(&answers);
        assert_eq!(result.scores.academic, 5);
        assert_eq!(result.scores.emotional, 55);
    }

    #[test]
    fn scoring_is_repeatable() {
        let answers = AssessmentAnswers::from_ordered([3, 1, 4, 1, 0, 2, 4, 3, 1, 1, 2, 0]);
        assert_eq!(score_assessment(&answers), score_assessment(&answers));
    }
}
