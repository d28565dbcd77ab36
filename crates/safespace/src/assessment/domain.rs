use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Largest answer value on the assessment scale.
pub const MAX_ANSWER: u8 = 4;

pub const SCALE_LABELS: [&str; 5] = ["Never", "Rarely", "Sometimes", "Often", "Always"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StressCategory {
    Academic,
    Emotional,
    Social,
}

impl StressCategory {
    pub const fn ordered() -> [Self; 3] {
        [Self::Academic, Self::Emotional, Self::Social]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Academic => "Academic Stress",
            Self::Emotional => "Emotional Fatigue",
            Self::Social => "Social Pressure",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AssessmentQuestion {
    pub id: &'static str,
    pub category: StressCategory,
    pub prompt: &'static str,
}

pub const QUESTIONS: [AssessmentQuestion; 12] = [
    AssessmentQuestion {
        id: "1",
        category: StressCategory::Academic,
        prompt: "How much academic workload is overwhelming you?",
    },
    AssessmentQuestion {
        id: "2",
        category: StressCategory::Academic,
        prompt: "How stressed do you feel about upcoming exams or deadlines?",
    },
    AssessmentQuestion {
        id: "3",
        category: StressCategory::Academic,
        prompt: "How difficult is it to concentrate on your studies?",
    },
    AssessmentQuestion {
        id: "4",
        category: StressCategory::Academic,
        prompt: "How anxious do you feel about your academic performance?",
    },
    AssessmentQuestion {
        id: "5",
        category: StressCategory::Emotional,
        prompt: "How emotionally exhausted do you feel?",
    },
    AssessmentQuestion {
        id: "6",
        category: StressCategory::Emotional,
        prompt: "How often do you feel overwhelmed by emotions?",
    },
    AssessmentQuestion {
        id: "7",
        category: StressCategory::Emotional,
        prompt: "How much do you struggle with motivation?",
    },
    AssessmentQuestion {
        id: "8",
        category: StressCategory::Emotional,
        prompt: "How often do you feel sad or anxious without a clear reason?",
    },
    AssessmentQuestion {
        id: "9",
        category: StressCategory::Social,
        prompt: "How pressured do you feel to meet social expectations?",
    },
    AssessmentQuestion {
        id: "10",
        category: StressCategory::Social,
        prompt: "How lonely do you feel despite being around others?",
    },
    AssessmentQuestion {
        id: "11",
        category: StressCategory::Social,
        prompt: "How much do social interactions drain your energy?",
    },
    AssessmentQuestion {
        id: "12",
        category: StressCategory::Social,
        prompt: "How difficult is it to maintain relationships?",
    },
];

pub fn questions_for(
    category: StressCategory,
) -> impl Iterator<Item = &'static AssessmentQuestion> {
    QUESTIONS
        .iter()
        .filter(move |question| question.category == category)
}

/// Answers keyed by question id. Ids without an answer count as 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssessmentAnswers(BTreeMap<String, u8>);

impl AssessmentAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds answers from twelve values in question order.
    pub fn from_ordered(values: [u8; 12]) -> Self {
        let answers = QUESTIONS
            .iter()
            .zip(values)
            .map(|(question, value)| (question.id.to_string(), value))
            .collect();
        Self(answers)
    }

    pub fn set(&mut self, question_id: impl Into<String>, value: u8) {
        self.0.insert(question_id.into(), value);
    }

    /// Answer for a question, 0 when absent.
    pub fn value(&self, question_id: &str) -> u8 {
        self.0.get(question_id).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Checks ids and ranges. Scoring never calls this; it is meant for
    /// request boundaries.
    pub fn validate(&self) -> Result<(), AssessmentError> {
        for (id, value) in &self.0 {
            if !QUESTIONS.iter().any(|question| question.id == id) {
                return Err(AssessmentError::UnknownQuestion(id.clone()));
            }
            if *value > MAX_ANSWER {
                return Err(AssessmentError::AnswerOutOfRange {
                    question_id: id.clone(),
                    value: *value,
                });
            }
        }
        Ok(())
    }
}

impl FromIterator<(String, u8)> for AssessmentAnswers {
    fn from_iter<T: IntoIterator<Item = (String, u8)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Overall stress classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StressLevel {
    Low,
    Medium,
    High,
}

impl StressLevel {
    pub const HIGH_THRESHOLD: f64 = 3.5;
    pub const MEDIUM_THRESHOLD: f64 = 2.5;

    pub fn classify(overall_average: f64) -> Self {
        if overall_average >= Self::HIGH_THRESHOLD {
            Self::High
        } else if overall_average >= Self::MEDIUM_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" | "moderate" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

impl fmt::Display for StressLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssessmentError {
    #[error("unknown assessment question '{0}'")]
    UnknownQuestion(String),
    #[error("answer {value} for question '{question_id}' is outside 0..=4")]
    AnswerOutOfRange { question_id: String, value: u8 },
    #[error("expected {expected} answers, received {received}")]
    AnswerCount { expected: usize, received: usize },
    #[error("invalid answer '{0}'")]
    InvalidAnswer(String),
    #[error("unknown stress level '{0}'")]
    UnknownLevel(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_bank_has_four_per_category() {
        for category in StressCategory::ordered() {
            assert_eq!(questions_for(category).count(), 4);
        }
        assert_eq!(QUESTIONS.len(), 12);
    }

    #[test]
    fn missing_answers_read_as_zero() {
        let mut answers = AssessmentAnswers::new();
        answers.set("3", 2);
        assert_eq!(answers.value("3"), 2);
        assert_eq!(answers.value("4"), 0);
    }

    #[test]
    fn validate_rejects_unknown_ids_and_large_values() {
        let mut answers = AssessmentAnswers::from_ordered([1; 12]);
        assert!(answers.validate().is_ok());

        answers.set("12", 5);
        assert_eq!(
            answers.validate(),
            Err(AssessmentError::AnswerOutOfRange {
                question_id: "12".to_string(),
                value: 5
            })
        );

        let unknown: AssessmentAnswers = [("13".to_string(), 1)].into_iter().collect();
        assert_eq!(
            unknown.validate(),
            Err(AssessmentError::UnknownQuestion("13".to_string()))
        );
    }

    #[test]
    fn classification_thresholds_are_inclusive() {
        assert_eq!(StressLevel::classify(3.5), StressLevel::High);
        assert_eq!(StressLevel::classify(3.49), StressLevel::Medium);
        assert_eq!(StressLevel::classify(2.5), StressLevel::Medium);
        assert_eq!(StressLevel::classify(2.49), StressLevel::Low);
        assert_eq!(StressLevel::classify(0.0), StressLevel::Low);
    }

    #[test]
    fn level_parse_accepts_moderate_alias() {
        assert_eq!(StressLevel::parse("Moderate"), Some(StressLevel::Medium));
        assert_eq!(StressLevel::parse("HIGH"), Some(StressLevel::High));
        assert_eq!(StressLevel::parse("severe"), None);
    }
}
