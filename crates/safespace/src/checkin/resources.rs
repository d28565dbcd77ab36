use serde::Serialize;

use super::domain::{CheckInScores, RatingBand, ScaleCategory};

/// Actionable guidance bundle attached to a check-in report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResourceRecommendation {
    pub title: &'static str,
    pub description: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub tips: &'static [&'static str],
}

const CATEGORY_RESOURCES: [(ScaleCategory, ResourceRecommendation); 6] = [
    (
        ScaleCategory::Mood,
        ResourceRecommendation {
            title: "Mood Lifting Strategies",
            description: "Evidence-based techniques to improve your mood",
            kind: "Emotional Wellbeing",
            tips: &[
                "Practice gratitude journaling - write 3 things you appreciate daily",
                "Engage in physical activity, even a 10-minute walk",
                "Reach out to someone you trust",
                "Do something kind for others",
                "Get sunlight exposure, which helps regulate mood",
            ],
        },
    ),
    (
        ScaleCategory::Anxiety,
        ResourceRecommendation {
            title: "Anxiety Management Techniques",
            description: "Tools to manage and reduce anxiety",
            kind: "Anxiety Support",
            tips: &[
                "Box breathing: Inhale 4 counts, hold 4, exhale 4, hold 4",
                "5-4-3-2-1 grounding: Notice 5 things you see, 4 you feel, 3 you hear, 2 you smell, 1 you taste",
                "Progressive muscle relaxation to release physical tension",
                "Limit caffeine and ensure adequate sleep",
                "Practice mindfulness meditation for 10-15 minutes daily",
            ],
        },
    ),
    (
        ScaleCategory::Sleep,
        ResourceRecommendation {
            title: "Sleep Hygiene Guide",
            description: "Improve your sleep quality naturally",
            kind: "Sleep Health",
            tips: &[
                "Go to bed and wake up at the same time every day",
                "Avoid screens 30-60 minutes before bed",
                "Keep your bedroom cool, dark, and quiet",
                "Avoid large meals, caffeine, and alcohol before bed",
                "Try relaxation techniques like reading or gentle stretching before sleep",
            ],
        },
    ),
    (
        ScaleCategory::Stress,
        ResourceRecommendation {
            title: "Stress Reduction Strategies",
            description: "Effective ways to manage and reduce stress",
            kind: "Stress Management",
            tips: &[
                "Break tasks into smaller, manageable steps",
                "Practice time management and prioritization",
                "Take regular breaks throughout your day",
                "Try deep breathing or meditation",
                "Exercise regularly - even 30 minutes a day helps",
            ],
        },
    ),
    (
        ScaleCategory::Social,
        ResourceRecommendation {
            title: "Building Social Connections",
            description: "Ways to strengthen relationships and community",
            kind: "Social Support",
            tips: &[
                "Send a message to someone you care about",
                "Join a club, class, or group activity",
                "Volunteer in your community",
                "Schedule regular video calls with distant friends",
                "Practice active listening in conversations",
            ],
        },
    ),
    (
        ScaleCategory::Activities,
        ResourceRecommendation {
            title: "Building Motivation and Engagement",
            description: "Strategies to increase daily activities and engagement",
            kind: "Lifestyle",
            tips: &[
                "Start with one small activity you enjoy",
                "Set realistic daily goals",
                "Create a routine with structure",
                "Use positive self-talk and celebrate small wins",
                "Consider behavioral activation therapy approaches",
            ],
        },
    ),
];

pub const GENERAL_WELLNESS: ResourceRecommendation = ResourceRecommendation {
    title: "General Wellness Practices",
    description: "Universal practices for maintaining good mental health",
    kind: "Wellness",
    tips: &[
        "Regular physical activity supports mental health",
        "Maintain a balanced diet and stay hydrated",
        "Practice regular meditation or mindfulness",
        "Set healthy boundaries in relationships and work",
        "Keep a journal to track your thoughts and feelings",
    ],
};

/// Resource bundle for a category's concern band.
pub fn resource_for(category: ScaleCategory) -> ResourceRecommendation {
    CATEGORY_RESOURCES
        .iter()
        .find(|(candidate, _)| *candidate == category)
        .map(|(_, resource)| *resource)
        .unwrap_or(GENERAL_WELLNESS)
}

/// Picks one resource per category in its concern band; positive bands
/// contribute nothing. Falls back to [`GENERAL_WELLNESS`] when nothing fires.
pub fn recommend_resources(scores: &CheckInScores) -> Vec<ResourceRecommendation> {
    let mut resources: Vec<ResourceRecommendation> = CATEGORY_RESOURCES
        .iter()
        .filter(|(category, _)| category.band(scores.rating(*category)) == RatingBand::Concern)
        .map(|(_, resource)| *resource)
        .collect();

    if resources.is_empty() {
        resources.push(GENERAL_WELLNESS);
    }

    resources
}
