use super::domain::{CheckInScores, RatingBand, ScaleCategory};

pub const FALLBACK_INSIGHT: &str =
    "Continue monitoring your wellbeing regularly to identify patterns and trends.";

const INSIGHT_SEPARATOR: &str = "\n\n";

struct CategoryInsight {
    category: ScaleCategory,
    concern: &'static str,
    positive: &'static str,
}

const CATEGORY_INSIGHTS: [CategoryInsight; 6] = [
    CategoryInsight {
        category: ScaleCategory::Mood,
        concern: "Your mood appears to be low. Consider activities that bring you joy, spending time with loved ones, or speaking with a mental health professional if this persists.",
        positive: "Great! Your mood is positive. Keep up the activities and routines that support this state of mind.",
    },
    CategoryInsight {
        category: ScaleCategory::Anxiety,
        concern: "You are experiencing significant anxiety. Try grounding techniques like the 5-4-3-2-1 method, deep breathing, or progressive muscle relaxation. Regular exercise can also help reduce anxiety.",
        positive: "Your anxiety levels are well-managed. Continue with whatever coping strategies you are using.",
    },
    CategoryInsight {
        category: ScaleCategory::Sleep,
        concern: "Your sleep quality needs attention. Establish a consistent sleep schedule, avoid screens before bed, and create a calming bedtime routine. Consider limiting caffeine intake.",
        positive: "Excellent sleep quality! Continue maintaining your healthy sleep habits.",
    },
    CategoryInsight {
        category: ScaleCategory::Stress,
        concern: "High stress levels detected. Consider breaking tasks into smaller chunks, taking regular breaks, and practicing relaxation techniques like meditation or yoga.",
        positive: "Your stress levels are manageable. Keep maintaining a good balance between work and rest.",
    },
    CategoryInsight {
        category: ScaleCategory::Social,
        concern: "You may be feeling isolated. Reach out to friends or family, join a community group, or consider online communities with shared interests.",
        positive: "Great social connections! Maintaining close relationships is vital for mental health.",
    },
    CategoryInsight {
        category: ScaleCategory::Activities,
        concern: "Increasing engagement in activities can boost your mood. Start small with activities you used to enjoy, even if they feel challenging right now.",
        positive: "You are well-engaged in your activities. This is a positive sign for your overall wellbeing.",
    },
];

struct NoteKeywordRule {
    keywords: &'static [&'static str],
    message: &'static str,
}

const NOTE_KEYWORD_RULES: [NoteKeywordRule; 3] = [
    NoteKeywordRule {
        keywords: &["work", "job"],
        message: "Work-related concerns detected. Set clear boundaries between work and personal time, and remember to take breaks during your day.",
    },
    NoteKeywordRule {
        keywords: &["tired", "exhausted"],
        message: "You mention feeling tired. Ensure you are getting adequate rest and consider if any activities can be postponed or delegated.",
    },
    NoteKeywordRule {
        keywords: &["happy", "great", "good"],
        message: "Wonderful! It sounds like you are in a positive place. Keep journaling positive moments to maintain this momentum.",
    },
];

/// Ordered insight lines triggered by a check-in, without the fallback.
pub fn insight_lines(scores: &CheckInScores) -> Vec<&'static str> {
    let mut lines = Vec::new();

    for rule in &CATEGORY_INSIGHTS {
        match rule.category.band(scores.rating(rule.category)) {
            RatingBand::Concern => lines.push(rule.concern),
            RatingBand::Positive => lines.push(rule.positive),
            RatingBand::Neutral => {}
        }
    }

    let notes = scores.notes.to_lowercase();
    for rule in &NOTE_KEYWORD_RULES {
        if rule.keywords.iter().any(|keyword| notes.contains(keyword)) {
            lines.push(rule.message);
        }
    }

    lines
}

/// Renders the check-in insight text shown to the user.
pub fn generate_insights(scores: &CheckInScores) -> String {
    let lines = insight_lines(scores);
    if lines.is_empty() {
        FALLBACK_INSIGHT.to_string()
    } else {
        lines.join(INSIGHT_SEPARATOR)
    }
}
