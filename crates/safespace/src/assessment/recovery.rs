use serde::Serialize;

use super::domain::StressLevel;

const RULE_WIDTH: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlanStep {
    pub day: u8,
    pub action: &'static str,
}

const LOW_STRESS_PLAN: [PlanStep; 7] = [
    PlanStep {
        day: 1,
        action: "Maintain your current sleep schedule consistently",
    },
    PlanStep {
        day: 2,
        action: "Take a 15-minute walk in nature or outdoors",
    },
    PlanStep {
        day: 3,
        action: "Practice gratitude - write down 3 things you're grateful for",
    },
    PlanStep {
        day: 4,
        action: "Spend 10 minutes on a hobby you enjoy",
    },
    PlanStep {
        day: 5,
        action: "Connect with a friend or family member",
    },
    PlanStep {
        day: 6,
        action: "Try a new healthy recipe and share it with someone",
    },
    PlanStep {
        day: 7,
        action: "Reflect on your progress and celebrate your wins",
    },
];

const MEDIUM_STRESS_PLAN: [PlanStep; 7] = [
    PlanStep {
        day: 1,
        action: "Start a 5-minute morning meditation or breathing exercise",
    },
    PlanStep {
        day: 2,
        action: "Organize one area of your space (desk, bedroom, etc.)",
    },
    PlanStep {
        day: 3,
        action: "Identify 3 stressors and write down one action for each",
    },
    PlanStep {
        day: 4,
        action: "Practice saying \"no\" to one non-essential commitment",
    },
    PlanStep {
        day: 5,
        action: "Engage in 20 minutes of physical activity you enjoy",
    },
    PlanStep {
        day: 6,
        action: "Journal about your feelings and what you've learned",
    },
    PlanStep {
        day: 7,
        action: "Schedule a break or relaxation activity just for you",
    },
];

const HIGH_STRESS_PLAN: [PlanStep; 7] = [
    PlanStep {
        day: 1,
        action: "Reach out to someone you trust and talk about how you're feeling",
    },
    PlanStep {
        day: 2,
        action: "Create a simple daily routine with 3 realistic tasks",
    },
    PlanStep {
        day: 3,
        action: "Spend 10 minutes on progressive muscle relaxation",
    },
    PlanStep {
        day: 4,
        action: "Remove one stressor or delegate a task",
    },
    PlanStep {
        day: 5,
        action: "Engage in activities that bring you joy or peace",
    },
    PlanStep {
        day: 6,
        action: "Practice self-compassion - write yourself a supportive message",
    },
    PlanStep {
        day: 7,
        action: "Review this week and identify professional support if needed",
    },
];

pub const PRO_TIPS: [&str; 4] = [
    "Check off tasks as you complete them",
    "Adapt the plan to fit your needs",
    "Track how you feel each day",
    "Be kind to yourself if you miss a day",
];

/// Seven-day action plan matched to a stress level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecoveryPlan {
    pub level: StressLevel,
    pub steps: &'static [PlanStep],
    pub tips: &'static [&'static str],
}

impl RecoveryPlan {
    pub const DOWNLOAD_NAME: &'static str = "recovery-plan.txt";

    /// Plain-text rendering offered as a download.
    pub fn render_text(&self) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        let days = self
            .steps
            .iter()
            .map(|step| format!("Day {}: {}", step.day, step.action))
            .collect::<Vec<_>>()
            .join("\n\n");

        format!(
            "7-Day Recovery Plan\n{rule}\n\nStress Level: {}\n\n{days}\n\n{rule}\nRemember: Progress over perfection!",
            self.level.as_str().to_uppercase()
        )
    }
}

pub fn recovery_plan(level: StressLevel) -> RecoveryPlan {
    let steps: &'static [PlanStep] = match level {
        StressLevel::Low => &LOW_STRESS_PLAN,
        StressLevel::Medium => &MEDIUM_STRESS_PLAN,
        StressLevel::High => &HIGH_STRESS_PLAN,
    };

    RecoveryPlan {
        level,
        steps,
        tips: &PRO_TIPS,
    }
}
