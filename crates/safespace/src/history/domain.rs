use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::checkin::{CheckInReport, CheckInResponses, CheckInScores, WellbeingProfile};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CheckInId(pub String);

impl CheckInId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CheckInId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One stored check-in submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckInRecord {
    pub id: CheckInId,
    pub timestamp: DateTime<Utc>,
    pub responses: CheckInResponses,
}

impl CheckInRecord {
    pub fn scores(&self) -> CheckInScores {
        self.responses.scores()
    }

    pub fn summary_view(&self) -> CheckInSummaryView {
        CheckInSummaryView {
            id: self.id.clone(),
            timestamp: self.timestamp,
            wellbeing_score: crate::checkin::wellbeing_score(&self.scores()),
        }
    }

    pub fn detail_view(&self) -> CheckInDetailView {
        let scores = self.scores();
        CheckInDetailView {
            record: self.clone(),
            wellbeing: crate::checkin::wellbeing_profile(&scores),
            report: CheckInReport::from_scores(&scores),
        }
    }
}

/// List entry for the history page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckInSummaryView {
    pub id: CheckInId,
    pub timestamp: DateTime<Utc>,
    pub wellbeing_score: i64,
}

/// Results page payload for a stored check-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckInDetailView {
    pub record: CheckInRecord,
    pub wellbeing: WellbeingProfile,
    pub report: CheckInReport,
}
