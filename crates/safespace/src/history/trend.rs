use chrono::{DateTime, Utc};
use serde::Serialize;

use super::domain::{CheckInId, CheckInRecord};
use crate::checkin::wellbeing_score;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    pub id: CheckInId,
    /// Short axis label such as `Mar 4`.
    pub date: String,
    pub timestamp: DateTime<Utc>,
    pub score: i64,
}

/// Wellbeing scores over time plus the headline statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryTrend {
    pub points: Vec<TrendPoint>,
    pub latest_score: i64,
    pub average_score: i64,
    pub total_check_ins: usize,
}

impl HistoryTrend {
    /// A line needs at least two points to be worth drawing.
    pub fn is_chartable(&self) -> bool {
        self.points.len() > 1
    }
}

pub fn build_trend(records: &[CheckInRecord]) -> HistoryTrend {
    let mut points: Vec<TrendPoint> = records
        .iter()
        .map(|record| TrendPoint {
            id: record.id.clone(),
            date: record.timestamp.format("%b %-d").to_string(),
            timestamp: record.timestamp,
            score: wellbeing_score(&record.scores()),
        })
        .collect();
    points.sort_by(|a, b| a.timestamp.cmp(&b.timestamp).then_with(|| a.id.cmp(&b.id)));

    let latest_score = points.last().map(|point| point.score).unwrap_or(0);
    let average_score = if points.is_empty() {
        0
    } else {
        let total: f64 = points.iter().map(|point| point.score as f64).sum();
        (total / points.len() as f64).round() as i64
    };

    HistoryTrend {
        total_check_ins: points.len(),
        points,
        latest_score,
        average_score,
    }
}
