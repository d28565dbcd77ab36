use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Rating used whenever a scale answer is missing or unreadable.
pub const NEUTRAL_RATING: i64 = 3;

/// Direction in which a rating improves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    /// Higher ratings are better (mood, sleep, ...).
    Direct,
    /// Higher ratings are worse (anxiety, stress).
    Inverted,
}

/// Threshold band a rating falls into for its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingBand {
    Concern,
    Neutral,
    Positive,
}

/// The six Likert-rated check-in questions, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleCategory {
    Mood,
    Anxiety,
    Sleep,
    Stress,
    Social,
    Activities,
}

impl ScaleCategory {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Mood,
            Self::Anxiety,
            Self::Sleep,
            Self::Stress,
            Self::Social,
            Self::Activities,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Mood => "mood",
            Self::Anxiety => "anxiety",
            Self::Sleep => "sleep",
            Self::Stress => "stress",
            Self::Social => "social",
            Self::Activities => "activities",
        }
    }

    /// Short label used for chart axes.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Mood => "Mood",
            Self::Anxiety => "Anxiety",
            Self::Sleep => "Sleep",
            Self::Stress => "Stress",
            Self::Social => "Connection",
            Self::Activities => "Engagement",
        }
    }

    pub const fn polarity(self) -> Polarity {
        match self {
            Self::Anxiety | Self::Stress => Polarity::Inverted,
            _ => Polarity::Direct,
        }
    }

    /// Classifies a rating: `<= 2` and `>= 4` are the two bands, swapped for
    /// inverted categories. Everything else (including 3) is neutral.
    pub fn band(self, rating: i64) -> RatingBand {
        let (low, high) = match self.polarity() {
            Polarity::Direct => (RatingBand::Concern, RatingBand::Positive),
            Polarity::Inverted => (RatingBand::Positive, RatingBand::Concern),
        };

        if rating <= 2 {
            low
        } else if rating >= 4 {
            high
        } else {
            RatingBand::Neutral
        }
    }
}

/// Check-in answers as submitted by a client.
///
/// Each field holds the raw answer text. Empty JSON values (`null`, `false`,
/// `0`, `""`) are treated as unanswered and any other rating value is kept
/// in textual form, so the single conversion in
/// [`CheckInScores::from_responses`] decides what it means. Notes must be
/// text when present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckInResponses {
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub anxiety: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub sleep: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub stress: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub social: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub activities: Option<String>,
    #[serde(default, deserialize_with = "notes_text", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl CheckInResponses {
    pub fn raw(&self, category: ScaleCategory) -> Option<&str> {
        let value = match category {
            ScaleCategory::Mood => &self.mood,
            ScaleCategory::Anxiety => &self.anxiety,
            ScaleCategory::Sleep => &self.sleep,
            ScaleCategory::Stress => &self.stress,
            ScaleCategory::Social => &self.social,
            ScaleCategory::Activities => &self.activities,
        };
        value.as_deref()
    }

    pub fn set(&mut self, category: ScaleCategory, value: impl Into<String>) {
        let slot = match category {
            ScaleCategory::Mood => &mut self.mood,
            ScaleCategory::Anxiety => &mut self.anxiety,
            ScaleCategory::Sleep => &mut self.sleep,
            ScaleCategory::Stress => &mut self.stress,
            ScaleCategory::Social => &mut self.social,
            ScaleCategory::Activities => &mut self.activities,
        };
        *slot = Some(value.into());
    }

    pub fn scores(&self) -> CheckInScores {
        CheckInScores::from_responses(self)
    }
}

/// Typed check-in ratings with defaults already applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckInScores {
    pub mood: i64,
    pub anxiety: i64,
    pub sleep: i64,
    pub stress: i64,
    pub social: i64,
    pub activities: i64,
    pub notes: String,
}

impl CheckInScores {
    pub fn from_responses(responses: &CheckInResponses) -> Self {
        let rating = |category| parse_scale(responses.raw(category));
        Self {
            mood: rating(ScaleCategory::Mood),
            anxiety: rating(ScaleCategory::Anxiety),
            sleep: rating(ScaleCategory::Sleep),
            stress: rating(ScaleCategory::Stress),
            social: rating(ScaleCategory::Social),
            activities: rating(ScaleCategory::Activities),
            notes: responses.notes.clone().unwrap_or_default(),
        }
    }

    pub fn rating(&self, category: ScaleCategory) -> i64 {
        match category {
            ScaleCategory::Mood => self.mood,
            ScaleCategory::Anxiety => self.anxiety,
            ScaleCategory::Sleep => self.sleep,
            ScaleCategory::Stress => self.stress,
            ScaleCategory::Social => self.social,
            ScaleCategory::Activities => self.activities,
        }
    }
}

impl Default for CheckInScores {
    fn default() -> Self {
        Self::from_responses(&CheckInResponses::default())
    }
}

/// Reads the leading integer of a scale answer.
///
/// Missing or empty answers and answers without leading digits fall back to
/// [`NEUTRAL_RATING`]. A `0x` prefix reads hexadecimal digits. Trailing text
/// after the digits is ignored and values outside 1..=5 are returned
/// unchanged.
pub fn parse_scale(raw: Option<&str>) -> i64 {
    let Some(raw) = raw else {
        return NEUTRAL_RATING;
    };

    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let (radix, digits) = match digits.get(..2) {
        Some("0x" | "0X") => (16, &digits[2..]),
        _ => (10, digits),
    };

    let mut seen_digit = false;
    let mut magnitude: i64 = 0;
    for digit in digits.chars().map_while(|c| c.to_digit(radix)) {
        seen_digit = true;
        magnitude = magnitude
            .saturating_mul(i64::from(radix))
            .saturating_add(i64::from(digit));
    }

    if !seen_digit {
        return NEUTRAL_RATING;
    }

    if negative {
        -magnitude
    } else {
        magnitude
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.filter(is_truthy).map(|value| answer_text(&value)))
}

fn notes_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)?.filter(is_truthy) {
        None => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(other) => Err(serde::de::Error::custom(format!(
            "notes must be text, got {other}"
        ))),
    }
}

/// `false` for the empty JSON values (`null`, `false`, `0`, `""`), which
/// count as unanswered.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().map_or(true, |n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Text form of an answer. Lists join their items with commas, so a
/// one-item list reads as its item.
fn answer_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        Value::String(text) => text.clone(),
        Value::Array(items) => items.iter().map(answer_text).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}
