use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer};
use std::io::Read;
use std::path::Path;

use super::domain::{CheckInId, CheckInRecord};
use crate::checkin::CheckInResponses;

#[derive(Debug)]
pub enum HistoryImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Timestamp { row: usize, value: String },
}

impl std::fmt::Display for HistoryImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HistoryImportError::Io(err) => write!(f, "failed to read check-in export: {}", err),
            HistoryImportError::Csv(err) => write!(f, "invalid check-in CSV data: {}", err),
            HistoryImportError::Timestamp { row, value } => write!(
                f,
                "row {} has unreadable timestamp '{}' (expected RFC 3339 or YYYY-MM-DD)",
                row, value
            ),
        }
    }
}

impl std::error::Error for HistoryImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HistoryImportError::Io(err) => Some(err),
            HistoryImportError::Csv(err) => Some(err),
            HistoryImportError::Timestamp { .. } => None,
        }
    }
}

impl From<std::io::Error> for HistoryImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for HistoryImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Reads check-in history exported as
/// `id,timestamp,mood,anxiety,sleep,stress,social,activities,notes`.
pub struct CheckInCsvImporter;

impl CheckInCsvImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<CheckInRecord>, HistoryImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<CheckInRecord>, HistoryImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut records = Vec::new();

        for (index, row) in csv_reader.deserialize::<CheckInRow>().enumerate() {
            let row = row?;
            // Header is line 1.
            let line = index + 2;
            let timestamp = parse_timestamp(&row.timestamp).ok_or_else(|| {
                HistoryImportError::Timestamp {
                    row: line,
                    value: row.timestamp.clone(),
                }
            })?;

            records.push(CheckInRecord {
                id: CheckInId(row.id),
                timestamp,
                responses: CheckInResponses {
                    mood: row.mood,
                    anxiety: row.anxiety,
                    sleep: row.sleep,
                    stress: row.stress,
                    social: row.social,
                    activities: row.activities,
                    notes: row.notes,
                },
            });
        }

        Ok(records)
    }
}

#[derive(Debug, Deserialize)]
struct CheckInRow {
    id: String,
    timestamp: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    mood: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    anxiety: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    sleep: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    stress: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    social: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    activities: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    notes: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.and_then(|raw| {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }))
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const HEADER: &str = "id,timestamp,mood,anxiety,sleep,stress,social,activities,notes\n";

    #[test]
    fn imports_rows_with_blank_cells_as_missing() {
        let csv = format!(
            "{HEADER}c-1,2025-03-04T09:30:00Z,2,4,,3,1,5,tired after work\nc-2,2025-03-05,,,,,,,\n"
        );
        let records = CheckInCsvImporter::from_reader(Cursor::new(csv)).expect("import succeeds");

        assert_eq!(records.len(), 2);
        let first = &records[0];
        assert_eq!(first.id.as_str(), "c-1");
        assert_eq!(first.responses.mood.as_deref(), Some("2"));
        assert_eq!(first.responses.sleep, None);
        assert_eq!(first.responses.notes.as_deref(), Some("tired after work"));

        let second = &records[1];
        assert_eq!(second.timestamp.format("%Y-%m-%d %H:%M").to_string(), "2025-03-05 00:00");
        assert_eq!(second.responses, CheckInResponses::default());
    }

    #[test]
    fn rejects_unreadable_timestamps_with_row_number() {
        let csv = format!("{HEADER}c-1,yesterday,3,3,3,3,3,3,\n");
        let error = CheckInCsvImporter::from_reader(Cursor::new(csv)).expect_err("bad timestamp");
        match error {
            HistoryImportError::Timestamp { row, value } => {
                assert_eq!(row, 2);
                assert_eq!(value, "yesterday");
            }
            other => panic!("expected timestamp error, got {other:?}"),
        }
    }

    #[test]
    fn from_path_propagates_io_errors() {
        let error = CheckInCsvImporter::from_path("./does-not-exist.csv").expect_err("io error");
        assert!(matches!(error, HistoryImportError::Io(_)));
    }

    #[test]
    fn timestamps_with_offsets_normalize_to_utc() {
        let parsed = parse_timestamp("2025-03-04T10:30:00+01:00").expect("parses");
        assert_eq!(parsed.format("%H:%M").to_string(), "09:30");
    }
}
