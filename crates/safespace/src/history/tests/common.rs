use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::checkin::CheckInResponses;
use crate::config::HistoryConfig;
use crate::history::domain::{CheckInId, CheckInRecord};
use crate::history::repository::{CheckInRepository, RepositoryError};
use crate::history::{history_router, CheckInHistoryService};

pub(super) fn responses(mood: &str, anxiety: &str, notes: &str) -> CheckInResponses {
    CheckInResponses {
        mood: Some(mood.to_string()),
        anxiety: Some(anxiety.to_string()),
        sleep: Some("3".to_string()),
        stress: Some("3".to_string()),
        social: Some("3".to_string()),
        activities: Some("3".to_string()),
        notes: Some(notes.to_string()),
    }
}

pub(super) fn at(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, day, 8, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn build_service() -> (CheckInHistoryService<MemoryRepository>, Arc<MemoryRepository>) {
    build_service_with_limit(HistoryConfig::DEFAULT_MAX_ENTRIES)
}

pub(super) fn build_service_with_limit(
    max_entries: usize,
) -> (CheckInHistoryService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = CheckInHistoryService::new(repository.clone(), HistoryConfig { max_entries });
    (service, repository)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<CheckInId, CheckInRecord>>>,
}

impl MemoryRepository {
    pub(super) fn len(&self) -> usize {
        self.records.lock().expect("repository mutex poisoned").len()
    }
}

impl CheckInRepository for MemoryRepository {
    fn insert(&self, record: CheckInRecord) -> Result<CheckInRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &CheckInId) -> Result<Option<CheckInRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn list(&self) -> Result<Vec<CheckInRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.values().cloned().collect())
    }

    fn delete(&self, id: &CheckInId) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.remove(id).map(|_| ()).ok_or(RepositoryError::NotFound)
    }

    fn clear(&self) -> Result<usize, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        let count = guard.len();
        guard.clear();
        Ok(count)
    }
}

pub(super) struct UnavailableRepository;

impl CheckInRepository for UnavailableRepository {
    fn insert(&self, _record: CheckInRecord) -> Result<CheckInRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }

    fn fetch(&self, _id: &CheckInId) -> Result<Option<CheckInRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }

    fn list(&self) -> Result<Vec<CheckInRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }

    fn delete(&self, _id: &CheckInId) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }

    fn clear(&self) -> Result<usize, RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn history_router_with_service(
    service: CheckInHistoryService<MemoryRepository>,
) -> axum::Router {
    history_router(Arc::new(service))
}
