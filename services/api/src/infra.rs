use metrics_exporter_prometheus::PrometheusHandle;
use safespace::history::{CheckInId, CheckInRecord, CheckInRepository, RepositoryError};
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local check-in store; history is lost on restart.
#[derive(Default, Clone)]
pub(crate) struct InMemoryCheckInRepository {
    records: Arc<Mutex<HashMap<CheckInId, CheckInRecord>>>,
}

impl InMemoryCheckInRepository {
    fn guard(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, HashMap<CheckInId, CheckInRecord>>, RepositoryError>
    {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("check-in store lock poisoned".to_string()))
    }
}

impl CheckInRepository for InMemoryCheckInRepository {
    fn insert(&self, record: CheckInRecord) -> Result<CheckInRecord, RepositoryError> {
        let mut guard = self.guard()?;
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &CheckInId) -> Result<Option<CheckInRecord>, RepositoryError> {
        Ok(self.guard()?.get(id).cloned())
    }

    fn list(&self) -> Result<Vec<CheckInRecord>, RepositoryError> {
        Ok(self.guard()?.values().cloned().collect())
    }

    fn delete(&self, id: &CheckInId) -> Result<(), RepositoryError> {
        self.guard()?
            .remove(id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }

    fn clear(&self) -> Result<usize, RepositoryError> {
        let mut guard = self.guard()?;
        let removed = guard.len();
        guard.clear();
        Ok(removed)
    }
}
