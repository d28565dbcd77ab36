use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;

use super::domain::{CheckInId, CheckInRecord};
use super::repository::{CheckInRepository, RepositoryError};
use super::trend::{build_trend, HistoryTrend};
use crate::checkin::CheckInResponses;
use crate::config::HistoryConfig;

/// Service recording check-ins and deriving history views from the repository.
pub struct CheckInHistoryService<R> {
    repository: Arc<R>,
    config: HistoryConfig,
    sequence: AtomicU64,
}

impl<R> CheckInHistoryService<R>
where
    R: CheckInRepository + 'static,
{
    pub fn new(repository: Arc<R>, config: HistoryConfig) -> Self {
        Self {
            repository,
            config,
            sequence: AtomicU64::new(1),
        }
    }

    fn next_id(&self) -> CheckInId {
        let id = self.sequence.fetch_add(1, Ordering::Relaxed);
        CheckInId(format!("checkin-{id:06}"))
    }

    /// Store a new check-in stamped with the current time.
    pub fn record(
        &self,
        responses: CheckInResponses,
    ) -> Result<CheckInRecord, HistoryServiceError> {
        self.record_at(responses, Utc::now())
    }

    /// Store a new check-in with an explicit timestamp, then evict the oldest
    /// records beyond the configured limit.
    pub fn record_at(
        &self,
        responses: CheckInResponses,
        timestamp: DateTime<Utc>,
    ) -> Result<CheckInRecord, HistoryServiceError> {
        let record = CheckInRecord {
            id: self.next_id(),
            timestamp,
            responses,
        };
        let stored = self.repository.insert(record)?;
        debug!(id = %stored.id, "check-in recorded");
        self.evict_to(self.config.max_entries)?;
        Ok(stored)
    }

    /// Bring externally produced records (for example a CSV export) into the store.
    pub fn import(&self, records: Vec<CheckInRecord>) -> Result<usize, HistoryServiceError> {
        let mut imported = 0;
        for record in records {
            self.repository.insert(record)?;
            imported += 1;
            self.evict_to(self.config.max_entries)?;
        }
        Ok(imported)
    }

    pub fn get(&self, id: &CheckInId) -> Result<CheckInRecord, HistoryServiceError> {
        let record = self.repository.fetch(id)?.ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// All check-ins, newest first.
    pub fn list(&self) -> Result<Vec<CheckInRecord>, HistoryServiceError> {
        let mut records = self.repository.list()?;
        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then_with(|| b.id.cmp(&a.id)));
        Ok(records)
    }

    pub fn delete(&self, id: &CheckInId) -> Result<(), HistoryServiceError> {
        self.repository.delete(id)?;
        Ok(())
    }

    pub fn clear(&self) -> Result<usize, HistoryServiceError> {
        Ok(self.repository.clear()?)
    }

    pub fn trend(&self) -> Result<HistoryTrend, HistoryServiceError> {
        let records = self.repository.list()?;
        Ok(build_trend(&records))
    }

    fn evict_to(&self, keep: usize) -> Result<(), HistoryServiceError> {
        let mut records = self.repository.list()?;
        if records.len() <= keep {
            return Ok(());
        }

        records.sort_by(|a, b| a.timestamp.cmp(&b.timestamp).then_with(|| a.id.cmp(&b.id)));
        let excess = records.len() - keep;
        for record in records.into_iter().take(excess) {
            debug!(id = %record.id, "evicting oldest check-in");
            self.repository.delete(&record.id)?;
        }
        Ok(())
    }
}

/// Error raised by the history service.
#[derive(Debug, thiserror::Error)]
pub enum HistoryServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
