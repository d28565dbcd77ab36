use super::domain::{CheckInId, CheckInRecord};

/// Storage abstraction for check-in history so scoring stays storage-agnostic.
pub trait CheckInRepository: Send + Sync {
    fn insert(&self, record: CheckInRecord) -> Result<CheckInRecord, RepositoryError>;
    fn fetch(&self, id: &CheckInId) -> Result<Option<CheckInRecord>, RepositoryError>;
    fn list(&self) -> Result<Vec<CheckInRecord>, RepositoryError>;
    fn delete(&self, id: &CheckInId) -> Result<(), RepositoryError>;
    /// Removes every record, returning how many were dropped.
    fn clear(&self) -> Result<usize, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
