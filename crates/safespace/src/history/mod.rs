//! Check-in history: storage contract, service, trend statistics, CSV import
//! and HTTP routes.

pub mod domain;
mod import;
pub mod repository;
pub mod router;
pub mod service;
mod trend;

#[cfg(test)]
mod tests;

pub use domain::{CheckInDetailView, CheckInId, CheckInRecord, CheckInSummaryView};
pub use import::{CheckInCsvImporter, HistoryImportError};
pub use repository::{CheckInRepository, RepositoryError};
pub use router::{history_router, CheckInSubmission};
pub use service::{CheckInHistoryService, HistoryServiceError};
pub use trend::{build_trend, HistoryTrend, TrendPoint};
