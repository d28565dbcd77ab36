//! Rule engines behind the SafeSpace wellbeing check-in service.
//!
//! [`checkin`] turns six Likert ratings and free-text notes into insight text
//! and resource recommendations, [`assessment`] scores the twelve-question
//! stress assessment, and [`history`] keeps past check-ins behind a
//! storage-agnostic repository.

pub mod assessment;
pub mod checkin;
pub mod config;
pub mod error;
pub mod history;
pub mod support;
pub mod telemetry;
