use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use super::domain::{CheckInId, CheckInSummaryView};
use super::repository::{CheckInRepository, RepositoryError};
use super::service::{CheckInHistoryService, HistoryServiceError};
use crate::checkin::CheckInResponses;

#[derive(Debug, Deserialize)]
pub struct CheckInSubmission {
    #[serde(default)]
    pub responses: CheckInResponses,
}

/// Router builder exposing check-in history endpoints.
pub fn history_router<R>(service: Arc<CheckInHistoryService<R>>) -> Router
where
    R: CheckInRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/checkins",
            get(list_handler::<R>)
                .post(record_handler::<R>)
                .delete(clear_handler::<R>),
        )
        .route(
            "/api/v1/checkins/:checkin_id",
            get(detail_handler::<R>).delete(delete_handler::<R>),
        )
        .route("/api/v1/history/trend", get(trend_handler::<R>))
        .with_state(service)
}

fn error_response(err: HistoryServiceError, id: Option<&CheckInId>) -> Response {
    match err {
        HistoryServiceError::Repository(RepositoryError::NotFound) => {
            let payload = json!({
                "error": "check-in not found",
                "id": id.map(CheckInId::as_str),
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
        HistoryServiceError::Repository(RepositoryError::Conflict) => {
            let payload = json!({ "error": "check-in already exists" });
            (StatusCode::CONFLICT, Json(payload)).into_response()
        }
        other => {
            error!(error = %other, "check-in history request failed");
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn record_handler<R>(
    State(service): State<Arc<CheckInHistoryService<R>>>,
    Json(submission): Json<CheckInSubmission>,
) -> Response
where
    R: CheckInRepository + 'static,
{
    match service.record(submission.responses) {
        Ok(record) => (StatusCode::CREATED, Json(record.detail_view())).into_response(),
        Err(err) => error_response(err, None),
    }
}

pub(crate) async fn list_handler<R>(
    State(service): State<Arc<CheckInHistoryService<R>>>,
) -> Response
where
    R: CheckInRepository + 'static,
{
    match service.list() {
        Ok(records) => {
            let views: Vec<CheckInSummaryView> =
                records.iter().map(|record| record.summary_view()).collect();
            (StatusCode::OK, Json(views)).into_response()
        }
        Err(err) => error_response(err, None),
    }
}

pub(crate) async fn detail_handler<R>(
    State(service): State<Arc<CheckInHistoryService<R>>>,
    Path(checkin_id): Path<String>,
) -> Response
where
    R: CheckInRepository + 'static,
{
    let id = CheckInId(checkin_id);
    match service.get(&id) {
        Ok(record) => (StatusCode::OK, Json(record.detail_view())).into_response(),
        Err(err) => error_response(err, Some(&id)),
    }
}

pub(crate) async fn delete_handler<R>(
    State(service): State<Arc<CheckInHistoryService<R>>>,
    Path(checkin_id): Path<String>,
) -> Response
where
    R: CheckInRepository + 'static,
{
    let id = CheckInId(checkin_id);
    match service.delete(&id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_response(err, Some(&id)),
    }
}

pub(crate) async fn clear_handler<R>(
    State(service): State<Arc<CheckInHistoryService<R>>>,
) -> Response
where
    R: CheckInRepository + 'static,
{
    match service.clear() {
        Ok(deleted) => (StatusCode::OK, Json(json!({ "deleted": deleted }))).into_response(),
        Err(err) => error_response(err, None),
    }
}

pub(crate) async fn trend_handler<R>(
    State(service): State<Arc<CheckInHistoryService<R>>>,
) -> Response
where
    R: CheckInRepository + 'static,
{
    match service.trend() {
        Ok(trend) => (StatusCode::OK, Json(trend)).into_response(),
        Err(err) => error_response(err, None),
    }
}
