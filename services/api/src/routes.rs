use crate::infra::AppState;
use axum::body::Bytes;
use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use safespace::assessment::{
    recovery_plan, AssessmentAnswers, AssessmentError, AssessmentQuestion, AssessmentReport,
    RecoveryPlan, StressCategory, StressLevel, QUESTIONS, SCALE_LABELS,
};
use safespace::checkin::{
    evaluate_check_in, is_truthy, CheckInResponses, ResourceRecommendation,
};
use safespace::error::AppError;
use safespace::history::{history_router, CheckInHistoryService, CheckInRepository};
use safespace::support::{support_directory, SupportDirectory};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::warn;

const RESPONSES_REQUIRED: &str = "Responses are required";
const INSIGHTS_FAILED: &str = "Failed to generate insights";
const ASSESSMENT_BODY_INVALID: &str = "Assessment request must be a JSON object";

#[derive(Debug, Serialize)]
pub(crate) struct InsightsResponse {
    pub(crate) success: bool,
    pub(crate) insights: String,
    pub(crate) resources: Vec<ResourceRecommendation>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AssessmentRequest {
    #[serde(default)]
    pub(crate) answers: AssessmentAnswers,
}

#[derive(Debug, Serialize)]
pub(crate) struct QuestionnaireView {
    pub(crate) scale: [&'static str; 5],
    pub(crate) categories: Vec<CategoryView>,
    pub(crate) questions: [AssessmentQuestion; 12],
}

#[derive(Debug, Serialize)]
pub(crate) struct CategoryView {
    pub(crate) category: StressCategory,
    pub(crate) label: &'static str,
}

pub(crate) fn with_wellbeing_routes<R>(service: Arc<CheckInHistoryService<R>>) -> Router
where
    R: CheckInRepository + 'static,
{
    history_router(service)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/insights", post(insights_endpoint))
        .route("/api/v1/assessment", post(assessment_endpoint))
        .route("/api/v1/assessment/questions", get(questions_endpoint))
        .route("/api/v1/recovery-plan/:level", get(recovery_plan_endpoint))
        .route(
            "/api/v1/recovery-plan/:level/download",
            get(recovery_plan_download),
        )
        .route("/api/v1/support", get(support_endpoint))
}

pub(crate) async fn healthcheck() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Evaluates a check-in posted as `{ "responses": { ... } }`.
///
/// The body is read raw so that an unreadable payload and a missing
/// `responses` field produce distinct errors.
pub(crate) async fn insights_endpoint(body: Bytes) -> Result<Json<InsightsResponse>, AppError> {
    let payload: Value = serde_json::from_slice(&body).map_err(|err| {
        warn!(%err, "insights request body is not valid JSON");
        AppError::Internal(INSIGHTS_FAILED)
    })?;

    if payload.is_null() {
        warn!("insights request body is null");
        return Err(AppError::Internal(INSIGHTS_FAILED));
    }

    let responses = match payload.get("responses") {
        Some(value) if is_truthy(value) => value,
        _ => return Err(AppError::BadRequest(RESPONSES_REQUIRED)),
    };

    let responses = if responses.is_object() {
        CheckInResponses::deserialize(responses).map_err(|err| {
            warn!(%err, "check-in responses could not be read");
            AppError::Internal(INSIGHTS_FAILED)
        })?
    } else {
        CheckInResponses::default()
    };

    let report = evaluate_check_in(&responses);
    Ok(Json(InsightsResponse {
        success: true,
        insights: report.insights,
        resources: report.resources,
    }))
}

/// Scores `{ "answers": { "<question id>": 0..=4 } }`.
pub(crate) async fn assessment_endpoint(body: Bytes) -> Result<Json<AssessmentReport>, AppError> {
    let payload: AssessmentRequest = serde_json::from_slice(&body).map_err(|err| {
        if err.is_data() {
            AppError::from(AssessmentError::InvalidAnswer(err.to_string()))
        } else {
            warn!(%err, "assessment request body is not valid JSON");
            AppError::BadRequest(ASSESSMENT_BODY_INVALID)
        }
    })?;
    payload.answers.validate()?;
    Ok(Json(AssessmentReport::build(&payload.answers)))
}

pub(crate) async fn questions_endpoint() -> Json<QuestionnaireView> {
    Json(QuestionnaireView {
        scale: SCALE_LABELS,
        categories: StressCategory::ordered()
            .into_iter()
            .map(|category| CategoryView {
                category,
                label: category.label(),
            })
            .collect(),
        questions: QUESTIONS,
    })
}

fn plan_for(level: &str) -> Result<RecoveryPlan, AppError> {
    StressLevel::parse(level)
        .map(recovery_plan)
        .ok_or_else(|| AssessmentError::UnknownLevel(level.to_string()).into())
}

pub(crate) async fn recovery_plan_endpoint(
    Path(level): Path<String>,
) -> Result<Json<RecoveryPlan>, AppError> {
    plan_for(&level).map(Json)
}

pub(crate) async fn recovery_plan_download(
    Path(level): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let plan = plan_for(&level)?;
    let mime = mime_guess::from_path(RecoveryPlan::DOWNLOAD_NAME).first_or_octet_stream();

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, format!("{mime}; charset=utf-8")),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", RecoveryPlan::DOWNLOAD_NAME),
            ),
        ],
        plan.render_text(),
    ))
}

pub(crate) async fn support_endpoint() -> Json<SupportDirectory> {
    Json(support_directory())
}
