use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{AuthorId, PaymentReceipt, ReportForm, ReportId};
use super::repository::{ReportRepository, RepositoryError};
use super::service::{ReportService, ReportServiceError};
use crate::workflows::assessment::{AnswerStore, QuestionCatalog, RawAnswers};

/// Draft request: either an explicit form or raw fixed-flow answers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReportRequest {
    pub author_id: AuthorId,
    #[serde(default)]
    pub form: Option<ReportForm>,
    #[serde(default)]
    pub answers: Option<RawAnswers>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewRequest {
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompleteRequest {
    pub full_content: String,
    #[serde(default)]
    pub pdf_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailRequest {
    pub reason: String,
}

/// Router exposing report creation and lifecycle transitions.
pub fn report_router<R>(service: Arc<ReportService<R>>) -> Router
where
    R: ReportRepository + 'static,
{
    Router::new()
        .route("/api/v1/reports", post(create_handler::<R>))
        .route("/api/v1/reports/:report_id", get(fetch_handler::<R>))
        .route(
            "/api/v1/reports/:report_id/preview",
            post(preview_handler::<R>),
        )
        .route(
            "/api/v1/reports/:report_id/payment",
            post(payment_handler::<R>),
        )
        .route(
            "/api/v1/reports/:report_id/complete",
            post(complete_handler::<R>),
        )
        .route("/api/v1/reports/:report_id/fail", post(fail_handler::<R>))
        .with_state(service)
}

pub(crate) async fn create_handler<R>(
    State(service): State<Arc<ReportService<R>>>,
    axum::Json(request): axum::Json<CreateReportRequest>,
) -> Response
where
    R: ReportRepository + 'static,
{
    let form = match (request.form, request.answers) {
        (Some(form), _) => form,
        (None, Some(raw)) => {
            let answers = AnswerStore::from_raw(&QuestionCatalog::fixed_flow(), &raw);
            ReportForm::from_answers(&answers)
        }
        (None, None) => {
            let payload = json!({
                "error": "either form or answers is required",
            });
            return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response();
        }
    };

    match service.create_draft(request.author_id, form) {
        Ok(report) => (StatusCode::CREATED, axum::Json(report)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn fetch_handler<R>(
    State(service): State<Arc<ReportService<R>>>,
    Path(report_id): Path<String>,
) -> Response
where
    R: ReportRepository + 'static,
{
    match service.get(&ReportId(report_id)) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn preview_handler<R>(
    State(service): State<Arc<ReportService<R>>>,
    Path(report_id): Path<String>,
    axum::Json(request): axum::Json<PreviewRequest>,
) -> Response
where
    R: ReportRepository + 'static,
{
    status_response(service.attach_preview(&ReportId(report_id), request.content))
}

pub(crate) async fn payment_handler<R>(
    State(service): State<Arc<ReportService<R>>>,
    Path(report_id): Path<String>,
    axum::Json(receipt): axum::Json<PaymentReceipt>,
) -> Response
where
    R: ReportRepository + 'static,
{
    status_response(service.record_payment(&ReportId(report_id), receipt))
}

pub(crate) async fn complete_handler<R>(
    State(service): State<Arc<ReportService<R>>>,
    Path(report_id): Path<String>,
    axum::Json(request): axum::Json<CompleteRequest>,
) -> Response
where
    R: ReportRepository + 'static,
{
    status_response(service.complete(
        &ReportId(report_id),
        request.full_content,
        request.pdf_url,
    ))
}

pub(crate) async fn fail_handler<R>(
    State(service): State<Arc<ReportService<R>>>,
    Path(report_id): Path<String>,
    axum::Json(request): axum::Json<FailRequest>,
) -> Response
where
    R: ReportRepository + 'static,
{
    status_response(service.fail(&ReportId(report_id), request.reason))
}

fn status_response(result: Result<super::domain::Report, ReportServiceError>) -> Response {
    match result {
        Ok(report) => (StatusCode::OK, axum::Json(report.status_view())).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: ReportServiceError) -> Response {
    let status = match &error {
        ReportServiceError::MissingFields(_)
        | ReportServiceError::EmptyContent(_)
        | ReportServiceError::PaymentRejected(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ReportServiceError::InvalidTransition { .. }
        | ReportServiceError::Repository(
            RepositoryError::Conflict | RepositoryError::StatusMismatch { .. },
        ) => StatusCode::CONFLICT,
        ReportServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        ReportServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
