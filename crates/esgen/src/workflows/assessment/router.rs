use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::answers::RawAnswers;
use super::domain::CategoryCounts;
use super::service::AssessmentService;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RandomQuestionsRequest {
    #[serde(default)]
    pub counts: Option<CategoryCounts>,
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreRequest {
    #[serde(default)]
    pub answers: RawAnswers,
    /// Anchor for the trend months; defaults to today (UTC).
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

/// Router exposing question catalogs and scoring.
pub fn assessment_router(service: Arc<AssessmentService>) -> Router {
    Router::new()
        .route("/api/v1/assessment/questions", get(questions_handler))
        .route(
            "/api/v1/assessment/questions/random",
            post(random_questions_handler),
        )
        .route("/api/v1/assessment/score", post(score_handler))
        .with_state(service)
}

pub(crate) async fn questions_handler(State(service): State<Arc<AssessmentService>>) -> Response {
    (StatusCode::OK, axum::Json(service.fixed_flow())).into_response()
}

pub(crate) async fn random_questions_handler(
    State(service): State<Arc<AssessmentService>>,
    axum::Json(request): axum::Json<RandomQuestionsRequest>,
) -> Response {
    let counts = request.counts.unwrap_or(service.default_counts());
    if counts.total() == 0 {
        let payload = json!({
            "error": "at least one question must be requested",
        });
        return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response();
    }

    let catalog = service.random_catalog(Some(counts), request.seed);
    (StatusCode::OK, axum::Json(catalog)).into_response()
}

pub(crate) async fn score_handler(
    State(service): State<Arc<AssessmentService>>,
    axum::Json(request): axum::Json<ScoreRequest>,
) -> Response {
    let as_of = request.as_of.unwrap_or_else(|| Utc::now().date_naive());
    let scored = service.score(&request.answers, as_of);
    (StatusCode::OK, axum::Json(scored)).into_response()
}
