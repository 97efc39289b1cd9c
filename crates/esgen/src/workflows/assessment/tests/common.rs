use std::sync::Arc;

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::{json, Value};

use crate::workflows::assessment::answers::{AnswerStore, RawAnswers};
use crate::workflows::assessment::catalog::{
    CHALLENGES, COMPANY_NAME, COMPANY_SIZE, ESG_POLICY, FRAMEWORKS, INDUSTRY, INITIATIVES,
    MATURITY_RATING, STAKEHOLDER_IMPORTANCE,
};
use crate::workflows::assessment::{assessment_router, AssessmentService, QuestionCatalog};

pub(super) fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 30).expect("valid date")
}

pub(super) fn catalog() -> QuestionCatalog {
    QuestionCatalog::fixed_flow()
}

/// Policy, two frameworks, maturity 8, one environmental and one social
/// initiative, no challenges, critical stakeholder importance.
pub(super) fn sample_answers_raw() -> RawAnswers {
    let mut raw = RawAnswers::new();
    raw.insert(ESG_POLICY, json!("Yes, fully implemented"));
    raw.insert(
        FRAMEWORKS,
        json!([
            "GRI (Global Reporting Initiative)",
            "TCFD (Task Force on Climate-related Financial Disclosures)"
        ]),
    );
    raw.insert(MATURITY_RATING, json!(8));
    raw.insert(
        INITIATIVES,
        json!(["Carbon footprint monitoring", "Employee wellbeing initiatives"]),
    );
    raw.insert(CHALLENGES, json!([]));
    raw.insert(STAKEHOLDER_IMPORTANCE, json!("Critical - Top priority"));
    raw
}

pub(super) fn sample_answers() -> AnswerStore {
    AnswerStore::from_raw(&catalog(), &sample_answers_raw())
}

pub(super) fn four_challenges() -> AnswerStore {
    let mut raw = RawAnswers::new();
    raw.insert(
        CHALLENGES,
        json!([
            "Limited budget/resources",
            "Lack of expertise",
            "Measuring impact",
            "Stakeholder buy-in"
        ]),
    );
    AnswerStore::from_raw(&catalog(), &raw)
}

/// Company section answered in Chinese, as the bilingual widget submits it.
pub(super) fn company_answers_zh() -> RawAnswers {
    let mut raw = RawAnswers::new();
    raw.insert(COMPANY_NAME, json!("港灣物流有限公司"));
    raw.insert(COMPANY_SIZE, json!("大型集團 (1000人以上)"));
    raw.insert(INDUSTRY, json!("製造業"));
    raw.insert(ESG_POLICY, json!("是，部分實施"));
    raw
}

pub(super) fn router() -> axum::Router {
    assessment_router(Arc::new(AssessmentService::default()))
}

pub(super) fn json_request(uri: &str, payload: &Value) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::post(uri)
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            serde_json::to_vec(payload).expect("serialize payload"),
        ))
        .expect("request builds")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 256 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
