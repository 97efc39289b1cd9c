//! Report lifecycle scenarios driven from questionnaire answers through the HTTP router.

mod common {
    use std::collections::BTreeMap;
    use std::sync::{Arc, Mutex};

    use esgen::workflows::reports::{
        AuthorId, Report, ReportId, ReportRepository, ReportStatus, RepositoryError,
    };

    #[derive(Default, Clone)]
    pub(super) struct MemoryRepository {
        records: Arc<Mutex<BTreeMap<ReportId, Report>>>,
    }

    impl ReportRepository for MemoryRepository {
        fn insert(&self, report: Report) -> Result<Report, RepositoryError> {
            let mut guard = self.records.lock().expect("repository mutex poisoned");
            if guard.contains_key(&report.id) {
                return Err(RepositoryError::Conflict);
            }
            guard.insert(report.id.clone(), report.clone());
            Ok(report)
        }

        fn update_if_status(
            &self,
            report: Report,
            expected: ReportStatus,
        ) -> Result<(), RepositoryError> {
            let mut guard = self.records.lock().expect("repository mutex poisoned");
            match guard.get_mut(&report.id) {
                Some(stored) if stored.status == expected => {
                    *stored = report;
                    Ok(())
                }
                Some(stored) => Err(RepositoryError::StatusMismatch {
                    actual: stored.status,
                }),
                None => Err(RepositoryError::NotFound),
            }
        }

        fn fetch(&self, id: &ReportId) -> Result<Option<Report>, RepositoryError> {
            let guard = self.records.lock().expect("repository mutex poisoned");
            Ok(guard.get(id).cloned())
        }

        fn list_by_author(&self, author: &AuthorId) -> Result<Vec<Report>, RepositoryError> {
            let guard = self.records.lock().expect("repository mutex poisoned");
            Ok(guard
                .values()
                .filter(|report| &report.author_id == author)
                .cloned()
                .collect())
        }
    }

    pub(super) fn post(
        uri: &str,
        payload: serde_json::Value,
    ) -> axum::http::Request<axum::body::Body> {
        axum::http::Request::post(uri)
            .header(axum::http::header::CONTENT_TYPE, "application/json")
            .body(axum::body::Body::from(
                serde_json::to_vec(&payload).expect("serialize payload"),
            ))
            .expect("request builds")
    }

    pub(super) async fn read_json_body(response: axum::response::Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .expect("read body");
        serde_json::from_slice(&body).expect("json payload")
    }
}

use std::sync::Arc;

use axum::http::StatusCode;
use esgen::workflows::assessment::{AnswerStore, QuestionCatalog, RawAnswers};
use esgen::workflows::reports::{
    report_router, AuthorId, PaymentReceipt, PaymentStatus, ReportForm, ReportPricing,
    ReportService, ReportStatus,
};
use serde_json::json;
use tower::ServiceExt;

use common::{post, read_json_body, MemoryRepository};

fn answers_zh() -> RawAnswers {
    serde_json::from_value(json!({
        "1": "綠源科技有限公司",
        "2": "中型企業 (51-250人)",
        "3": "科技及軟件",
        "14": "2025",
        "15": "範圍一：150噸CO2e，範圍二：900噸CO2e，範圍三：4,000噸CO2e"
    }))
    .expect("answers parse")
}

#[test]
fn chinese_answers_produce_a_complete_report() {
    let answers = AnswerStore::from_raw(&QuestionCatalog::fixed_flow(), &answers_zh());
    let form = ReportForm::from_answers(&answers);
    assert_eq!(form.emissions.scope3.as_deref(), Some("4,000噸CO2e"));

    let service = ReportService::new(
        Arc::new(MemoryRepository::default()),
        ReportPricing::default(),
    );
    let author = AuthorId("user-zh".to_string());
    let draft = service.create_draft(author.clone(), form).expect("draft");
    assert_eq!(draft.fiscal_year, "2025");
    assert_eq!(draft.title, "綠源科技有限公司 ESG Report 2025");

    service
        .attach_preview(&draft.id, "預覽".to_string())
        .expect("preview");
    service
        .record_payment(
            &draft.id,
            PaymentReceipt {
                transaction_id: None,
                amount: 300.0,
                currency: "HKD".to_string(),
                status: PaymentStatus::Completed,
                method: "fps".to_string(),
            },
        )
        .expect("overpayment accepted");
    let complete = service
        .complete(&draft.id, "完整報告".to_string(), None)
        .expect("complete");

    assert_eq!(complete.status, ReportStatus::Complete);
    assert_eq!(
        complete.payment.as_ref().map(|payment| payment.method.as_str()),
        Some("fps")
    );
    assert_eq!(service.list_for_author(&author).expect("list").len(), 1);
}

#[tokio::test]
async fn router_drives_a_report_from_draft_to_complete() {
    let service = Arc::new(ReportService::new(
        Arc::new(MemoryRepository::default()),
        ReportPricing::default(),
    ));
    let router = report_router(service);

    let response = router
        .clone()
        .oneshot(post(
            "/api/v1/reports",
            json!({ "author_id": "user-42", "answers": answers_zh() }),
        ))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::CREATED);
    let draft = read_json_body(response).await;
    let id = draft["id"].as_str().expect("report id").to_string();
    assert_eq!(draft["scope1_emissions"], json!("150噸CO2e"));

    let steps = [
        ("preview", json!({ "content": "Preview" }), "preview"),
        (
            "payment",
            json!({
                "amount": 299.0,
                "currency": "HKD",
                "status": "completed",
                "transaction_id": "txn-9"
            }),
            "paid",
        ),
        (
            "complete",
            json!({ "full_content": "Body", "pdf_url": "reports/final.pdf" }),
            "complete",
        ),
    ];
    for (action, payload, expected) in steps {
        let response = router
            .clone()
            .oneshot(post(&format!("/api/v1/reports/{id}/{action}"), payload))
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK, "{action} succeeds");
        let view = read_json_body(response).await;
        assert_eq!(view["status"], json!(expected));
    }

    let response = router
        .oneshot(post(&format!("/api/v1/reports/{id}/fail"), json!({ "reason": "late" })))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::CONFLICT);
}
