use super::common::*;

use crate::workflows::assessment::catalog::{COMPANY_NAME, COMPANY_SIZE, EMISSIONS, INDUSTRY};
use crate::workflows::assessment::{AnswerStore, QuestionCatalog, RawAnswers};
use crate::workflows::reports::domain::{PaymentStatus, ReportForm, ReportPricing, ReportStatus};
use crate::workflows::reports::{ReportService, ReportServiceError, RepositoryError};
use serde_json::json;
use std::sync::{Arc, Barrier};

#[test]
fn drafts_take_pricing_and_default_fiscal_year() {
    let (service, _) = build_service();
    let report = service.create_draft(author(), form()).expect("draft stored");

    assert_eq!(report.status, ReportStatus::Draft);
    assert_eq!(report.fiscal_year, "2024");
    assert_eq!(report.title, "Harbour Logistics ESG Report 2024");
    assert!(report.payment_required);
    assert_eq!(report.payment_amount, 299.0);
    assert_eq!(report.currency, "HKD");
    assert_eq!(report.scope1_emissions.as_deref(), Some("1,200 tons CO2e"));
    assert!(report.id.0.starts_with("rpt-"));
}

#[test]
fn drafts_require_company_fields() {
    let (service, repository) = build_service();
    let err = service
        .create_draft(author(), ReportForm::default())
        .expect_err("blank form rejected");

    match err {
        ReportServiceError::MissingFields(fields) => {
            assert_eq!(fields, vec!["company_name", "industry", "company_size"]);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(repository.records.lock().expect("lock").is_empty());
}

#[test]
fn full_lifecycle_reaches_complete() {
    let (service, _) = build_service();
    let draft = service.create_draft(author(), form()).expect("draft");

    let preview = service
        .attach_preview(&draft.id, "Executive summary".to_string())
        .expect("preview");
    assert_eq!(preview.status, ReportStatus::Preview);

    let paid = service
        .record_payment(&draft.id, receipt(299.0))
        .expect("payment");
    assert_eq!(paid.status, ReportStatus::Paid);
    let payment = paid.payment.as_ref().expect("payment attached");
    assert_eq!(payment.status, PaymentStatus::Completed);
    assert_eq!(payment.report_id, draft.id);
    assert!(payment.paid_at.is_some());

    let complete = service
        .complete(
            &draft.id,
            "Full report body".to_string(),
            Some("https://files.example.com/rpt.pdf".to_string()),
        )
        .expect("complete");
    assert_eq!(complete.status, ReportStatus::Complete);
    assert!(complete.completed_at.is_some());
    assert_eq!(service.get(&draft.id).expect("stored").status, ReportStatus::Complete);
}

#[test]
fn out_of_order_transitions_are_refused() {
    let (service, _) = build_service();
    let draft = service.create_draft(author(), form()).expect("draft");

    let err = service
        .record_payment(&draft.id, receipt(299.0))
        .expect_err("draft cannot be paid");
    assert!(matches!(
        err,
        ReportServiceError::InvalidTransition {
            from: ReportStatus::Draft,
            to: ReportStatus::Paid
        }
    ));

    service
        .attach_preview(&draft.id, "Preview".to_string())
        .expect("preview");
    let err = service
        .complete(&draft.id, "Body".to_string(), None)
        .expect_err("unpaid report cannot complete");
    assert!(matches!(err, ReportServiceError::InvalidTransition { .. }));
}

#[test]
fn short_or_unsettled_payments_are_rejected() {
    let (service, _) = build_service();
    let draft = service.create_draft(author(), form()).expect("draft");
    service
        .attach_preview(&draft.id, "Preview".to_string())
        .expect("preview");

    let err = service
        .record_payment(&draft.id, receipt(150.0))
        .expect_err("underpaid");
    assert!(matches!(err, ReportServiceError::PaymentRejected(_)));

    let mut pending = receipt(299.0);
    pending.status = PaymentStatus::Pending;
    assert!(service.record_payment(&draft.id, pending).is_err());

    let mut usd = receipt(299.0);
    usd.currency = "USD".to_string();
    assert!(service.record_payment(&draft.id, usd).is_err());

    assert_eq!(
        service.get(&draft.id).expect("stored").status,
        ReportStatus::Preview
    );
}

#[test]
fn free_reports_skip_payment() {
    let repository = Arc::new(MemoryRepository::default());
    let service = ReportService::new(
        repository,
        ReportPricing {
            payment_required: false,
            ..ReportPricing::default()
        },
    );
    let draft = service.create_draft(author(), form()).expect("draft");
    service
        .attach_preview(&draft.id, "Preview".to_string())
        .expect("preview");
    let complete = service
        .complete(&draft.id, "Body".to_string(), None)
        .expect("complete without payment");
    assert_eq!(complete.status, ReportStatus::Complete);
}

#[test]
fn failure_is_allowed_until_terminal() {
    let (service, _) = build_service();
    let draft = service.create_draft(author(), form()).expect("draft");
    let failed = service
        .fail(&draft.id, "generator timed out".to_string())
        .expect("fail from draft");
    assert_eq!(failed.status, ReportStatus::Failed);
    assert_eq!(failed.failure_reason.as_deref(), Some("generator timed out"));

    let err = service
        .fail(&draft.id, "again".to_string())
        .expect_err("already terminal");
    assert!(matches!(err, ReportServiceError::InvalidTransition { .. }));
}

#[test]
fn racing_transitions_leave_one_winner() {
    let (service, repository) = build_service();
    let draft = service.create_draft(author(), form()).expect("draft");
    service
        .attach_preview(&draft.id, "Preview".to_string())
        .expect("preview");
    service
        .record_payment(&draft.id, receipt(299.0))
        .expect("payment");

    let racing = ReportService::new(
        Arc::new(LockstepRepository {
            inner: repository.as_ref().clone(),
            barrier: Barrier::new(2),
        }),
        ReportPricing::default(),
    );
    let (completed, failed) = std::thread::scope(|scope| {
        let complete = scope.spawn(|| racing.complete(&draft.id, "Body".to_string(), None));
        let fail = scope.spawn(|| racing.fail(&draft.id, "generator crashed".to_string()));
        (
            complete.join().expect("complete thread"),
            fail.join().expect("fail thread"),
        )
    });

    let stored = service.get(&draft.id).expect("stored");
    match (completed, failed) {
        (Ok(report), Err(err)) => {
            assert_eq!(report.status, ReportStatus::Complete);
            assert_eq!(stored.status, ReportStatus::Complete);
            assert_eq!(stored.failure_reason, None);
            assert!(matches!(
                err,
                ReportServiceError::InvalidTransition {
                    from: ReportStatus::Complete,
                    to: ReportStatus::Failed
                }
            ));
        }
        (Err(err), Ok(report)) => {
            assert_eq!(report.status, ReportStatus::Failed);
            assert_eq!(stored.status, ReportStatus::Failed);
            assert_eq!(stored.full_content, None);
            assert!(matches!(
                err,
                ReportServiceError::InvalidTransition {
                    from: ReportStatus::Failed,
                    to: ReportStatus::Complete
                }
            ));
        }
        (completed, failed) => {
            panic!("expected exactly one winner: {completed:?} / {failed:?}")
        }
    }
}

#[test]
fn unknown_reports_surface_not_found() {
    let (service, _) = build_service();
    let err = service
        .attach_preview(
            &crate::workflows::reports::ReportId("rpt-missing".to_string()),
            "Preview".to_string(),
        )
        .expect_err("missing report");
    assert!(matches!(
        err,
        ReportServiceError::Repository(RepositoryError::NotFound)
    ));
}

#[test]
fn repository_outages_propagate() {
    let service = ReportService::new(Arc::new(UnavailableRepository), ReportPricing::default());
    let err = service
        .create_draft(author(), form())
        .expect_err("repository offline");
    assert!(matches!(
        err,
        ReportServiceError::Repository(RepositoryError::Unavailable(_))
    ));
}

#[test]
fn reports_are_listed_per_author() {
    let (service, _) = build_service();
    service.create_draft(author(), form()).expect("first");
    service.create_draft(author(), form()).expect("second");
    service
        .create_draft(
            crate::workflows::reports::AuthorId("someone-else".to_string()),
            form(),
        )
        .expect("third");

    assert_eq!(service.list_for_author(&author()).expect("listed").len(), 2);
}

#[test]
fn forms_assemble_from_questionnaire_answers() {
    let mut raw = RawAnswers::new();
    raw.insert(COMPANY_NAME, json!("Harbour Logistics"));
    raw.insert(COMPANY_SIZE, json!("Medium (51-250 employees)"));
    raw.insert(INDUSTRY, json!("Manufacturing"));
    raw.insert(
        EMISSIONS,
        json!("Scope 1: 1,200 tons CO2e, Scope 2: 3,500 tons CO2e"),
    );
    let answers = AnswerStore::from_raw(&QuestionCatalog::fixed_flow(), &raw);

    let form = ReportForm::from_answers(&answers);
    assert!(form.missing_fields().is_empty());
    assert_eq!(form.emissions.scope2.as_deref(), Some("3,500 tons CO2e"));
    assert_eq!(form.fiscal_year, None);

    let (service, _) = build_service();
    let report = service.create_draft(author(), form).expect("draft");
    assert_eq!(report.scope3_emissions, None);
}
