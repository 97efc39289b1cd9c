use std::collections::HashMap;
use std::sync::{Arc, Barrier, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::workflows::reports::domain::{
    AuthorId, EmissionsDisclosure, PaymentReceipt, PaymentStatus, Report, ReportForm, ReportId,
    ReportPricing, ReportStatus,
};
use crate::workflows::reports::repository::{ReportRepository, RepositoryError};
use crate::workflows::reports::{report_router, ReportService};

pub(super) fn author() -> AuthorId {
    AuthorId("user-7f3a".to_string())
}

pub(super) fn form() -> ReportForm {
    ReportForm {
        title: None,
        company_name: "Harbour Logistics".to_string(),
        industry: "Manufacturing".to_string(),
        company_size: "Medium (51-250 employees)".to_string(),
        location: Some("Hong Kong".to_string()),
        description: None,
        frameworks: vec!["GRI (Global Reporting Initiative)".to_string()],
        fiscal_year: None,
        material_topics: vec!["Climate Change".to_string()],
        emissions: EmissionsDisclosure::from_note("Scope 1: 1,200 tons CO2e"),
    }
}

pub(super) fn receipt(amount: f64) -> PaymentReceipt {
    PaymentReceipt {
        transaction_id: Some("txn_0001".to_string()),
        amount,
        currency: "HKD".to_string(),
        status: PaymentStatus::Completed,
        method: "card".to_string(),
    }
}

pub(super) fn build_service() -> (ReportService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = ReportService::new(repository.clone(), ReportPricing::default());
    (service, repository)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<ReportId, Report>>>,
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
        let stored = guard.get_mut(&report.id).ok_or(RepositoryError::NotFound)?;
        if stored.status != expected {
            return Err(RepositoryError::StatusMismatch {
                actual: stored.status,
            });
        }
        *stored = report;
        Ok(())
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

/// Holds every `fetch` at a barrier so concurrent transitions read the same state.
pub(super) struct LockstepRepository {
    pub(super) inner: MemoryRepository,
    pub(super) barrier: Barrier,
}

impl ReportRepository for LockstepRepository {
    fn insert(&self, report: Report) -> Result<Report, RepositoryError> {
        self.inner.insert(report)
    }

    fn update_if_status(
        &self,
        report: Report,
        expected: ReportStatus,
    ) -> Result<(), RepositoryError> {
        self.inner.update_if_status(report, expected)
    }

    fn fetch(&self, id: &ReportId) -> Result<Option<Report>, RepositoryError> {
        let report = self.inner.fetch(id);
        self.barrier.wait();
        report
    }

    fn list_by_author(&self, author: &AuthorId) -> Result<Vec<Report>, RepositoryError> {
        self.inner.list_by_author(author)
    }
}

pub(super) struct UnavailableRepository;

impl ReportRepository for UnavailableRepository {
    fn insert(&self, _report: Report) -> Result<Report, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update_if_status(
        &self,
        _report: Report,
        _expected: ReportStatus,
    ) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &ReportId) -> Result<Option<Report>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn list_by_author(&self, _author: &AuthorId) -> Result<Vec<Report>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn router_with_service(service: ReportService<MemoryRepository>) -> axum::Router {
    report_router(Arc::new(service))
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
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
