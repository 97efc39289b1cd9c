use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use super::domain::{
    AuthorId, Payment, PaymentId, PaymentReceipt, PaymentStatus, Report, ReportForm, ReportId,
    ReportPricing, ReportStatus,
};
use super::repository::{ReportRepository, RepositoryError};

/// Tolerance when comparing paid and due amounts.
const AMOUNT_EPSILON: f64 = 0.005;

static REPORT_SEQUENCE: AtomicU64 = AtomicU64::new(1);
static PAYMENT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_report_id() -> ReportId {
    let id = REPORT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ReportId(format!("rpt-{id:06}"))
}

fn next_payment_id() -> PaymentId {
    let id = PAYMENT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    PaymentId(format!("pay-{id:06}"))
}

/// Drives reports through draft, preview, paid and complete.
pub struct ReportService<R> {
    repository: Arc<R>,
    pricing: ReportPricing,
}

impl<R> ReportService<R>
where
    R: ReportRepository + 'static,
{
    pub fn new(repository: Arc<R>, pricing: ReportPricing) -> Self {
        Self {
            repository,
            pricing,
        }
    }

    pub fn pricing(&self) -> &ReportPricing {
        &self.pricing
    }

    /// Validate the form and store a new draft.
    pub fn create_draft(
        &self,
        author: AuthorId,
        form: ReportForm,
    ) -> Result<Report, ReportServiceError> {
        let missing = form.missing_fields();
        if !missing.is_empty() {
            return Err(ReportServiceError::MissingFields(missing));
        }

        let report = Report::draft(next_report_id(), author, form, &self.pricing, Utc::now());
        let stored = self.repository.insert(report)?;
        info!(report = %stored.id.0, company = %stored.company_name, "report draft created");
        Ok(stored)
    }

    /// Attach generated preview content (draft -> preview).
    pub fn attach_preview(
        &self,
        id: &ReportId,
        content: String,
    ) -> Result<Report, ReportServiceError> {
        if content.trim().is_empty() {
            return Err(ReportServiceError::EmptyContent("preview_content"));
        }
        self.transition(id, ReportStatus::Preview, |report| {
            report.preview_content = Some(content);
            Ok(())
        })
    }

    /// Settle the report fee (preview -> paid).
    pub fn record_payment(
        &self,
        id: &ReportId,
        receipt: PaymentReceipt,
    ) -> Result<Report, ReportServiceError> {
        self.transition(id, ReportStatus::Paid, |report| {
            if receipt.status != PaymentStatus::Completed {
                return Err(ReportServiceError::PaymentRejected(format!(
                    "payment is {}",
                    receipt.status.label()
                )));
            }
            if !receipt.currency.eq_ignore_ascii_case(&report.currency) {
                return Err(ReportServiceError::PaymentRejected(format!(
                    "expected {} but received {}",
                    report.currency, receipt.currency
                )));
            }
            if receipt.amount + AMOUNT_EPSILON < report.payment_amount {
                return Err(ReportServiceError::PaymentRejected(format!(
                    "{:.2} does not cover {:.2} {}",
                    receipt.amount, report.payment_amount, report.currency
                )));
            }

            let now = Utc::now();
            report.payment = Some(Payment {
                id: next_payment_id(),
                transaction_id: receipt.transaction_id,
                amount: receipt.amount,
                currency: report.currency.clone(),
                status: PaymentStatus::Completed,
                method: receipt.method,
                user_id: report.author_id.clone(),
                report_id: report.id.clone(),
                created_at: now,
                paid_at: Some(now),
            });
            Ok(())
        })
    }

    /// Store the full report and its PDF reference (paid -> complete).
    pub fn complete(
        &self,
        id: &ReportId,
        full_content: String,
        pdf_url: Option<String>,
    ) -> Result<Report, ReportServiceError> {
        if full_content.trim().is_empty() {
            return Err(ReportServiceError::EmptyContent("full_content"));
        }
        self.transition(id, ReportStatus::Complete, |report| {
            report.full_content = Some(full_content);
            report.pdf_url = pdf_url;
            report.completed_at = Some(Utc::now());
            Ok(())
        })
    }

    /// Mark generation as failed from any non-terminal state.
    pub fn fail(&self, id: &ReportId, reason: String) -> Result<Report, ReportServiceError> {
        let report = self.transition(id, ReportStatus::Failed, |report| {
            report.failure_reason = Some(reason);
            Ok(())
        })?;
        warn!(report = %report.id.0, reason = ?report.failure_reason, "report generation failed");
        Ok(report)
    }

    pub fn get(&self, id: &ReportId) -> Result<Report, ReportServiceError> {
        let report = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(report)
    }

    pub fn list_for_author(&self, author: &AuthorId) -> Result<Vec<Report>, ReportServiceError> {
        Ok(self.repository.list_by_author(author)?)
    }

    fn transition<F>(
        &self,
        id: &ReportId,
        to: ReportStatus,
        apply: F,
    ) -> Result<Report, ReportServiceError>
    where
        F: FnOnce(&mut Report) -> Result<(), ReportServiceError>,
    {
        let mut report = self.get(id)?;
        if !allows(&report, to) {
            return Err(ReportServiceError::InvalidTransition {
                from: report.status,
                to,
            });
        }

        apply(&mut report)?;
        let from = report.status;
        report.status = to;
        report.updated_at = Utc::now();
        match self.repository.update_if_status(report.clone(), from) {
            Ok(()) => {}
            Err(RepositoryError::StatusMismatch { actual }) => {
                return Err(ReportServiceError::InvalidTransition { from: actual, to });
            }
            Err(err) => return Err(err.into()),
        }
        info!(
            report = %report.id.0,
            from = from.label(),
            to = to.label(),
            "report status changed"
        );
        Ok(report)
    }
}

/// Allowed status changes. Reports without a fee skip the paid step.
fn allows(report: &Report, to: ReportStatus) -> bool {
    use ReportStatus::*;

    match (report.status, to) {
        (Draft, Preview) => true,
        (Preview, Paid) => report.payment_required,
        (Paid, Complete) => true,
        (Preview, Complete) => !report.payment_required,
        (from, Failed) => !from.is_terminal(),
        _ => false,
    }
}

/// Error raised by the report service.
#[derive(Debug, thiserror::Error)]
pub enum ReportServiceError {
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("{0} must not be empty")]
    EmptyContent(&'static str),
    #[error("cannot move report from {} to {}", .from.label(), .to.label())]
    InvalidTransition { from: ReportStatus, to: ReportStatus },
    #[error("payment rejected: {0}")]
    PaymentRejected(String),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
