//! Report drafts, payment and completion, behind a storage trait.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    AuthorId, EmissionsDisclosure, Payment, PaymentId, PaymentReceipt, PaymentStatus, Report,
    ReportForm, ReportId, ReportPricing, ReportStatus, ReportStatusView,
};
pub use repository::{ReportRepository, RepositoryError};
pub use router::report_router;
pub use service::{ReportService, ReportServiceError};
