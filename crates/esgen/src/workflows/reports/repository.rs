use super::domain::{AuthorId, Report, ReportId, ReportStatus};

/// Storage abstraction so the service can run against any report store.
pub trait ReportRepository: Send + Sync {
    fn insert(&self, report: Report) -> Result<Report, RepositoryError>;
    /// Replace the stored report only while it still has status `expected`.
    ///
    /// The check and the write must happen atomically; a concurrent
    /// transition that got there first yields `StatusMismatch`.
    fn update_if_status(
        &self,
        report: Report,
        expected: ReportStatus,
    ) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &ReportId) -> Result<Option<Report>, RepositoryError>;
    fn list_by_author(&self, author: &AuthorId) -> Result<Vec<Report>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("record is now {}", .actual.label())]
    StatusMismatch { actual: ReportStatus },
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
