//! Questionnaire catalogs, answer capture, scoring and the results dashboard data.
//!
//! Everything below `service` is pure: catalogs are static, scoring and
//! recommendations are functions of the answer store, and the trend series
//! is derived from the final scores and a reference date.

pub mod answers;
pub mod bank;
pub mod catalog;
pub mod domain;
pub mod profile;
pub mod recommendations;
pub mod report;
pub mod router;
pub mod scoring;
pub mod selector;
pub mod service;
pub mod session;
pub mod trend;

#[cfg(test)]
mod tests;

pub use answers::{Answer, AnswerError, AnswerStore, RawAnswers};
pub use bank::QuestionBank;
pub use catalog::QuestionCatalog;
pub use domain::{
    BankQuestion, BankQuestionType, CategoryCounts, EsgCategory, Question, QuestionCategory,
    QuestionId, QuestionType,
};
pub use profile::CompanyProfile;
pub use recommendations::{recommend, Priority, Recommendation};
pub use report::{AssessmentReport, ScoreStatuses};
pub use router::assessment_router;
pub use scoring::{
    score, InitiativeKeywords, ScoreBreakdown, ScoreComponent, ScoreResult, ScoreStatus,
    ScoringEngine, ScoringRule,
};
pub use selector::{
    all_bank_questions, generate_custom_assessment, generate_random_assessment, select_questions,
};
pub use service::{AssessmentService, ScoredAssessment};
pub use session::{AssessmentSession, Progress, SessionError, SessionMode};
pub use trend::{synthesize_trend, TrendPoint};
