use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{rng, SeedableRng};
use serde::Serialize;

use super::answers::{AnswerStore, RawAnswers};
use super::bank::QuestionBank;
use super::catalog::{QuestionCatalog, BANK_FLOW_VERSION};
use super::domain::CategoryCounts;
use super::report::AssessmentReport;
use super::scoring::ScoringEngine;
use super::selector::select_questions;
use super::session::AssessmentSession;

/// Stateless facade over the catalog, selector and scoring engine.
#[derive(Debug, Clone)]
pub struct AssessmentService {
    bank: QuestionBank,
    engine: ScoringEngine,
    default_counts: CategoryCounts,
}

/// Scored answers plus anything that was dropped while loading them.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredAssessment {
    pub catalog_version: &'static str,
    pub report: AssessmentReport,
    pub rejected: Vec<String>,
}

impl Default for AssessmentService {
    fn default() -> Self {
        Self::new(CategoryCounts::standard())
    }
}

impl AssessmentService {
    pub fn new(default_counts: CategoryCounts) -> Self {
        Self {
            bank: QuestionBank::standard(),
            engine: ScoringEngine::default(),
            default_counts,
        }
    }

    pub fn with_engine(mut self, engine: ScoringEngine) -> Self {
        self.engine = engine;
        self
    }

    pub fn default_counts(&self) -> CategoryCounts {
        self.default_counts
    }

    pub fn fixed_flow(&self) -> QuestionCatalog {
        QuestionCatalog::fixed_flow()
    }

    /// Random bank draw; a seed makes the draw reproducible.
    pub fn random_catalog(
        &self,
        counts: Option<CategoryCounts>,
        seed: Option<u64>,
    ) -> QuestionCatalog {
        let counts = counts.unwrap_or(self.default_counts);
        let questions = match seed {
            Some(seed) => select_questions(&self.bank, counts, &mut StdRng::seed_from_u64(seed)),
            None => select_questions(&self.bank, counts, &mut rng()),
        };
        tracing::debug!(
            requested = counts.total(),
            selected = questions.len(),
            seeded = seed.is_some(),
            "random assessment drawn"
        );
        QuestionCatalog::from_questions(BANK_FLOW_VERSION, questions)
    }

    /// Score raw fixed-flow answers, skipping entries that do not conform.
    pub fn score(&self, raw: &RawAnswers, as_of: NaiveDate) -> ScoredAssessment {
        let catalog = self.fixed_flow();
        let (answers, rejected) = AnswerStore::from_raw_with_rejections(&catalog, raw);
        let report = AssessmentReport::build(&self.engine, &answers, as_of);
        tracing::info!(
            overall = report.scores.overall,
            answered = report.answered,
            rejected = rejected.len(),
            "assessment scored"
        );
        ScoredAssessment {
            catalog_version: catalog.version,
            report,
            rejected: rejected.iter().map(ToString::to_string).collect(),
        }
    }

    /// Fresh session over the fixed flow, sharing this service's engine.
    pub fn session(&self) -> AssessmentSession {
        AssessmentSession::with_engine(self.fixed_flow(), self.engine.clone())
    }
}
