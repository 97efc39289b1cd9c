use chrono::NaiveDate;
use serde::Serialize;

use super::answers::AnswerStore;
use super::profile::CompanyProfile;
use super::recommendations::{recommend, Recommendation};
use super::scoring::{ScoreComponent, ScoreResult, ScoreStatus, ScoringEngine};
use super::trend::{synthesize_trend, TrendPoint};

/// Status band per score, as shown on the dashboard cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreStatuses {
    pub environmental: ScoreStatus,
    pub social: ScoreStatus,
    pub governance: ScoreStatus,
    pub overall: ScoreStatus,
}

impl From<&ScoreResult> for ScoreStatuses {
    fn from(scores: &ScoreResult) -> Self {
        Self {
            environmental: ScoreStatus::from_score(scores.environmental),
            social: ScoreStatus::from_score(scores.social),
            governance: ScoreStatus::from_score(scores.governance),
            overall: ScoreStatus::from_score(scores.overall),
        }
    }
}

/// Everything the results dashboard renders for one completed assessment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentReport {
    pub generated_on: NaiveDate,
    pub answered: usize,
    pub scores: ScoreResult,
    pub statuses: ScoreStatuses,
    pub components: Vec<ScoreComponent>,
    pub recommendations: Vec<Recommendation>,
    pub trend: Vec<TrendPoint>,
    pub profile: CompanyProfile,
}

impl AssessmentReport {
    pub fn build(engine: &ScoringEngine, answers: &AnswerStore, as_of: NaiveDate) -> Self {
        let breakdown = engine.breakdown(answers);
        let scores = breakdown.scores;

        Self {
            generated_on: as_of,
            answered: answers.iter().filter(|(_, answer)| answer.is_filled()).count(),
            statuses: ScoreStatuses::from(&scores),
            components: breakdown.components,
            recommendations: recommend(&scores),
            trend: synthesize_trend(&scores, as_of),
            profile: CompanyProfile::from_answers(answers),
            scores,
        }
    }

    pub fn is_satisfactory(&self) -> bool {
        self.recommendations.is_empty()
    }
}
