use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::answers::{Answer, AnswerError, AnswerStore};
use super::catalog::QuestionCatalog;
use super::domain::{Question, QuestionId};
use super::report::AssessmentReport;
use super::scoring::ScoringEngine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionMode {
    Chat,
    Assessment,
    Report,
}

impl SessionMode {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Chat => "chat",
            Self::Assessment => "assessment",
            Self::Report => "report",
        }
    }
}

/// Position within the questionnaire; `position` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub position: usize,
    pub total: usize,
    pub percent: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("session is in {} mode, expected {}", .actual.label(), .expected.label())]
    WrongMode {
        expected: SessionMode,
        actual: SessionMode,
    },
    #[error("no question is on screen")]
    NoCurrentQuestion,
    #[error("{0} has not been answered")]
    Unanswered(QuestionId),
    #[error(transparent)]
    Answer(#[from] AnswerError),
}

/// One user's walk through a catalog: mode, cursor and answers.
#[derive(Debug, Clone)]
pub struct AssessmentSession {
    catalog: QuestionCatalog,
    engine: ScoringEngine,
    mode: SessionMode,
    show_welcome: bool,
    cursor: usize,
    answers: AnswerStore,
}

impl AssessmentSession {
    pub fn new(catalog: QuestionCatalog) -> Self {
        Self::with_engine(catalog, ScoringEngine::default())
    }

    pub fn with_engine(catalog: QuestionCatalog, engine: ScoringEngine) -> Self {
        Self {
            catalog,
            engine,
            mode: SessionMode::Chat,
            show_welcome: false,
            cursor: 0,
            answers: AnswerStore::new(),
        }
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    pub fn show_welcome(&self) -> bool {
        self.show_welcome
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    pub fn answers(&self) -> &AnswerStore {
        &self.answers
    }

    /// Enter the questionnaire from any mode with a clean slate.
    pub fn start_assessment(&mut self) {
        self.answers.clear();
        self.cursor = 0;
        self.show_welcome = true;
        self.mode = SessionMode::Assessment;
        debug!(catalog = self.catalog.version, "assessment started");
    }

    /// Dismiss the welcome card and show the first question.
    pub fn begin_questionnaire(&mut self) -> Result<(), SessionError> {
        self.expect_mode(SessionMode::Assessment)?;
        self.show_welcome = false;
        Ok(())
    }

    pub fn current_question(&self) -> Option<&Question> {
        if self.mode != SessionMode::Assessment || self.show_welcome {
            return None;
        }
        self.catalog.questions.get(self.cursor)
    }

    /// Record an answer for the question on screen.
    pub fn answer(&mut self, raw: &Value) -> Result<&Answer, SessionError> {
        self.expect_mode(SessionMode::Assessment)?;
        let id = self
            .current_question()
            .map(|question| question.id)
            .ok_or(SessionError::NoCurrentQuestion)?;
        Ok(self.answers.record(&self.catalog, id, raw)?)
    }

    pub fn can_go_next(&self) -> bool {
        self.current_question()
            .map(|question| self.answers.is_answered(question.id))
            .unwrap_or(false)
    }

    /// Advance the cursor, switching to report mode after the last question.
    pub fn next(&mut self) -> Result<SessionMode, SessionError> {
        self.expect_mode(SessionMode::Assessment)?;
        let id = self
            .current_question()
            .map(|question| question.id)
            .ok_or(SessionError::NoCurrentQuestion)?;
        if !self.answers.is_answered(id) {
            return Err(SessionError::Unanswered(id));
        }

        if self.cursor + 1 < self.catalog.len() {
            self.cursor += 1;
        } else {
            self.mode = SessionMode::Report;
            debug!(answered = self.answers.len(), "assessment complete");
        }
        Ok(self.mode)
    }

    /// Step back one question; returns false when already on the first.
    pub fn previous(&mut self) -> bool {
        if self.mode != SessionMode::Assessment || self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    pub fn restart(&mut self) {
        self.answers.clear();
        self.cursor = 0;
        self.show_welcome = false;
        self.mode = SessionMode::Chat;
    }

    pub fn progress(&self) -> Progress {
        let total = self.catalog.len();
        let position = if total == 0 { 0 } else { self.cursor + 1 };
        let percent = if total == 0 {
            0
        } else {
            ((position as f64 / total as f64) * 100.0).round() as u8
        };
        Progress {
            position,
            total,
            percent,
        }
    }

    /// Dashboard data for the finished questionnaire.
    pub fn report(&self, as_of: NaiveDate) -> Result<AssessmentReport, SessionError> {
        self.expect_mode(SessionMode::Report)?;
        Ok(AssessmentReport::build(&self.engine, &self.answers, as_of))
    }

    fn expect_mode(&self, expected: SessionMode) -> Result<(), SessionError> {
        if self.mode == expected {
            Ok(())
        } else {
            Err(SessionError::WrongMode {
                expected,
                actual: self.mode,
            })
        }
    }
}
