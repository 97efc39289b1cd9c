use super::catalog::QuestionCatalog;
use super::domain::{Question, QuestionId, QuestionType};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::warn;

pub const RATING_MIN: u8 = 1;
pub const RATING_MAX: u8 = 10;

/// Answer value, shaped by the type of the question it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Answer {
    Text(String),
    Choice(String),
    MultiChoice(Vec<String>),
    Rating(u8),
}

impl Answer {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Answer::Text(value) | Answer::Choice(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_choice(&self) -> Option<&str> {
        match self {
            Answer::Choice(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_selections(&self) -> Option<&[String]> {
        match self {
            Answer::MultiChoice(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_rating(&self) -> Option<u8> {
        match self {
            Answer::Rating(value) if (RATING_MIN..=RATING_MAX).contains(value) => Some(*value),
            _ => None,
        }
    }

    /// Whether the answer is complete enough to move past its question.
    pub fn is_filled(&self) -> bool {
        match self {
            Answer::Text(value) => !value.trim().is_empty(),
            Answer::Choice(value) => !value.is_empty(),
            Answer::MultiChoice(values) => !values.is_empty(),
            Answer::Rating(value) => (RATING_MIN..=RATING_MAX).contains(value),
        }
    }

    /// Validate an untyped value against the question it answers.
    pub fn conform(question: &Question, raw: &Value) -> Result<Self, AnswerError> {
        let mismatch = || AnswerError::TypeMismatch {
            question: question.id,
            expected: question.kind,
        };

        match question.kind {
            QuestionType::FreeText | QuestionType::LongText => raw
                .as_str()
                .map(|value| Answer::Text(value.to_string()))
                .ok_or_else(mismatch),
            QuestionType::SingleChoice => {
                let value = raw.as_str().ok_or_else(mismatch)?;
                if value.is_empty() || question.accepts_option(value) {
                    Ok(Answer::Choice(value.to_string()))
                } else {
                    Err(AnswerError::UnknownOption {
                        question: question.id,
                        option: value.to_string(),
                    })
                }
            }
            QuestionType::MultiChoice => {
                let items = raw.as_array().ok_or_else(mismatch)?;
                let mut selections: Vec<String> = Vec::with_capacity(items.len());
                for item in items {
                    let value = item.as_str().ok_or_else(mismatch)?;
                    if !question.accepts_option(value) {
                        return Err(AnswerError::UnknownOption {
                            question: question.id,
                            option: value.to_string(),
                        });
                    }
                    if !selections.iter().any(|existing| existing == value) {
                        selections.push(value.to_string());
                    }
                }
                Ok(Answer::MultiChoice(selections))
            }
            QuestionType::Rating => {
                let rating = match raw {
                    Value::Number(number) => number.as_i64(),
                    Value::String(text) => text.trim().parse::<i64>().ok(),
                    _ => None,
                }
                .ok_or_else(mismatch)?;
                if (RATING_MIN as i64..=RATING_MAX as i64).contains(&rating) {
                    Ok(Answer::Rating(rating as u8))
                } else {
                    Err(AnswerError::RatingOutOfRange {
                        question: question.id,
                        value: rating,
                    })
                }
            }
        }
    }
}

/// Reasons an answer is refused at the recording boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnswerError {
    #[error("{question} is not part of this assessment")]
    UnknownQuestion { question: QuestionId },
    #[error("{question} expects a {} answer", .expected.label())]
    TypeMismatch {
        question: QuestionId,
        expected: QuestionType,
    },
    #[error("'{option}' is not an option of {question}")]
    UnknownOption { question: QuestionId, option: String },
    #[error("rating {value} for {question} is outside 1-10")]
    RatingOutOfRange { question: QuestionId, value: i64 },
}

/// Answers keyed by question id as submitted by clients.
pub type RawAnswers = BTreeMap<QuestionId, Value>;

/// In-memory answers for one assessment. A missing key means unanswered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerStore {
    answers: BTreeMap<QuestionId, Answer>,
}

impl AnswerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an already-typed answer without catalog validation.
    pub fn insert(&mut self, id: QuestionId, answer: Answer) -> Option<Answer> {
        self.answers.insert(id, answer)
    }

    /// Validate `raw` against the catalog entry for `id` and store it.
    pub fn record(
        &mut self,
        catalog: &QuestionCatalog,
        id: QuestionId,
        raw: &Value,
    ) -> Result<&Answer, AnswerError> {
        let question = catalog
            .question(id)
            .ok_or(AnswerError::UnknownQuestion { question: id })?;
        let answer = Answer::conform(question, raw)?;
        self.answers.insert(id, answer);
        Ok(&self.answers[&id])
    }

    /// Build a store from client input, skipping anything that does not conform.
    pub fn from_raw(catalog: &QuestionCatalog, raw: &RawAnswers) -> Self {
        Self::from_raw_with_rejections(catalog, raw).0
    }

    /// Like [`AnswerStore::from_raw`], also handing back what was skipped.
    pub fn from_raw_with_rejections(
        catalog: &QuestionCatalog,
        raw: &RawAnswers,
    ) -> (Self, Vec<AnswerError>) {
        let mut store = Self::new();
        let mut rejected = Vec::new();
        for (id, value) in raw {
            if let Err(err) = store.record(catalog, *id, value) {
                warn!(question = %id, error = %err, "ignoring malformed answer");
                rejected.push(err);
            }
        }
        (store, rejected)
    }

    pub fn get(&self, id: QuestionId) -> Option<&Answer> {
        self.answers.get(&id)
    }

    pub fn text(&self, id: QuestionId) -> Option<&str> {
        self.get(id).and_then(Answer::as_text)
    }

    pub fn choice(&self, id: QuestionId) -> Option<&str> {
        self.get(id).and_then(Answer::as_choice)
    }

    pub fn selections(&self, id: QuestionId) -> Option<&[String]> {
        self.get(id).and_then(Answer::as_selections)
    }

    pub fn rating(&self, id: QuestionId) -> Option<u8> {
        self.get(id).and_then(Answer::as_rating)
    }

    pub fn is_answered(&self, id: QuestionId) -> bool {
        self.get(id).map(Answer::is_filled).unwrap_or(false)
    }

    pub fn remove(&mut self, id: QuestionId) -> Option<Answer> {
        self.answers.remove(&id)
    }

    pub fn clear(&mut self) {
        self.answers.clear();
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &Answer)> {
        self.answers.iter()
    }
}
