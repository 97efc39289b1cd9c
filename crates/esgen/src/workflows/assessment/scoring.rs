use super::answers::AnswerStore;
use super::catalog::{
    CHALLENGES, COMPANY_SIZE, ESG_POLICY, FRAMEWORKS, INITIATIVES, MATURITY_RATING,
    STAKEHOLDER_IMPORTANCE,
};
use super::domain::EsgCategory;
use serde::{Deserialize, Serialize};

pub const BASELINE: i32 = 50;
pub const SCORE_MIN: i32 = 0;
pub const SCORE_MAX: i32 = 100;
const NEUTRAL_MATURITY: i32 = 5;

/// Sub-scores and overall score, each within 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreResult {
    pub environmental: u8,
    pub social: u8,
    pub governance: u8,
    pub overall: u8,
}

impl ScoreResult {
    pub const fn get(&self, category: EsgCategory) -> u8 {
        match category {
            EsgCategory::Environmental => self.environmental,
            EsgCategory::Social => self.social,
            EsgCategory::Governance => self.governance,
        }
    }

    /// Combine clamped sub-scores; overall is the rounded mean.
    pub fn from_parts(environmental: u8, social: u8, governance: u8) -> Self {
        let sum = environmental as f64 + social as f64 + governance as f64;
        Self {
            environmental,
            social,
            governance,
            overall: (sum / 3.0).round() as u8,
        }
    }
}

/// Dashboard status band for a single score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreStatus {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl ScoreStatus {
    pub const fn from_score(score: u8) -> Self {
        if score >= 85 {
            Self::Excellent
        } else if score >= 70 {
            Self::Good
        } else if score >= 55 {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
        }
    }
}

/// Which answer produced an adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringRule {
    CompanySize,
    EsgPolicy,
    Frameworks,
    Maturity,
    Initiatives,
    Challenges,
    StakeholderImportance,
}

/// One signed adjustment to one sub-score, kept for audit display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub rule: ScoringRule,
    pub category: EsgCategory,
    pub delta: i32,
    pub notes: String,
}

/// Score plus the adjustments that led to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub scores: ScoreResult,
    pub components: Vec<ScoreComponent>,
}

/// Curated substring lists used to bucket initiative selections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitiativeKeywords {
    pub environmental: Vec<&'static str>,
    pub social: Vec<&'static str>,
    pub governance: Vec<&'static str>,
}

impl Default for InitiativeKeywords {
    fn default() -> Self {
        Self {
            environmental: vec![
                "carbon", "energy", "waste", "water", "renewable", "碳", "能源", "廢物", "水",
            ],
            social: vec![
                "diversity",
                "employee",
                "community",
                "inclusion",
                "多元",
                "員工",
                "社區",
            ],
            governance: vec!["governance", "ethic", "管治", "道德"],
        }
    }
}

impl InitiativeKeywords {
    fn bucket(&self, category: EsgCategory) -> &[&'static str] {
        match category {
            EsgCategory::Environmental => &self.environmental,
            EsgCategory::Social => &self.social,
            EsgCategory::Governance => &self.governance,
        }
    }

    /// Number of selections that mention at least one keyword of `category`.
    pub fn count_matches(&self, category: EsgCategory, selections: &[String]) -> usize {
        let keywords = self.bucket(category);
        selections
            .iter()
            .filter(|item| {
                let item = item.to_lowercase();
                keywords.iter().any(|keyword| item.contains(keyword))
            })
            .count()
    }
}

const COMPANY_SIZE_MARKERS: &[&str] = &["enterprise", "large", "1000+", "大型"];
const POLICY_FULL_MARKERS: &[&str] = &["fully implemented", "全面實施"];
const POLICY_PARTIAL_MARKERS: &[&str] = &["partially", "部分"];
const STAKEHOLDER_CRITICAL_MARKERS: &[&str] = &["critical", "至關重要"];
const STAKEHOLDER_VERY_MARKERS: &[&str] = &["very important", "非常重要"];

fn mentions(value: &str, markers: &[&str]) -> bool {
    let value = value.to_lowercase();
    markers.iter().any(|marker| value.contains(marker))
}

/// Stateless scorer applying the additive rules to an answer store.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    keywords: InitiativeKeywords,
}

impl ScoringEngine {
    pub fn new(keywords: InitiativeKeywords) -> Self {
        Self { keywords }
    }

    pub fn score(&self, answers: &AnswerStore) -> ScoreResult {
        self.breakdown(answers).scores
    }

    pub fn breakdown(&self, answers: &AnswerStore) -> ScoreBreakdown {
        let mut tally = Tally::default();

        if let Some(size) = answers.choice(COMPANY_SIZE) {
            if mentions(size, COMPANY_SIZE_MARKERS) {
                tally.add(
                    ScoringRule::CompanySize,
                    EsgCategory::Governance,
                    10,
                    format!("large organisation ({size})"),
                );
            }
        }

        if let Some(policy) = answers.choice(ESG_POLICY) {
            if mentions(policy, POLICY_FULL_MARKERS) {
                tally.add(
                    ScoringRule::EsgPolicy,
                    EsgCategory::Governance,
                    15,
                    "ESG policy fully implemented".to_string(),
                );
                tally.add(
                    ScoringRule::EsgPolicy,
                    EsgCategory::Social,
                    10,
                    "ESG policy fully implemented".to_string(),
                );
            } else if mentions(policy, POLICY_PARTIAL_MARKERS) {
                tally.add(
                    ScoringRule::EsgPolicy,
                    EsgCategory::Governance,
                    8,
                    "ESG policy partially implemented".to_string(),
                );
            }
        }

        if let Some(frameworks) = answers.selections(FRAMEWORKS) {
            let count = frameworks.len() as i32;
            if count > 0 {
                tally.add(
                    ScoringRule::Frameworks,
                    EsgCategory::Governance,
                    5 * count,
                    format!("{count} reporting framework(s) selected"),
                );
            }
        }

        if let Some(rating) = answers.rating(MATURITY_RATING) {
            let bonus = (rating as i32 - NEUTRAL_MATURITY) * 3;
            if bonus != 0 {
                for category in EsgCategory::ordered() {
                    tally.add(
                        ScoringRule::Maturity,
                        category,
                        bonus,
                        format!("self-rated maturity {rating}/10"),
                    );
                }
            }
        }

        if let Some(initiatives) = answers.selections(INITIATIVES) {
            for category in EsgCategory::ordered() {
                let matches = self.keywords.count_matches(category, initiatives) as i32;
                if matches > 0 {
                    tally.add(
                        ScoringRule::Initiatives,
                        category,
                        8 * matches,
                        format!("{matches} {} initiative(s) in place", category.label()),
                    );
                }
            }
        }

        if let Some(challenges) = answers.selections(CHALLENGES) {
            let count = challenges.len() as i32;
            if count > 0 {
                for category in EsgCategory::ordered() {
                    tally.add(
                        ScoringRule::Challenges,
                        category,
                        -2 * count,
                        format!("{count} implementation challenge(s) reported"),
                    );
                }
            }
        }

        if let Some(importance) = answers.choice(STAKEHOLDER_IMPORTANCE) {
            let bonus = if mentions(importance, STAKEHOLDER_CRITICAL_MARKERS) {
                Some((15, 10))
            } else if mentions(importance, STAKEHOLDER_VERY_MARKERS) {
                Some((10, 8))
            } else {
                None
            };
            if let Some((social, governance)) = bonus {
                let note = format!("stakeholder importance: {importance}");
                tally.add(
                    ScoringRule::StakeholderImportance,
                    EsgCategory::Social,
                    social,
                    note.clone(),
                );
                tally.add(
                    ScoringRule::StakeholderImportance,
                    EsgCategory::Governance,
                    governance,
                    note,
                );
            }
        }

        tally.finish()
    }
}

/// Score an answer store with the default keyword lists.
pub fn score(answers: &AnswerStore) -> ScoreResult {
    ScoringEngine::default().score(answers)
}

#[derive(Default)]
struct Tally {
    environmental: i32,
    social: i32,
    governance: i32,
    components: Vec<ScoreComponent>,
}

impl Tally {
    fn add(&mut self, rule: ScoringRule, category: EsgCategory, delta: i32, notes: String) {
        match category {
            EsgCategory::Environmental => self.environmental += delta,
            EsgCategory::Social => self.social += delta,
            EsgCategory::Governance => self.governance += delta,
        }
        self.components.push(ScoreComponent {
            rule,
            category,
            delta,
            notes,
        });
    }

    fn finish(self) -> ScoreBreakdown {
        let clamp = |delta: i32| (BASELINE + delta).clamp(SCORE_MIN, SCORE_MAX) as u8;
        ScoreBreakdown {
            scores: ScoreResult::from_parts(
                clamp(self.environmental),
                clamp(self.social),
                clamp(self.governance),
            ),
            components: self.components,
        }
    }
}
