use super::domain::EsgCategory;
use super::scoring::ScoreResult;
use serde::{Deserialize, Serialize};

/// Sub-scores below this need improvement.
pub const IMPROVEMENT_THRESHOLD: u8 = 70;
/// Environmental scores at or above this earn a leadership note.
pub const LEADERSHIP_THRESHOLD: u8 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub category: EsgCategory,
    pub title: String,
    pub description: String,
    pub priority: Priority,
}

fn needs_improvement(category: EsgCategory) -> Recommendation {
    let (title, description) = match category {
        EsgCategory::Environmental => (
            "Strengthen environmental management",
            "Roll out full carbon footprint monitoring and set explicit emission reduction targets.",
        ),
        EsgCategory::Social => (
            "Improve social responsibility performance",
            "Expand workforce diversity programmes and community engagement to lift stakeholder satisfaction.",
        ),
        EsgCategory::Governance => (
            "Formalise the governance framework",
            "Adopt a formal ESG policy framework aligned with international reporting standards.",
        ),
    };
    Recommendation {
        category,
        title: title.to_string(),
        description: description.to_string(),
        priority: Priority::High,
    }
}

fn environmental_leadership() -> Recommendation {
    Recommendation {
        category: EsgCategory::Environmental,
        title: "Maintain environmental leadership".to_string(),
        description: "Keep optimising environmental performance and consider ISO 14001 certification."
            .to_string(),
        priority: Priority::Medium,
    }
}

/// Threshold-driven recommendations, environmental first.
///
/// An empty list means every category is satisfactory; callers render their
/// own "performance is excellent" message in that case.
pub fn recommend(scores: &ScoreResult) -> Vec<Recommendation> {
    let mut recommendations: Vec<Recommendation> = EsgCategory::ordered()
        .into_iter()
        .filter(|category| scores.get(*category) < IMPROVEMENT_THRESHOLD)
        .map(needs_improvement)
        .collect();

    if scores.environmental >= LEADERSHIP_THRESHOLD {
        recommendations.push(environmental_leadership());
    }

    recommendations
}
