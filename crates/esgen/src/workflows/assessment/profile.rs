use super::answers::AnswerStore;
use super::catalog::{
    BUSINESS_DESCRIPTION, COMPANY_NAME, COMPANY_SIZE, EMISSIONS, FISCAL_YEAR, FRAMEWORKS, INDUSTRY,
    LOCATION, MATERIAL_TOPICS,
};
use super::domain::QuestionId;
use serde::Serialize;

/// Company facts read straight from the fixed-flow answers for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompanyProfile {
    pub company_name: Option<String>,
    pub company_size: Option<String>,
    pub industry: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub frameworks: Vec<String>,
    pub material_topics: Vec<String>,
    pub fiscal_year: Option<String>,
    pub emissions: Option<String>,
}

impl CompanyProfile {
    pub fn from_answers(answers: &AnswerStore) -> Self {
        let text = |id: QuestionId| {
            answers
                .text(id)
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };
        let list = |id: QuestionId| {
            answers
                .selections(id)
                .map(<[String]>::to_vec)
                .unwrap_or_default()
        };

        Self {
            company_name: text(COMPANY_NAME),
            company_size: text(COMPANY_SIZE),
            industry: text(INDUSTRY),
            location: text(LOCATION),
            description: text(BUSINESS_DESCRIPTION),
            frameworks: list(FRAMEWORKS),
            material_topics: list(MATERIAL_TOPICS),
            fiscal_year: text(FISCAL_YEAR),
            emissions: text(EMISSIONS),
        }
    }

    /// Name to show in headings, falling back to a generic label.
    pub fn display_name(&self) -> &str {
        self.company_name.as_deref().unwrap_or("Your company")
    }
}
