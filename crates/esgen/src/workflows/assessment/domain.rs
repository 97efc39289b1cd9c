use serde::{Deserialize, Serialize};
use std::fmt;

/// Display identifier of a question inside an assessment flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub u16);

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{}", self.0)
    }
}

/// Input widget a question is rendered with, which also fixes its answer shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    SingleChoice,
    FreeText,
    LongText,
    Rating,
    MultiChoice,
}

impl QuestionType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::SingleChoice => "single choice",
            Self::FreeText => "free text",
            Self::LongText => "long text",
            Self::Rating => "rating (1-10)",
            Self::MultiChoice => "multi choice",
        }
    }

    pub const fn has_options(self) -> bool {
        matches!(self, Self::SingleChoice | Self::MultiChoice)
    }
}

/// Grouping used for progress display in an assessment flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionCategory {
    Company,
    EsgPolicy,
    Initiatives,
    Goals,
    Data,
    Environment,
    Social,
    Governance,
}

impl QuestionCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Company => "Company Profile",
            Self::EsgPolicy => "ESG Policy",
            Self::Initiatives => "ESG Initiatives",
            Self::Goals => "Goals & Challenges",
            Self::Data => "Data Collection",
            Self::Environment => "Environmental",
            Self::Social => "Social",
            Self::Governance => "Governance",
        }
    }

    pub const fn label_zh(self) -> &'static str {
        match self {
            Self::Company => "公司資料",
            Self::EsgPolicy => "ESG政策",
            Self::Initiatives => "ESG措施",
            Self::Goals => "目標與挑戰",
            Self::Data => "數據收集",
            Self::Environment => "環境",
            Self::Social => "社會",
            Self::Governance => "管治",
        }
    }
}

impl From<EsgCategory> for QuestionCategory {
    fn from(value: EsgCategory) -> Self {
        match value {
            EsgCategory::Environmental => Self::Environment,
            EsgCategory::Social => Self::Social,
            EsgCategory::Governance => Self::Governance,
        }
    }
}

/// The three scoring dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EsgCategory {
    Environmental,
    Social,
    Governance,
}

impl EsgCategory {
    pub const fn ordered() -> [Self; 3] {
        [Self::Environmental, Self::Social, Self::Governance]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Environmental => "Environmental",
            Self::Social => "Social",
            Self::Governance => "Governance",
        }
    }
}

impl fmt::Display for EsgCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A question in the shape every assessment flow renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: QuestionId,
    #[serde(rename = "type")]
    pub kind: QuestionType,
    pub category: QuestionCategory,
    pub prompt: &'static str,
    pub prompt_zh: &'static str,
    pub options: &'static [&'static str],
    pub options_zh: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder_zh: Option<&'static str>,
}

impl Question {
    /// Whether `value` is one of the selectable options in either language.
    pub fn accepts_option(&self, value: &str) -> bool {
        self.options
            .iter()
            .chain(self.options_zh.iter())
            .any(|option| *option == value)
    }
}

/// Input type as recorded in the question bank before adaptation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BankQuestionType {
    SingleChoice,
    FreeText,
    LongText,
    MultiChoice,
    Attachment,
}

impl BankQuestionType {
    pub const fn adapted(self) -> QuestionType {
        match self {
            Self::SingleChoice => QuestionType::SingleChoice,
            Self::FreeText => QuestionType::FreeText,
            Self::LongText | Self::Attachment => QuestionType::LongText,
            Self::MultiChoice => QuestionType::MultiChoice,
        }
    }
}

/// Entry of the large question bank, grouped by disclosure section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BankQuestion {
    pub code: &'static str,
    pub section: &'static str,
    pub category: EsgCategory,
    #[serde(rename = "type")]
    pub kind: BankQuestionType,
    pub prompt: &'static str,
    pub prompt_zh: &'static str,
    pub options: &'static [&'static str],
    pub options_zh: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment_prompt: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment_prompt_zh: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark_zh: Option<&'static str>,
    pub weight: u8,
}

impl BankQuestion {
    pub fn requires_attachment(&self) -> bool {
        self.attachment_prompt.is_some()
    }

    /// Convert into the flow shape under a new display id.
    pub fn adapt(&self, id: QuestionId) -> Question {
        Question {
            id,
            kind: self.kind.adapted(),
            category: self.category.into(),
            prompt: self.prompt,
            prompt_zh: self.prompt_zh,
            options: self.options,
            options_zh: self.options_zh,
            placeholder: None,
            placeholder_zh: None,
        }
    }
}

/// Number of questions to draw from each bank category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CategoryCounts {
    #[serde(default)]
    pub environmental: usize,
    #[serde(default)]
    pub social: usize,
    #[serde(default)]
    pub governance: usize,
}

impl CategoryCounts {
    pub const fn new(environmental: usize, social: usize, governance: usize) -> Self {
        Self {
            environmental,
            social,
            governance,
        }
    }

    /// Draw used by the standard short assessment.
    pub const fn standard() -> Self {
        Self::new(6, 6, 3)
    }

    pub const fn get(&self, category: EsgCategory) -> usize {
        match category {
            EsgCategory::Environmental => self.environmental,
            EsgCategory::Social => self.social,
            EsgCategory::Governance => self.governance,
        }
    }

    pub const fn total(&self) -> usize {
        self.environmental
            .saturating_add(self.social)
            .saturating_add(self.governance)
    }
}
