use super::domain::{Question, QuestionCategory, QuestionId, QuestionType};
use serde::Serialize;

pub const COMPANY_NAME: QuestionId = QuestionId(1);
pub const COMPANY_SIZE: QuestionId = QuestionId(2);
pub const INDUSTRY: QuestionId = QuestionId(3);
pub const LOCATION: QuestionId = QuestionId(4);
pub const BUSINESS_DESCRIPTION: QuestionId = QuestionId(5);
pub const ESG_POLICY: QuestionId = QuestionId(6);
pub const FRAMEWORKS: QuestionId = QuestionId(7);
pub const MATURITY_RATING: QuestionId = QuestionId(8);
pub const INITIATIVES: QuestionId = QuestionId(9);
pub const MATERIAL_TOPICS: QuestionId = QuestionId(10);
pub const ESG_GOALS: QuestionId = QuestionId(11);
pub const CHALLENGES: QuestionId = QuestionId(12);
pub const STAKEHOLDER_IMPORTANCE: QuestionId = QuestionId(13);
pub const FISCAL_YEAR: QuestionId = QuestionId(14);
pub const EMISSIONS: QuestionId = QuestionId(15);

pub const FIXED_FLOW_VERSION: &str = "fixed-flow/2024.1";
pub const BANK_FLOW_VERSION: &str = "question-bank/2024.1";

/// Ordered, versioned set of questions a session walks through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionCatalog {
    pub version: &'static str,
    pub questions: Vec<Question>,
}

impl QuestionCatalog {
    /// The fixed 15-question flow used by the assessment widget.
    pub fn fixed_flow() -> Self {
        Self {
            version: FIXED_FLOW_VERSION,
            questions: FIXED_FLOW.to_vec(),
        }
    }

    pub fn from_questions(version: &'static str, questions: Vec<Question>) -> Self {
        Self { version, questions }
    }

    pub fn question(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

static FIXED_FLOW: [Question; 15] = [
    Question {
        id: COMPANY_NAME,
        kind: QuestionType::FreeText,
        category: QuestionCategory::Company,
        prompt: "What is your company name?",
        prompt_zh: "您的公司名稱是什麼？",
        options: &[],
        options_zh: &[],
        placeholder: Some("Enter your company name"),
        placeholder_zh: Some("請輸入公司名稱"),
    },
    Question {
        id: COMPANY_SIZE,
        kind: QuestionType::SingleChoice,
        category: QuestionCategory::Company,
        prompt: "What is your company size?",
        prompt_zh: "您的公司規模是多少？",
        options: &[
            "Startup (1-10 employees)",
            "Small (11-50 employees)",
            "Medium (51-250 employees)",
            "Large (251-1000 employees)",
            "Enterprise (1000+ employees)",
        ],
        options_zh: &[
            "初創企業 (1-10人)",
            "小型企業 (11-50人)",
            "中型企業 (51-250人)",
            "大型企業 (251-1000人)",
            "大型集團 (1000人以上)",
        ],
        placeholder: None,
        placeholder_zh: None,
    },
    Question {
        id: INDUSTRY,
        kind: QuestionType::SingleChoice,
        category: QuestionCategory::Company,
        prompt: "Which industry does your business operate in?",
        prompt_zh: "您的企業在哪個行業營運？",
        options: &[
            "Technology & Software",
            "Manufacturing",
            "Healthcare",
            "Financial Services",
            "Retail & E-commerce",
            "Energy & Utilities",
            "Professional Services",
            "Real Estate",
            "Other",
        ],
        options_zh: &[
            "科技及軟件",
            "製造業",
            "醫療保健",
            "金融服務",
            "零售及電子商務",
            "能源及公用事業",
            "專業服務",
            "房地產",
            "其他",
        ],
        placeholder: None,
        placeholder_zh: None,
    },
    Question {
        id: LOCATION,
        kind: QuestionType::FreeText,
        category: QuestionCategory::Company,
        prompt: "Where is your primary business location?",
        prompt_zh: "您的主要營運地點在哪裡？",
        options: &[],
        options_zh: &[],
        placeholder: Some("e.g., Hong Kong, China, Asia Pacific"),
        placeholder_zh: Some("例如：香港、中國大陸、亞太地區"),
    },
    Question {
        id: BUSINESS_DESCRIPTION,
        kind: QuestionType::LongText,
        category: QuestionCategory::Company,
        prompt: "Briefly describe your business and its primary activities.",
        prompt_zh: "請簡要描述您的業務及其主要活動。",
        options: &[],
        options_zh: &[],
        placeholder: Some("Tell us about your business operations and services..."),
        placeholder_zh: Some("簡述您的公司業務和可持續發展目標..."),
    },
    Question {
        id: ESG_POLICY,
        kind: QuestionType::SingleChoice,
        category: QuestionCategory::EsgPolicy,
        prompt: "Does your company currently have a formal ESG policy?",
        prompt_zh: "貴公司目前是否有正式的ESG政策？",
        options: &[
            "Yes, fully implemented",
            "Yes, partially implemented",
            "In development",
            "Planning to develop",
            "No formal policy",
        ],
        options_zh: &[
            "是，已全面實施",
            "是，部分實施",
            "正在制定中",
            "計劃制定",
            "沒有正式政策",
        ],
        placeholder: None,
        placeholder_zh: None,
    },
    Question {
        id: FRAMEWORKS,
        kind: QuestionType::MultiChoice,
        category: QuestionCategory::EsgPolicy,
        prompt: "Which ESG reporting frameworks are you interested in? (Select all that apply)",
        prompt_zh: "您希望遵循哪些ESG報告框架？（可選多項）",
        options: &[
            "GRI (Global Reporting Initiative)",
            "TCFD (Task Force on Climate-related Financial Disclosures)",
            "SASB (Sustainability Accounting Standards Board)",
            "ISSB (International Sustainability Standards Board)",
            "CDP (Carbon Disclosure Project)",
            "UN SDGs (Sustainable Development Goals)",
        ],
        options_zh: &[
            "GRI (全球報告倡議組織)",
            "TCFD (氣候相關財務資訊揭露)",
            "SASB (可持續性會計準則委員會)",
            "ISSB (國際可持續性準則委員會)",
            "CDP (碳披露項目)",
            "UN SDGs (聯合國可持續發展目標)",
        ],
        placeholder: None,
        placeholder_zh: None,
    },
    Question {
        id: MATURITY_RATING,
        kind: QuestionType::Rating,
        category: QuestionCategory::EsgPolicy,
        prompt: "How would you rate your current ESG maturity level?",
        prompt_zh: "您如何評價目前的ESG成熟度？",
        options: &[],
        options_zh: &[],
        placeholder: None,
        placeholder_zh: None,
    },
    Question {
        id: INITIATIVES,
        kind: QuestionType::MultiChoice,
        category: QuestionCategory::Initiatives,
        prompt: "Which ESG initiatives are you currently implementing? (Select all that apply)",
        prompt_zh: "您目前正在實施哪些ESG措施？（可選多項）",
        options: &[
            "Carbon footprint monitoring",
            "Sustainable supply chain",
            "Diversity & inclusion programs",
            "Employee wellbeing initiatives",
            "Ethical governance practices",
            "Community engagement",
            "Waste reduction programs",
            "Energy efficiency measures",
            "Water conservation",
            "Renewable energy adoption",
        ],
        options_zh: &[
            "碳足跡監測",
            "可持續供應鏈",
            "多元化與共融計劃",
            "員工福祉措施",
            "道德管治實踐",
            "社區參與",
            "廢物減量計劃",
            "能源效益措施",
            "節水措施",
            "採用可再生能源",
        ],
        placeholder: None,
        placeholder_zh: None,
    },
    Question {
        id: MATERIAL_TOPICS,
        kind: QuestionType::MultiChoice,
        category: QuestionCategory::Initiatives,
        prompt: "Which material ESG topics are most relevant to your business? (Select all that apply)",
        prompt_zh: "哪些重要性ESG議題與您的業務最相關？（可選多項）",
        options: &[
            "Climate Change",
            "Energy Management",
            "Water Management",
            "Waste Management",
            "Employee Diversity",
            "Occupational Health & Safety",
            "Supply Chain Management",
            "Data Privacy & Security",
            "Anti-corruption",
            "Community Investment",
            "Product Quality",
            "Innovation & R&D",
        ],
        options_zh: &[
            "氣候變化",
            "能源管理",
            "水資源管理",
            "廢物管理",
            "員工多樣性",
            "職業健康與安全",
            "供應鏈管理",
            "數據私隱與安全",
            "反貪腐",
            "社區投資",
            "產品質量",
            "創新研發",
        ],
        placeholder: None,
        placeholder_zh: None,
    },
    Question {
        id: ESG_GOALS,
        kind: QuestionType::LongText,
        category: QuestionCategory::Goals,
        prompt: "What are your organization's primary ESG goals for the next 2-3 years?",
        prompt_zh: "貴組織未來2-3年的主要ESG目標是什麼？",
        options: &[],
        options_zh: &[],
        placeholder: Some("Describe your ESG objectives and targets..."),
        placeholder_zh: Some("描述您的ESG目標和指標..."),
    },
    Question {
        id: CHALLENGES,
        kind: QuestionType::MultiChoice,
        category: QuestionCategory::Goals,
        prompt: "What are the main challenges you face in implementing ESG practices?",
        prompt_zh: "實施ESG措施時面臨的主要挑戰是什麼？",
        options: &[
            "Limited budget/resources",
            "Lack of expertise",
            "Measuring impact",
            "Stakeholder buy-in",
            "Regulatory compliance",
            "Data collection and reporting",
            "Supply chain complexity",
            "Cultural change management",
        ],
        options_zh: &[
            "預算/資源有限",
            "缺乏專業知識",
            "衡量影響",
            "持份者支持",
            "監管合規",
            "數據收集和報告",
            "供應鏈複雜性",
            "文化變革管理",
        ],
        placeholder: None,
        placeholder_zh: None,
    },
    Question {
        id: STAKEHOLDER_IMPORTANCE,
        kind: QuestionType::SingleChoice,
        category: QuestionCategory::Goals,
        prompt: "How important is ESG to your stakeholders?",
        prompt_zh: "ESG對您的持份者有多重要？",
        options: &[
            "Critical - Top priority",
            "Very important",
            "Moderately important",
            "Somewhat important",
            "Not currently a priority",
        ],
        options_zh: &[
            "至關重要 - 首要任務",
            "非常重要",
            "中等重要",
            "有些重要",
            "目前不是優先事項",
        ],
        placeholder: None,
        placeholder_zh: None,
    },
    Question {
        id: FISCAL_YEAR,
        kind: QuestionType::FreeText,
        category: QuestionCategory::Data,
        prompt: "What is your fiscal year for ESG reporting?",
        prompt_zh: "您的ESG報告財政年度是？",
        options: &[],
        options_zh: &[],
        placeholder: Some("e.g., 2024"),
        placeholder_zh: Some("例如：2024"),
    },
    Question {
        id: EMISSIONS,
        kind: QuestionType::LongText,
        category: QuestionCategory::Data,
        prompt: "Do you have any greenhouse gas emissions data? (Optional - provide estimates or leave blank)",
        prompt_zh: "您是否有溫室氣體排放數據？（可選 - 提供估算值或留空）",
        options: &[],
        options_zh: &[],
        placeholder: Some(
            "e.g., Scope 1: 1,200 tons CO2e, Scope 2: 3,500 tons CO2e, Scope 3: 8,900 tons CO2e",
        ),
        placeholder_zh: Some("例如：範圍一：1,200噸CO2e，範圍二：3,500噸CO2e，範圍三：8,900噸CO2e"),
    },
];
