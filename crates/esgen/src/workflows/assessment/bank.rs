use super::domain::EsgCategory::{Environmental, Governance, Social};
use super::domain::{BankQuestion, BankQuestionType, EsgCategory};

const YES_NO: &[&str] = &["Yes", "No"];
const YES_NO_ZH: &[&str] = &["是", "否"];

const fn yes_no(
    code: &'static str,
    section: &'static str,
    category: EsgCategory,
    weight: u8,
    prompt: &'static str,
    prompt_zh: &'static str,
) -> BankQuestion {
    BankQuestion {
        code,
        section,
        category,
        kind: BankQuestionType::SingleChoice,
        prompt,
        prompt_zh,
        options: YES_NO,
        options_zh: YES_NO_ZH,
        attachment_prompt: None,
        attachment_prompt_zh: None,
        remark: None,
        remark_zh: None,
        weight,
    }
}

const fn with_attachment(
    question: BankQuestion,
    prompt: &'static str,
    prompt_zh: &'static str,
) -> BankQuestion {
    BankQuestion {
        attachment_prompt: Some(prompt),
        attachment_prompt_zh: Some(prompt_zh),
        ..question
    }
}

const fn with_remark(
    question: BankQuestion,
    remark: &'static str,
    remark_zh: &'static str,
) -> BankQuestion {
    BankQuestion {
        remark: Some(remark),
        remark_zh: Some(remark_zh),
        ..question
    }
}

static ENVIRONMENTAL: [BankQuestion; 16] = [
    // A1 environmental policy
    with_attachment(
        yes_no(
            "A1-1",
            "A1",
            Environmental,
            8,
            "Does the company have a written environmental-related policy?",
            "公司是否有書面的環境相關政策？",
        ),
        "Please attach a copy of your environmental policy",
        "請附上環境政策副本",
    ),
    yes_no(
        "A1-2",
        "A1",
        Environmental,
        7,
        "Does the company adopt any green procurement practices or requirements?",
        "公司是否採用任何綠色採購措施或要求？",
    ),
    with_attachment(
        yes_no(
            "A1-3",
            "A1",
            Environmental,
            9,
            "Does the company obtain any environmental-related certificate, such as ISO 14001, and 50001?",
            "公司是否獲得任何與環境相關的證書，例如ISO 14001 和 50001？",
        ),
        "Please attach a copy of your ISO certificate",
        "請附上ISO證書副本",
    ),
    yes_no(
        "A1-4",
        "A1",
        Environmental,
        7,
        "Does the company assess the suppliers' environmental/sustainable practices or measures during the supplier assessment or enlisting?",
        "公司是否在供應商評估或招募期間評估供應商的環境/可持續實踐或措施？",
    ),
    yes_no(
        "A1-5",
        "A1",
        Environmental,
        6,
        "Will green labels be considered during the supplier assessment?",
        "在供應商評估期間會考慮綠色標籤嗎？",
    ),
    yes_no(
        "A1-6",
        "A1",
        Environmental,
        6,
        "Does the company encourage any water-saving measures (e.g., posting of water-saving reminders, etc.)?",
        "公司是否有任何節水措施？（例如︰張貼節水提醒等）",
    ),
    yes_no(
        "A1-7",
        "A1",
        Environmental,
        5,
        "Does the company adopt any measures to ensure the indoor air quality (e.g., regularly checking and cleaning of A/C units, placement of air purifiers, etc.)?",
        "公司是否採用任何措施來確保室內空氣品質（例如︰定期檢查和清潔空調設備﹑放置空氣清淨機等）？",
    ),
    // A2 energy and emissions
    yes_no(
        "A2-8",
        "A2",
        Environmental,
        7,
        "Does the company keep energy, fuel or water usage record?",
        "公司是否有保留能源﹑燃料或水的使用記錄？",
    ),
    yes_no(
        "A2-9",
        "A2",
        Environmental,
        7,
        "Does the company quantify electricity usage (kWh)?",
        "公司是否有監察用電量（千瓦時）？",
    ),
    yes_no(
        "A2-10",
        "A2",
        Environmental,
        8,
        "Does the company utilize any energy-efficient equipment, emission monitoring system, or technology (e.g., equipment with energy efficient label, energy management system, etc)?",
        "公司是否使用任何節能設備﹑排放監控系統或技術（例如︰具有節能標籤的設備﹑能源管理系統等）",
    ),
    yes_no(
        "A2-11",
        "A2",
        Environmental,
        6,
        "Does the company encourage any energy-saving behavior (e.g., switching off air conditioning when not in use)?",
        "公司是否有鼓勵一些節能的行動（例如︰沒有人在辦公室時關閉空調）？",
    ),
    with_attachment(
        yes_no(
            "A2-12",
            "A2",
            Environmental,
            9,
            "Does the company quantify or calculate the carbon footprint on products/services/company as a whole?",
            "公司是否有量化或計算整個產品/服務/公司的碳足印？",
        ),
        "Please attach carbon footprint analysis report or calculation record",
        "請附上碳足印分析報告或計算記錄",
    ),
    // A3 resource management
    yes_no(
        "A3-13",
        "A3",
        Environmental,
        5,
        "Does the company adopt paper-saving initiatives (e.g., double-sided printing)?",
        "公司是否有採取節紙措施（例如︰雙面列印）？",
    ),
    yes_no(
        "A3-14",
        "A3",
        Environmental,
        7,
        "Does the company recycle plastics/paper/glass bottles/electronic equipment/others?",
        "公司是否有收集並回收塑膠/紙張/玻璃瓶/電子設備/其他？",
    ),
    yes_no(
        "A3-15",
        "A3",
        Environmental,
        5,
        "Does the company reuse the promotion banners or materials?",
        "公司是否重複使用宣傳橫幅或材料？",
    ),
    yes_no(
        "A3-16",
        "A3",
        Environmental,
        4,
        "Does the company encourage the employees to prepare their utensils?",
        "公司是否鼓勵員工自備餐具？",
    ),
];

static SOCIAL: [BankQuestion; 19] = [
    // B1 employment and labour
    with_attachment(
        yes_no(
            "B1-17",
            "B1",
            Social,
            8,
            "Does the company have written employment policy or staff handbook?",
            "公司是否有書面的僱傭政策或員工手冊？",
        ),
        "Please attach employment policy or staff handbook",
        "請附上僱傭政策或員工手冊",
    ),
    yes_no(
        "B1-18",
        "B1",
        Social,
        7,
        "Does the company check the identification documents of the new employees before recruitment?",
        "公司在招聘前是否有檢查新員工的身份證明文件？",
    ),
    yes_no(
        "B1-19",
        "B1",
        Social,
        9,
        "Are there any measures adopted to prevent discrimination and harassment?",
        "是否採取了任何措施來防止歧視和騷擾？",
    ),
    yes_no(
        "B1-20",
        "B1",
        Social,
        7,
        "Are there any measures adopted regarding family-friendly employment practices?",
        "是否採取了家庭友善僱傭的措施？",
    ),
    yes_no(
        "B1-21",
        "B1",
        Social,
        7,
        "Is there any flexible working arrangement (e.g., hybrid mode working, work from home)?",
        "是否採取了彈性工作安排（例如︰混合工作模式﹑在家工作）？",
    ),
    yes_no(
        "B1-22",
        "B1",
        Social,
        8,
        "Does the company establish any mechanism to handle complaints related to workers' rights?",
        "公司是否有建立機制處理與員工權利相關的投訴？",
    ),
    yes_no(
        "B1-23",
        "B1",
        Social,
        6,
        "Has the company participated in or organized any voluntary and community events, or donated to charitable/NGO/non-profit organizations (NPO)?",
        "公司是否有參與或組織任何義工及社區活動，或捐款給慈善機構/非政府組織/非營利組織？",
    ),
    yes_no(
        "B1-24",
        "B1",
        Social,
        8,
        "Does the company have at least 20% of employees who are of different genders?",
        "公司是否至少有20%的員工來自不同性別？",
    ),
    // B2 health and safety
    with_attachment(
        yes_no(
            "B2-25",
            "B2",
            Social,
            9,
            "Does the company establish health and safety policy?",
            "公司是否有制定職業健康和安全政策？",
        ),
        "Please attach health and safety policy",
        "請附上職業健康和安全政策",
    ),
    yes_no(
        "B2-26",
        "B2",
        Social,
        8,
        "Does the company provide any regular drills or training regarding occupational health and safety to the relevant staff?",
        "公司是否有定期向員工提供職業健康與安全方面的演習或培訓？",
    ),
    yes_no(
        "B2-27",
        "B2",
        Social,
        7,
        "Does the company provide professional development training or subsidy to the employee?",
        "公司是否有為員工提供專業發展或補貼？",
    ),
    yes_no(
        "B2-28",
        "B2",
        Social,
        7,
        "Does the company adopt any measure for the employee health and wellness benefits (e.g., establishing breastfeeding friendly premises, using ergonomic furniture, organize yoga workshop, body checks, etc.)?",
        "公司是否採取了任何措施來提供員工健康與福利（例如︰設立友善哺乳的場所﹑使用人體工學家具﹑組織瑜伽工作坊﹑健康檢查等）？",
    ),
    with_remark(
        yes_no(
            "B2-29",
            "B2",
            Social,
            10,
            "Has there been any serious work-related injuries or illnesses in the company?",
            "公司是否發生過任何嚴重的工傷或職業病？",
        ),
        "Refer to Labour Department, a serious work-related injury is defined as an accident arising out of and in the course of employment with incapacity for a period exceeding 3 days",
        "根據勞工處的定義，嚴重的工傷事故是指在僱傭期間發生的事故，並導致超過3天的喪失工作能力。",
    ),
    yes_no(
        "B2-30",
        "B2",
        Social,
        10,
        "Is there any work-related fatalities occurred in the company?",
        "公司是否發生過任何與工作相關的死亡事故？",
    ),
    with_attachment(
        yes_no(
            "B2-31",
            "B2",
            Social,
            9,
            "Does the company obtain any certification in related to occupational health and safety, such as ISO 45001?",
            "公司是否有獲得任何與職業健康與安全相關的認證，例如ISO 45001？",
        ),
        "Please attach certificate",
        "請附上證書",
    ),
    // B3 product responsibility
    yes_no(
        "B3-32",
        "B3",
        Social,
        8,
        "Does the company establish guidelines or procedures to handle customer complaints (e.g., provide training, manual for personnel responsible for customer service, etc.)?",
        "公司是否有制定處理客戶投訴的指引或程序？（例如︰提供培訓﹑向負責客戶服務的員工提供指引等）",
    ),
    yes_no(
        "B3-33",
        "B3",
        Social,
        8,
        "Does the company establish any quality control mechanism on products or services (e.g., perform sample checking, conduct regular calibration and checking on equipment, etc.)?",
        "公司是否有針對產品或服務建立任何品質控制機制（例如︰進行抽樣檢查﹑定期校準和檢查設備等）？",
    ),
    yes_no(
        "B3-34",
        "B3",
        Social,
        7,
        "Does the company gather customer feedback after the provision of products and services (e.g., establish customer satisfaction survey, customer hotline, mystery shoppers, etc.)?",
        "公司在提供產品和服務後是否有收集客戶反饋（例如︰進行顧客滿意度調查﹑顧客熱線﹑神秘顧客等）？",
    ),
    with_attachment(
        yes_no(
            "B3-35",
            "B3",
            Social,
            9,
            "Does the company obtain any certification for product or service (e.g., Q-mark, ISO 9001 Certification, Green label, FSC, Organic Certification, BEAM plus)?",
            "公司是否有獲得任何產品或服務相關的認證，（例如︰Qmark，ISO9001 認證﹑綠色標籤﹑FSC﹑有機認證﹑綠建環評plus）？",
        ),
        "Please attach certificate",
        "請附上證書",
    ),
];

static GOVERNANCE: [BankQuestion; 7] = [
    with_attachment(
        yes_no(
            "C1-36",
            "C1",
            Governance,
            9,
            "Does the company establish a Code of Conduct?",
            "公司是否有制定了行為準則？",
        ),
        "Please attach policy or employee handbook",
        "請附上書面政策或員工手冊",
    ),
    yes_no(
        "C1-37",
        "C1",
        Governance,
        9,
        "Does the company perform an annual financial audit?",
        "公司是否有進行年度財務審計？",
    ),
    yes_no(
        "C1-38",
        "C1",
        Governance,
        10,
        "Is the company involved in any prosecutions/lawsuits in relation to products, services, employment, etc.?",
        "公司是否有涉及任何有關產品﹑服務﹑就業等方面的起訴/訴訟？",
    ),
    yes_no(
        "C1-39",
        "C1",
        Governance,
        8,
        "Does the company implement a whistleblowing system, or establish related written policies and procedures?",
        "公司是否有實施舉報系統，或制定相關的書面政策和程序？",
    ),
    yes_no(
        "C1-40",
        "C1",
        Governance,
        8,
        "Does the company provide regular training to the employees and management level about corporate integrity, such as anti-corruption, anti-bribery, conflict of interest, etc.?",
        "公司是否有定期對員工和管理層進行有關企業誠信的培訓，例如反貪污﹑反賄賂﹑利益衝突等？",
    ),
    yes_no(
        "C1-41",
        "C1",
        Governance,
        8,
        "Does the company subscribe to labour insurance (or others necessary insurance of the industry, such as public liability insurance)?",
        "公司是否有購買勞工保險（或該行業的其他必要保險，例如公共責任保險）？",
    ),
    yes_no(
        "C1-42",
        "C1",
        Governance,
        7,
        "Does the company perform any background search on newly employed personnel, new customers or new suppliers?",
        "公司是否會對新入職員工﹑新客戶或新供應商進行背景調查的流程？",
    ),
];

/// Read-only view over the large question bank, split by scoring category.
#[derive(Debug, Clone, Copy)]
pub struct QuestionBank {
    environmental: &'static [BankQuestion],
    social: &'static [BankQuestion],
    governance: &'static [BankQuestion],
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::standard()
    }
}

impl QuestionBank {
    pub fn standard() -> Self {
        Self {
            environmental: &ENVIRONMENTAL,
            social: &SOCIAL,
            governance: &GOVERNANCE,
        }
    }

    /// Bank backed by caller-supplied question lists.
    pub fn from_parts(
        environmental: &'static [BankQuestion],
        social: &'static [BankQuestion],
        governance: &'static [BankQuestion],
    ) -> Self {
        Self {
            environmental,
            social,
            governance,
        }
    }

    pub fn questions(&self, category: EsgCategory) -> &'static [BankQuestion] {
        match category {
            EsgCategory::Environmental => self.environmental,
            EsgCategory::Social => self.social,
            EsgCategory::Governance => self.governance,
        }
    }

    /// Every question, environmental first, then social, then governance.
    pub fn all(&self) -> impl Iterator<Item = &'static BankQuestion> {
        let bank = *self;
        EsgCategory::ordered()
            .into_iter()
            .flat_map(move |category| bank.questions(category).iter())
    }

    pub fn by_section(&self, section: &str) -> Vec<&'static BankQuestion> {
        self.all()
            .filter(|question| question.section.eq_ignore_ascii_case(section))
            .collect()
    }

    pub fn by_code(&self, code: &str) -> Option<&'static BankQuestion> {
        self.all().find(|question| question.code == code)
    }

    pub fn len(&self) -> usize {
        self.environmental.len() + self.social.len() + self.governance.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
