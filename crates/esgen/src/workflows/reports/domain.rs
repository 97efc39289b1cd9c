use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::workflows::assessment::catalog::{
    BUSINESS_DESCRIPTION, COMPANY_NAME, COMPANY_SIZE, EMISSIONS, FISCAL_YEAR, FRAMEWORKS,
    INDUSTRY, LOCATION, MATERIAL_TOPICS,
};
use crate::workflows::assessment::AnswerStore;

pub const DEFAULT_FISCAL_YEAR: &str = "2024";

/// Identifier wrapper for stored reports.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportId(pub String);

/// Account that owns a report; issued by the external auth provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentId(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Draft,
    Preview,
    Paid,
    Complete,
    Failed,
}

impl ReportStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ReportStatus::Draft => "draft",
            ReportStatus::Preview => "preview",
            ReportStatus::Paid => "paid",
            ReportStatus::Complete => "complete",
            ReportStatus::Failed => "failed",
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, ReportStatus::Complete | ReportStatus::Failed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Processing,
    Completed,
    Failed,
    Refunded,
}

impl PaymentStatus {
    pub const fn label(self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Processing => "processing",
            PaymentStatus::Completed => "completed",
            PaymentStatus::Failed => "failed",
            PaymentStatus::Refunded => "refunded",
        }
    }
}

/// Greenhouse gas figures as free text, split by scope when the note labels them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmissionsDisclosure {
    #[serde(default)]
    pub scope1: Option<String>,
    #[serde(default)]
    pub scope2: Option<String>,
    #[serde(default)]
    pub scope3: Option<String>,
    /// Text no scope claimed: the whole note when unlabelled, else any lead-in.
    #[serde(default)]
    pub note: Option<String>,
}

const SCOPE_MARKERS: [(&str, usize); 6] = [
    ("scope 1", 0),
    ("scope 2", 1),
    ("scope 3", 2),
    ("範圍一", 0),
    ("範圍二", 1),
    ("範圍三", 2),
];

const VALUE_TRIM: &[char] = &[':', '：', ',', '，', ';', '；', '、', '.', '。', ' ', '\t', '\n'];

impl EmissionsDisclosure {
    /// Split a note such as `Scope 1: 1,200 t, Scope 2: 3,500 t` into scopes.
    pub fn from_note(note: &str) -> Self {
        let note = note.trim();
        if note.is_empty() {
            return Self::default();
        }

        // ASCII lowercasing keeps byte offsets aligned with the input.
        let folded = note.to_ascii_lowercase();
        let mut hits: Vec<(usize, usize, usize)> = Vec::new();
        for (marker, scope) in SCOPE_MARKERS {
            let mut from = 0;
            while let Some(offset) = folded[from..].find(marker) {
                let start = from + offset;
                hits.push((start, start + marker.len(), scope));
                from = start + marker.len();
            }
        }
        hits.sort_unstable();

        let mut scopes: [Option<String>; 3] = [None, None, None];
        for (index, (_, value_start, scope)) in hits.iter().enumerate() {
            let value_end = hits
                .get(index + 1)
                .map(|(next_start, _, _)| *next_start)
                .unwrap_or(note.len());
            let value = note[*value_start..value_end].trim_matches(VALUE_TRIM);
            if !value.is_empty() && scopes[*scope].is_none() {
                scopes[*scope] = Some(value.to_string());
            }
        }

        let [scope1, scope2, scope3] = scopes;
        let attributed = scope1.is_some() || scope2.is_some() || scope3.is_some();
        let note = if attributed {
            // Text ahead of the first marker belongs to no scope.
            let lead = hits.first().map(|(start, _, _)| *start).unwrap_or(0);
            Some(note[..lead].trim_matches(VALUE_TRIM))
                .filter(|prefix| !prefix.is_empty())
                .map(str::to_string)
        } else {
            Some(note.to_string())
        };
        Self {
            scope1,
            scope2,
            scope3,
            note,
        }
    }
}

/// Company data a report is generated from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportForm {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub company_size: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub frameworks: Vec<String>,
    #[serde(default)]
    pub fiscal_year: Option<String>,
    #[serde(default)]
    pub material_topics: Vec<String>,
    #[serde(default)]
    pub emissions: EmissionsDisclosure,
}

impl ReportForm {
    /// Assemble the form from fixed-flow answers; unanswered fields stay empty.
    pub fn from_answers(answers: &AnswerStore) -> Self {
        let text = |id| {
            answers
                .text(id)
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };
        let list = |id| {
            answers
                .selections(id)
                .map(<[String]>::to_vec)
                .unwrap_or_default()
        };

        Self {
            title: None,
            company_name: text(COMPANY_NAME).unwrap_or_default(),
            industry: text(INDUSTRY).unwrap_or_default(),
            company_size: text(COMPANY_SIZE).unwrap_or_default(),
            location: text(LOCATION),
            description: text(BUSINESS_DESCRIPTION),
            frameworks: list(FRAMEWORKS),
            fiscal_year: text(FISCAL_YEAR),
            material_topics: list(MATERIAL_TOPICS),
            emissions: text(EMISSIONS)
                .map(|note| EmissionsDisclosure::from_note(&note))
                .unwrap_or_default(),
        }
    }

    /// Names of required fields that are blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("company_name", &self.company_name),
            ("industry", &self.industry),
            ("company_size", &self.company_size),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }
}

/// Settlement record attached to a report once paid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: PaymentId,
    pub transaction_id: Option<String>,
    pub amount: f64,
    pub currency: String,
    pub status: PaymentStatus,
    pub method: String,
    pub user_id: AuthorId,
    pub report_id: ReportId,
    pub created_at: DateTime<Utc>,
    pub paid_at: Option<DateTime<Utc>>,
}

/// Gateway confirmation submitted against a report in preview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentReceipt {
    #[serde(default)]
    pub transaction_id: Option<String>,
    pub amount: f64,
    pub currency: String,
    pub status: PaymentStatus,
    #[serde(default = "default_payment_method")]
    pub method: String,
}

fn default_payment_method() -> String {
    "card".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: ReportId,
    pub title: String,
    pub status: ReportStatus,
    pub company_name: String,
    pub industry: String,
    pub company_size: String,
    pub location: Option<String>,
    pub description: Option<String>,
    pub frameworks: Vec<String>,
    pub fiscal_year: String,
    pub material_topics: Vec<String>,
    pub scope1_emissions: Option<String>,
    pub scope2_emissions: Option<String>,
    pub scope3_emissions: Option<String>,
    pub emissions_note: Option<String>,
    pub preview_content: Option<String>,
    pub full_content: Option<String>,
    pub pdf_url: Option<String>,
    pub payment_required: bool,
    pub payment_amount: f64,
    pub currency: String,
    pub payment_link: Option<String>,
    pub payment: Option<Payment>,
    pub failure_reason: Option<String>,
    pub author_id: AuthorId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Report {
    /// New draft from a validated form.
    pub fn draft(
        id: ReportId,
        author_id: AuthorId,
        form: ReportForm,
        pricing: &ReportPricing,
        now: DateTime<Utc>,
    ) -> Self {
        let fiscal_year = form
            .fiscal_year
            .filter(|year| !year.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FISCAL_YEAR.to_string());
        let title = form
            .title
            .filter(|title| !title.trim().is_empty())
            .unwrap_or_else(|| format!("{} ESG Report {fiscal_year}", form.company_name.trim()));

        Self {
            id,
            title,
            status: ReportStatus::Draft,
            company_name: form.company_name.trim().to_string(),
            industry: form.industry,
            company_size: form.company_size,
            location: form.location,
            description: form.description,
            frameworks: form.frameworks,
            fiscal_year,
            material_topics: form.material_topics,
            scope1_emissions: form.emissions.scope1,
            scope2_emissions: form.emissions.scope2,
            scope3_emissions: form.emissions.scope3,
            emissions_note: form.emissions.note,
            preview_content: None,
            full_content: None,
            pdf_url: None,
            payment_required: pricing.payment_required,
            payment_amount: pricing.amount,
            currency: pricing.currency.clone(),
            payment_link: None,
            payment: None,
            failure_reason: None,
            author_id,
            created_at: now,
            updated_at: now,
            completed_at: None,
        }
    }

    /// Compact status payload for API responses.
    pub fn status_view(&self) -> ReportStatusView {
        ReportStatusView {
            report_id: self.id.clone(),
            title: self.title.clone(),
            status: self.status.label(),
            payment_required: self.payment_required,
            amount_due: (self.payment_required && self.payment.is_none())
                .then_some(self.payment_amount),
            currency: self.currency.clone(),
            pdf_url: self.pdf_url.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportStatusView {
    pub report_id: ReportId,
    pub title: String,
    pub status: &'static str,
    pub payment_required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_due: Option<f64>,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf_url: Option<String>,
}

/// Price applied to new drafts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportPricing {
    pub amount: f64,
    pub currency: String,
    pub payment_required: bool,
}

impl Default for ReportPricing {
    fn default() -> Self {
        Self {
            amount: 299.0,
            currency: "HKD".to_string(),
            payment_required: true,
        }
    }
}
