// metinAI Data Models
// Wire types follow the service API schema (snake_case on the wire);
// view types are camelCase for the webview.

use serde::{Deserialize, Serialize};

// ============ Classification Wire Types ============

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClassifyRequest {
    pub texts: Vec<String>,
    pub categories: Vec<String>,
}

/// One winning category per input text, index-aligned with the request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClassificationResult {
    pub text: String,
    pub category: String,
    pub similarity_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClassifyResponse {
    pub results: Vec<ClassificationResult>,
}

// ============ Filtering Wire Types ============

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilterRequest {
    pub texts: Vec<String>,
    pub filters: Vec<String>,
}

/// Per-filter verdict; `matches` follows filter submission order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilterMatch {
    pub filter_name: String,
    pub score: f64,
    pub matched: bool,
}

/// `is_flagged` is computed server-side and treated as authoritative here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilterResultItem {
    pub text: String,
    pub is_flagged: bool,
    pub matches: Vec<FilterMatch>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilterResponse {
    pub results: Vec<FilterResultItem>,
}

// ============ Service Error & Health ============

/// Body shape of non-2xx responses from the service.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

// ============ Result Set ============

/// The two result shapes the service can return. Kept as a tagged sum so
/// classification and filtering results cannot be mixed up downstream.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ResultSet {
    CategoryAssignment { results: Vec<ClassificationResult> },
    FilterEvaluation { results: Vec<FilterResultItem> },
}

impl ResultSet {
    pub fn len(&self) -> usize {
        match self {
            ResultSet::CategoryAssignment { results } => results.len(),
            ResultSet::FilterEvaluation { results } => results.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ============ Display Aggregates ============

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationSummary {
    pub total: i32,
    /// Label counted as a positive hit, when the session designates one
    /// (the KVKK check counts "Kişisel Veri İçerir" assignments).
    pub positive_label: Option<String>,
    pub positive_count: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FilterSummary {
    pub total: i32,
    pub flagged_count: i32,
    pub clean_count: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ResultSummary {
    Classification(ClassificationSummary),
    Filtering(FilterSummary),
}

// ============ Presets ============

/// Built-in bundle of example categories and texts used to seed the UI.
/// Never mutated; loading one copies its contents into the session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Preset {
    pub name: String,
    pub categories: Vec<String>,
    pub texts: Vec<String>,
}

// ============ Session View ============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionMode {
    /// Open categories, one winner per text.
    Classification,
    /// Binary KVKK check with fixed categories.
    PersonalData,
    /// Every filter evaluated against every text.
    Filtering,
}

/// Serializable view of the session state handed to the webview.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub mode: SessionMode,
    pub raw_input: String,
    pub text_count: i32,
    pub labels: Vec<String>,
    pub results: Option<ResultSet>,
    pub summary: Option<ResultSummary>,
    pub error: Option<String>,
    pub in_flight: bool,
    pub can_submit: bool,
}
