use crate::cli::{Jurisdiction, KbSection};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// One divorce scenario. Monetary values are ¥; the same scenario feeds
/// both jurisdiction calculators.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Scenario {
    pub total_assets: f64,
    pub marriage_years: u32,
    pub has_children: bool,
    pub wife_is_homemaker: bool,
    pub homemaker_years: u32,
    pub home_in_husband_name: bool,
    pub husband_has_fault: bool,
}

/// Partial scenario as read from a `--scenario` TOML file.
/// Unset fields fall back to flag values, then to built-in defaults.
#[derive(Debug, Deserialize, Default)]
pub struct ScenarioFile {
    pub total_assets: Option<f64>,
    pub marriage_years: Option<u32>,
    pub has_children: Option<bool>,
    pub wife_is_homemaker: Option<bool>,
    pub homemaker_years: Option<u32>,
    pub home_in_husband_name: Option<bool>,
    pub husband_has_fault: Option<bool>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct CnOutcome {
    pub pool: f64,
    pub base_share: f64,
    pub liquidity_discount: f64,
    pub effective_share: f64,
    pub compensation: f64,
    pub fault_adjustment: f64,
    pub children_adjustment: f64,
    /// Not clamped to `pool`; adjustments may push it past the pool.
    pub total: f64,
    pub enforcement_rate: f64,
    pub housing: String,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct UkOutcome {
    pub pool: f64,
    pub sharing_base: f64,
    pub needs_outcome: f64,
    pub compensation: f64,
    pub homemaker_outcome: f64,
    /// Clamped to `[0, pool]`.
    pub total: f64,
    pub driver: AwardDriver,
    pub enforcement_rate: f64,
    pub housing: String,
    pub mingling_note: String,
    pub needs_note: String,
    pub compensation_note: String,
}

/// Which strand of the UK award won the max comparison.
/// Ties go to needs.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AwardDriver {
    Needs,
    Compensation,
}

impl AwardDriver {
    pub fn describe(&self) -> &'static str {
        match self {
            AwardDriver::Needs => "Needs (children's housing)",
            AwardDriver::Compensation => "Compensation (career sacrifice)",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InsightLevel {
    Info,
    Success,
    Warning,
}

impl InsightLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightLevel::Info => "info",
            InsightLevel::Success => "success",
            InsightLevel::Warning => "warning",
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Insight {
    pub level: InsightLevel,
    pub label: String,
    pub body: String,
}

#[derive(Debug, Serialize, Clone)]
pub struct ComparisonReport {
    pub scenario: Scenario,
    pub cn: CnOutcome,
    pub uk: UkOutcome,
    /// `uk.total - cn.total`, signed.
    pub gap: f64,
    /// `uk.total / cn.total`; absent when the CN award is zero.
    pub gap_ratio: Option<f64>,
    pub compensation_gap: f64,
    pub enforcement_gap: f64,
    pub insights: Vec<Insight>,
}

/// One statute or case in the bundled knowledge base. Entries are static
/// data; `text` holds the operative rule or key holding.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct KnowledgeEntry {
    pub key: &'static str,
    pub title: &'static str,
    pub text: &'static str,
    pub source: &'static str,
    pub tags: &'static [&'static str],
    pub quote: Option<CaseQuote>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct CaseQuote {
    pub text: &'static str,
    pub attribution: &'static str,
}

#[derive(Debug, Serialize, Clone)]
pub struct SearchHit {
    pub jurisdiction: Jurisdiction,
    pub section: KbSection,
    pub entry: &'static KnowledgeEntry,
}

#[derive(Debug, Serialize)]
pub struct KbListing {
    pub total_entries: usize,
    pub sections: Vec<KbSectionKeys>,
}

#[derive(Debug, Serialize)]
pub struct KbSectionKeys {
    pub jurisdiction: Jurisdiction,
    pub section: KbSection,
    pub keys: Vec<&'static str>,
}
