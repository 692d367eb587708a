// src/report.rs
// =============================================================================
// The data that comes out of an audit.
//
// - Issue: one problem found by an analyzer
// - AnalysisResult: score + issues + measurements for one dimension
// - Suggestion: one recommendation from the language model (or fallback)
// - AuditResult: the full report handed back by audit_website()
//
// Everything derives Serialize so the CLI (or an HTTP layer) can emit the
// report as JSON with snake_case field names.
// =============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How urgently an issue needs attention. Not used as a scoring weight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Critical => f.pad("critical"),
            Severity::Warning => f.pad("warning"),
            Severity::Info => f.pad("info"),
        }
    }
}

/// Which analyzer produced an issue.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Seo,
    Design,
    Content,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Seo => f.pad("seo"),
            Category::Design => f.pad("design"),
            Category::Content => f.pad("content"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Issue {
    pub severity: Severity,
    pub category: Category,
    pub title: String,
    pub description: String,
}

impl Issue {
    pub fn new(severity: Severity, category: Category, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            severity,
            category,
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Score, issues and measurements for one audit dimension.
///
/// `D` is the dimension's details struct (`SeoDetails`, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisResult<D> {
    /// Always within 0..=100
    pub score: u8,
    pub issues: Vec<Issue>,
    pub details: D,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SeoDetails {
    pub title_tag: Option<String>,
    pub meta_description: Option<String>,
    pub h1_count: usize,
    pub images_total: usize,
    pub images_with_alt: usize,
    pub og_tags_count: usize,
    pub has_structured_data: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DesignDetails {
    pub load_time_ms: f64,
    pub is_mobile_responsive: bool,
    pub has_custom_fonts: bool,
    pub images_lazy_loaded: usize,
    pub total_images: usize,
    /// Reserved for a Lighthouse run; no external API is called
    pub lighthouse: Option<serde_json::Value>,
    /// Reserved for a PageSpeed Insights run; no external API is called
    pub pagespeed: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ContentDetails {
    pub word_count: usize,
    pub sentence_count: usize,
    pub paragraph_count: usize,
    pub internal_links: usize,
    pub external_links: usize,
    pub has_cta: bool,
}

pub type SeoAnalysis = AnalysisResult<SeoDetails>;
pub type DesignAnalysis = AnalysisResult<DesignDetails>;
pub type ContentAnalysis = AnalysisResult<ContentDetails>;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    // Anything that isn't exactly high/medium/low (after trimming and
    // lowercasing) becomes Medium
    pub fn parse_lenient(text: &str) -> Self {
        match text.trim().to_lowercase().as_str() {
            "high" => Priority::High,
            "low" => Priority::Low,
            _ => Priority::Medium,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::High => f.pad("high"),
            Priority::Medium => f.pad("medium"),
            Priority::Low => f.pad("low"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Suggestion {
    pub priority: Priority,
    pub title: String,
    pub description: String,
    /// Expected improvement
    pub impact: String,
}

/// Per-page line in the report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PageSummary {
    pub url: String,
    pub title: Option<String>,
    pub status_code: u16,
    pub load_time_ms: f64,
}

/// Issue totals across all three analyzers.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct IssueCounts {
    pub total_issues: usize,
    pub critical_issues: usize,
    pub warnings: usize,
    pub info_issues: usize,
}

/// The complete report returned by `audit_website`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuditResult {
    pub domain: String,
    pub pages_analyzed: usize,

    pub overall_score: u8,
    pub seo_score: u8,
    pub design_score: u8,
    pub content_score: u8,

    #[serde(flatten)]
    pub issue_counts: IssueCounts,
    /// seo issues, then design, then content
    pub issues: Vec<Issue>,

    pub seo_analysis: SeoAnalysis,
    pub design_analysis: DesignAnalysis,
    pub content_analysis: ContentAnalysis,

    pub suggestions: Vec<Suggestion>,
    pub pages: Vec<PageSummary>,

    pub lighthouse_score: Option<serde_json::Value>,
    pub pagespeed_score: Option<serde_json::Value>,

    pub started_at: DateTime<Utc>,
    pub analyzed_at: DateTime<Utc>,
    pub analysis_duration_seconds: f64,
}
