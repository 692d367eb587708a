// src/aggregate.rs
// =============================================================================
// Combines the three analyses into the report's headline numbers.
//
// overall = floor(0.40 * seo + 0.35 * design + 0.25 * content)
//
// The weights are whole percentages, so the formula is evaluated in integer
// arithmetic and floors without any floating point rounding surprises.
// =============================================================================

use crate::report::{ContentAnalysis, DesignAnalysis, Issue, IssueCounts, SeoAnalysis, Severity};

const SEO_WEIGHT: u32 = 40;
const DESIGN_WEIGHT: u32 = 35;
const CONTENT_WEIGHT: u32 = 25;

/// Headline numbers computed from the three analyses.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregate {
    pub overall_score: u8,
    pub issues: Vec<Issue>,
    pub counts: IssueCounts,
}

pub fn overall_score(seo: u8, design: u8, content: u8) -> u8 {
    let weighted = u32::from(seo.min(100)) * SEO_WEIGHT
        + u32::from(design.min(100)) * DESIGN_WEIGHT
        + u32::from(content.min(100)) * CONTENT_WEIGHT;
    (weighted / 100) as u8
}

pub fn count_issues(issues: &[Issue]) -> IssueCounts {
    let mut counts = IssueCounts {
        total_issues: issues.len(),
        ..IssueCounts::default()
    };
    for issue in issues {
        match issue.severity {
            Severity::Critical => counts.critical_issues += 1,
            Severity::Warning => counts.warnings += 1,
            Severity::Info => counts.info_issues += 1,
        }
    }
    counts
}

// Issues keep their analyzer order: seo, then design, then content.
// Duplicates are kept.
pub fn aggregate(seo: &SeoAnalysis, design: &DesignAnalysis, content: &ContentAnalysis) -> Aggregate {
    let issues: Vec<Issue> = seo
        .issues
        .iter()
        .chain(&design.issues)
        .chain(&content.issues)
        .cloned()
        .collect();

    Aggregate {
        overall_score: overall_score(seo.score, design.score, content.score),
        counts: count_issues(&issues),
        issues,
    }
}
