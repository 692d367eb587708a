// src/analyze/mod.rs
// =============================================================================
// The three scoring engines.
//
// Submodules:
// - seo: titles, meta tags, headings, alt text, structured data
// - design: mobile readiness, load time, styling, accessibility hints
// - content: amount and readability of text, links, calls to action
//
// Every analyzer looks at the first crawled page only (the home page stands
// in for the whole site). Scoring is additive: each criterion adds points
// on its own, the total is capped at 100, and problems are recorded as
// Issues along the way.
//
// Analyzers are plain synchronous functions over borrowed pages. They
// never fail; an empty page list simply scores 0.
// =============================================================================

mod content;
mod design;
mod seo;

pub use content::analyze_content;
pub use design::analyze_design;
pub use seo::analyze_seo;

use crate::report::{AnalysisResult, Category, Issue, Severity};

/// Collects points and issues for one dimension.
pub(crate) struct Scorecard {
    category: Category,
    points: u32,
    issues: Vec<Issue>,
}

impl Scorecard {
    pub(crate) fn new(category: Category) -> Self {
        Self {
            category,
            points: 0,
            issues: Vec::new(),
        }
    }

    pub(crate) fn add(&mut self, points: u32) {
        self.points += points;
    }

    pub(crate) fn critical(&mut self, title: &str, description: impl Into<String>) {
        self.issue(Severity::Critical, title, description);
    }

    pub(crate) fn warning(&mut self, title: &str, description: impl Into<String>) {
        self.issue(Severity::Warning, title, description);
    }

    pub(crate) fn info(&mut self, title: &str, description: impl Into<String>) {
        self.issue(Severity::Info, title, description);
    }

    fn issue(&mut self, severity: Severity, title: &str, description: impl Into<String>) {
        self.issues.push(Issue::new(severity, self.category, title, description));
    }

    // Caps the score at 100 and attaches the measurements
    pub(crate) fn finish<D>(self, details: D) -> AnalysisResult<D> {
        AnalysisResult {
            score: self.points.min(100) as u8,
            issues: self.issues,
            details,
        }
    }
}

// What an analyzer returns when there is no page to look at
pub(crate) fn unscored<D: Default>() -> AnalysisResult<D> {
    AnalysisResult {
        score: 0,
        issues: Vec::new(),
        details: D::default(),
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::SeoDetails;

    #[test]
    fn test_scorecard_caps_at_100() {
        let mut card = Scorecard::new(Category::Seo);
        card.add(80);
        card.add(45);
        let result = card.finish(SeoDetails::default());
        assert_eq!(result.score, 100);
    }

    #[test]
    fn test_scorecard_tags_issues_with_category() {
        let mut card = Scorecard::new(Category::Design);
        card.critical("A", "a");
        card.info("B", "b");
        let result = card.finish(());
        assert_eq!(result.issues.len(), 2);
        assert!(result.issues.iter().all(|i| i.category == Category::Design));
        assert_eq!(result.issues[0].severity, Severity::Critical);
        assert_eq!(result.issues[1].severity, Severity::Info);
    }

    #[test]
    fn test_empty_page_list_scores_zero() {
        assert_eq!(analyze_seo(&[]).score, 0);
        assert_eq!(analyze_design(&[]).score, 0);
        assert_eq!(analyze_content(&[]).score, 0);
    }
}
