// src/suggest/prompt.rs
// Builds the prompt that asks the model for suggestions.

use crate::report::Issue;

// Only the first issues make it into the prompt
pub const MAX_PROMPT_ISSUES: usize = 10;

pub struct PromptInput<'a> {
    pub overall_score: u8,
    pub seo_score: u8,
    pub design_score: u8,
    pub content_score: u8,
    pub issues: &'a [Issue],
}

pub fn build_prompt(input: &PromptInput<'_>) -> String {
    let issues = input
        .issues
        .iter()
        .take(MAX_PROMPT_ISSUES)
        .map(|issue| {
            format!(
                "- [{}] {}: {}",
                issue.severity.to_string().to_uppercase(),
                issue.title,
                issue.description
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are an expert website optimization consultant. Analyze the following website audit results and provide 5-7 actionable suggestions to improve the site.

Overall Score: {overall}/100
SEO Score: {seo}/100
Design Score: {design}/100
Content Score: {content}/100

Key Issues Found:
{issues}

Provide suggestions in this exact format for each suggestion:
PRIORITY: [High/Medium/Low]
TITLE: [Brief title]
DESCRIPTION: [1-2 sentences explaining what to do]
IMPACT: [Expected improvement]

Focus on the most impactful changes first. Be specific and actionable.",
        overall = input.overall_score,
        seo = input.seo_score,
        design = input.design_score,
        content = input.content_score,
        issues = issues,
    )
}
