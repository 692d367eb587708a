// src/suggest/mod.rs
// =============================================================================
// Turns the audit findings into prioritized recommendations.
//
// Steps:
// 1. Build a prompt from the scores and the top issues (prompt.rs)
// 2. Ask the text generator for suggestions
// 3. Parse the labeled blocks out of the reply (reply.rs)
// 4. Keep at most 7
//
// If generation fails, or the reply has no usable block, a fixed list of
// three general suggestions is returned instead. The caller therefore
// always gets between 1 and 7 suggestions and never an error.
// =============================================================================

mod prompt;
mod reply;

pub use prompt::{build_prompt, PromptInput, MAX_PROMPT_ISSUES};
pub use reply::parse_suggestions;

use tracing::{info, warn};

use crate::generate::TextGenerator;
use crate::report::{ContentAnalysis, DesignAnalysis, Priority, SeoAnalysis, Suggestion};

pub const MAX_SUGGESTIONS: usize = 7;

pub struct SuggestionSynthesizer {
    generator: Box<dyn TextGenerator>,
    max_tokens: u32,
}

impl SuggestionSynthesizer {
    pub fn new(generator: Box<dyn TextGenerator>, max_tokens: u32) -> Self {
        Self { generator, max_tokens }
    }

    pub async fn synthesize(
        &self,
        seo: &SeoAnalysis,
        design: &DesignAnalysis,
        content: &ContentAnalysis,
        overall_score: u8,
    ) -> Vec<Suggestion> {
        let issues: Vec<_> = seo
            .issues
            .iter()
            .chain(&design.issues)
            .chain(&content.issues)
            .take(MAX_PROMPT_ISSUES)
            .cloned()
            .collect();

        let prompt = build_prompt(&PromptInput {
            overall_score,
            seo_score: seo.score,
            design_score: design.score,
            content_score: content.score,
            issues: &issues,
        });

        let reply = match self.generator.generate(&prompt, self.max_tokens).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!(error = %e, "Suggestion generation failed, using defaults");
                return fallback_suggestions();
            }
        };

        let mut suggestions = parse_suggestions(&reply);
        if suggestions.is_empty() {
            warn!(reply_chars = reply.len(), "No usable suggestions in reply, using defaults");
            return fallback_suggestions();
        }

        suggestions.truncate(MAX_SUGGESTIONS);
        info!(count = suggestions.len(), "Generated suggestions");
        suggestions
    }
}

pub fn fallback_suggestions() -> Vec<Suggestion> {
    vec![
        Suggestion {
            priority: Priority::High,
            title: "Improve Page Load Speed".to_string(),
            description: "Optimize images and minimize JavaScript to reduce load time.".to_string(),
            impact: "15-20% improvement in user engagement".to_string(),
        },
        Suggestion {
            priority: Priority::High,
            title: "Add Missing Meta Descriptions".to_string(),
            description: "Write unique, compelling meta descriptions for all pages.".to_string(),
            impact: "10-15% increase in click-through rate".to_string(),
        },
        Suggestion {
            priority: Priority::Medium,
            title: "Enhance Mobile Responsiveness".to_string(),
            description: "Ensure all elements scale properly on mobile devices.".to_string(),
            impact: "25% improvement in mobile user experience".to_string(),
        },
    ]
}
