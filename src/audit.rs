// src/audit.rs
// =============================================================================
// audit_website(): the one operation the rest of the world calls.
//
// Pipeline:
// 1. Validate the URL and page budget
// 2. Crawl (sequential, breadth-first)
// 3. Run the SEO, design and content analyzers concurrently
// 4. Aggregate scores and issues
// 5. Ask for suggestions (falls back to defaults on any failure)
// 6. Assemble the AuditResult
//
// An Auditor holds no state between calls. Each audit re-crawls from
// scratch and shares nothing with other audits.
//
// Rust concepts:
// - Arc: the crawled pages are shared read-only with three blocking tasks
// - spawn_blocking: HTML analysis is CPU work, kept off the async workers
// - try_join3: waits for all three analyzers, fails if any task panicked
// =============================================================================

use chrono::Utc;
use futures::future::try_join3;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, instrument};
use url::Url;

use crate::aggregate::aggregate;
use crate::analyze::{analyze_content, analyze_design, analyze_seo};
use crate::config::AuditConfig;
use crate::crawl::{crawl_website, CrawledPage};
use crate::error::{AuditError, FetchError};
use crate::fetch::{HttpFetcher, PageFetcher};
use crate::generate::{AnthropicGenerator, DisabledGenerator, TextGenerator};
use crate::parse::{is_http, netloc};
use crate::report::{AuditResult, PageSummary};
use crate::suggest::SuggestionSynthesizer;

pub struct Auditor {
    config: AuditConfig,
    fetcher: Box<dyn PageFetcher>,
    synthesizer: SuggestionSynthesizer,
}

impl Auditor {
    // Production wiring: reqwest fetcher, plus the Anthropic generator when
    // an API key is configured
    pub fn new(config: AuditConfig) -> Result<Self, FetchError> {
        let fetcher = HttpFetcher::new(&config)?;
        let generator: Box<dyn TextGenerator> = match AnthropicGenerator::new(&config.generation) {
            Ok(generator) => Box::new(generator),
            Err(e) => {
                info!(reason = %e, "Suggestions will use the built-in defaults");
                Box::new(DisabledGenerator)
            }
        };
        Ok(Self::with_parts(config, Box::new(fetcher), generator))
    }

    pub fn with_parts(config: AuditConfig, fetcher: Box<dyn PageFetcher>, generator: Box<dyn TextGenerator>) -> Self {
        let synthesizer = SuggestionSynthesizer::new(generator, config.generation.max_tokens);
        Self {
            config,
            fetcher,
            synthesizer,
        }
    }

    // Crawls up to `depth` pages from `url` and produces the full report
    //
    // Fails only when the input is invalid or not a single page could be
    // fetched. Everything else shows up as scores and issues.
    #[instrument(skip(self))]
    pub async fn audit_website(&self, url: &str, depth: usize) -> Result<AuditResult, AuditError> {
        let started_at = Utc::now();
        let timer = Instant::now();

        let start = validate_url(url)?;
        if depth == 0 {
            return Err(AuditError::InvalidDepth(depth));
        }

        info!("Starting audit");
        let pages = crawl_website(self.fetcher.as_ref(), &start, depth, self.config.crawl_delay).await?;
        let pages = Arc::new(pages);

        let (seo, design, content) = try_join3(
            run_analyzer(Arc::clone(&pages), analyze_seo),
            run_analyzer(Arc::clone(&pages), analyze_design),
            run_analyzer(Arc::clone(&pages), analyze_content),
        )
        .await?;
        debug!(seo = seo.score, design = design.score, content = content.score, "Analyzers finished");

        let summary = aggregate(&seo, &design, &content);

        let suggestions = self
            .synthesizer
            .synthesize(&seo, &design, &content, summary.overall_score)
            .await;

        let analyzed_at = Utc::now();
        let duration = timer.elapsed().as_secs_f64();

        info!(
            pages = pages.len(),
            overall = summary.overall_score,
            issues = summary.counts.total_issues,
            seconds = duration,
            "Audit finished"
        );

        Ok(AuditResult {
            domain: netloc(&start),
            pages_analyzed: pages.len(),
            overall_score: summary.overall_score,
            seo_score: seo.score,
            design_score: design.score,
            content_score: content.score,
            issue_counts: summary.counts,
            issues: summary.issues,
            pages: pages.iter().map(page_summary).collect(),
            lighthouse_score: design.details.lighthouse.clone(),
            pagespeed_score: design.details.pagespeed.clone(),
            seo_analysis: seo,
            design_analysis: design,
            content_analysis: content,
            suggestions,
            started_at,
            analyzed_at,
            analysis_duration_seconds: (duration * 100.0).round() / 100.0,
        })
    }
}

// Accepts only absolute http(s) URLs with a host
pub fn validate_url(url: &str) -> Result<Url, AuditError> {
    let parsed = Url::parse(url.trim()).map_err(|e| AuditError::invalid_url(url, e.to_string()))?;
    if !is_http(&parsed) {
        return Err(AuditError::invalid_url(url, format!("unsupported scheme '{}'", parsed.scheme())));
    }
    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(AuditError::invalid_url(url, "missing host"));
    }
    Ok(parsed)
}

// Runs one analyzer on the blocking pool over the shared pages
async fn run_analyzer<T, F>(pages: Arc<Vec<CrawledPage>>, analyzer: F) -> Result<T, AuditError>
where
    T: Send + 'static,
    F: FnOnce(&[CrawledPage]) -> T + Send + 'static,
{
    tokio::task::spawn_blocking(move || analyzer(pages.as_slice()))
        .await
        .map_err(|e| AuditError::Analysis(e.to_string()))
}

fn page_summary(page: &CrawledPage) -> PageSummary {
    PageSummary {
        url: page.url.to_string(),
        title: page.title.clone(),
        status_code: page.status_code,
        load_time_ms: page.load_time_ms,
    }
}
