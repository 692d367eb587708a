// src/config.rs
// =============================================================================
// Tunable settings for an audit run.
//
// Everything the fetcher, crawler and text generator need lives here so the
// CLI (or any other front-end) fills one struct and hands it to the Auditor.
// Defaults match what a browser-like crawl of a small site needs.
// =============================================================================

use std::time::Duration;

// Some sites refuse requests that don't look like they come from a browser
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
pub const DEFAULT_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
pub const DEFAULT_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.5";

pub const DEFAULT_DEPTH: usize = 5;

pub const ANTHROPIC_MESSAGES_URL: &str = "https://api.anthropic.com/v1/messages";
pub const DEFAULT_MODEL: &str = "claude-3-haiku-20240307";
pub const DEFAULT_MAX_TOKENS: u32 = 1500;

/// Settings for fetching and crawling pages, plus the text generator.
#[derive(Debug, Clone)]
pub struct AuditConfig {
    pub user_agent: String,
    pub accept: String,
    pub accept_language: String,
    /// Total time allowed for one page request, including redirects
    pub request_timeout: Duration,
    pub max_redirects: usize,
    /// Pause between two crawl fetches
    pub crawl_delay: Duration,
    pub generation: GenerationConfig,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept: DEFAULT_ACCEPT.to_string(),
            accept_language: DEFAULT_ACCEPT_LANGUAGE.to_string(),
            request_timeout: Duration::from_secs(15),
            max_redirects: 10,
            crawl_delay: Duration::from_millis(100),
            generation: GenerationConfig::default(),
        }
    }
}

impl AuditConfig {
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_crawl_delay(mut self, delay: Duration) -> Self {
        self.crawl_delay = delay;
        self
    }

    pub fn with_generation(mut self, generation: GenerationConfig) -> Self {
        self.generation = generation;
        self
    }
}

/// Settings for the language model that writes suggestions.
///
/// `api_key: None` switches generation off; the audit then always uses the
/// fallback suggestions.
#[derive(Clone)]
pub struct GenerationConfig {
    pub api_key: Option<String>,
    pub endpoint: String,
    pub model: String,
    pub max_tokens: u32,
    pub request_timeout: Duration,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: ANTHROPIC_MESSAGES_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            request_timeout: Duration::from_secs(60),
        }
    }
}

impl GenerationConfig {
    pub fn is_enabled(&self) -> bool {
        self.api_key.as_deref().is_some_and(|key| !key.trim().is_empty())
    }
}

// Hand-written so the API key never ends up in logs
impl std::fmt::Debug for GenerationConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}
