// src/crawl/mod.rs
// =============================================================================
// This module handles website crawling.
//
// Features:
// - Breadth-first crawling starting from a URL
// - Respects same-site restriction (doesn't crawl external sites)
// - Page budget instead of a link-hop depth
// - Polite crawling with delays between requests
//
// Why crawl?
// - One page is a thin sample of a site
// - The per-page summaries in the report come from here
//
// Rust concepts:
// - Async programming: The fetcher is an async trait object
// - Collections: HashSet for tracking visited URLs, VecDeque for queue
// =============================================================================

mod queue;

use url::Url;

use crate::parse::ParsedDocument;

// Re-export the main crawling function
pub use queue::crawl_website;

/// A page that was fetched and parsed during a crawl.
///
/// Created once by the crawler and only read afterwards.
#[derive(Debug, Clone)]
pub struct CrawledPage {
    pub url: Url,
    pub raw_html: String,
    pub document: ParsedDocument,
    /// 200 or 403
    pub status_code: u16,
    pub title: Option<String>,
    pub load_time_ms: f64,
}
