// src/fetch/mod.rs
// =============================================================================
// This module downloads pages for the crawler.
//
// Submodules:
// - http: the real HTTP implementation built on reqwest
//
// The crawler doesn't talk to reqwest directly. It asks a PageFetcher for a
// page, which lets tests swap in an in-memory fetcher.
//
// Rust concepts:
// - Traits: a shared interface that several types can implement
// - async-trait: lets trait methods be async
// =============================================================================

mod http;

pub use http::HttpFetcher;

use async_trait::async_trait;
use url::Url;

use crate::error::FetchError;

/// Raw result of one successful page download.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedPage {
    pub html: String,
    pub status_code: u16,
    /// Time until the response headers arrived, in milliseconds
    pub load_time_ms: f64,
}

// Anything that can download a page
//
// Implementations must only return Ok for responses worth analyzing
// (see is_usable_status); everything else is a FetchError.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<FetchedPage, FetchError>;
}

// 200 is the normal case. 403 is accepted too because bot-defense pages
// often still serve the site's real markup along with the 403.
pub fn is_usable_status(status: u16) -> bool {
    matches!(status, 200 | 403)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usable_statuses() {
        assert!(is_usable_status(200));
        assert!(is_usable_status(403));
        assert!(!is_usable_status(201));
        assert!(!is_usable_status(404));
        assert!(!is_usable_status(500));
    }
}
