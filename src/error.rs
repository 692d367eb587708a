// src/error.rs
// =============================================================================
// Error types for the audit pipeline.
//
// Each stage of an audit has its own error type so callers can tell a
// recoverable problem from a fatal one:
// - FetchError: one page failed to download (the crawl keeps going)
// - CrawlError: no page could be downloaded at all (the audit stops)
// - GenerationError: the language model call failed (fallback suggestions)
// - AuditError: what audit_website() returns when it cannot produce a report
//
// Rust concepts:
// - thiserror: derives Display and std::error::Error from attributes
// - #[from]: automatic conversion so the ? operator can wrap errors
// =============================================================================

use thiserror::Error;

/// A single page could not be fetched.
///
/// These are recovered inside the crawler: the page is dropped and logged.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// The request did not finish within the configured timeout
    #[error("request timed out")]
    Timeout,

    /// The server kept redirecting past the redirect limit
    #[error("too many redirects")]
    TooManyRedirects,

    /// The hostname could not be resolved
    #[error("could not resolve hostname: {0}")]
    Dns(String),

    /// TCP connection failed (refused, reset, unreachable)
    #[error("connection failed: {0}")]
    Connection(String),

    /// TLS handshake or certificate verification failed
    #[error("TLS error: {0}")]
    Tls(String),

    /// The server answered with a status we can't analyze
    #[error("unusable HTTP status {0}")]
    Status(u16),

    /// The response body could not be read or decoded
    #[error("could not read response body: {0}")]
    Body(String),

    /// Anything else reqwest reports
    #[error("{0}")]
    Other(String),
}

/// The crawl produced nothing to analyze.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CrawlError {
    #[error("no pages retrieved from {url}")]
    NoPagesRetrieved { url: String },
}

/// The text-generation capability failed.
///
/// Never leaves the suggestion synthesizer; it switches to the fallback list.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GenerationError {
    /// No API key is configured, so generation is switched off
    #[error("text generation is disabled")]
    Disabled,

    /// The request never got a response
    #[error("generation request failed: {0}")]
    Request(String),

    /// The API answered with an error status
    #[error("generation API returned {status}: {body}")]
    Api { status: u16, body: String },

    /// The API answered but the reply had no usable text
    #[error("malformed generation response: {0}")]
    Malformed(String),
}

/// Fatal failures of `audit_website`. No partial report accompanies them.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("crawl depth must be at least 1, got {0}")]
    InvalidDepth(usize),

    #[error(transparent)]
    Crawl(#[from] CrawlError),

    /// An analyzer task panicked or was cancelled
    #[error("analysis task failed: {0}")]
    Analysis(String),
}

impl AuditError {
    pub fn invalid_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crawl_error_converts_into_audit_error() {
        let err: AuditError = CrawlError::NoPagesRetrieved {
            url: "https://example.com".to_string(),
        }
        .into();
        assert!(matches!(err, AuditError::Crawl(_)));
        assert_eq!(err.to_string(), "no pages retrieved from https://example.com");
    }

    #[test]
    fn test_fetch_error_messages() {
        assert_eq!(FetchError::Status(500).to_string(), "unusable HTTP status 500");
        assert_eq!(FetchError::Timeout.to_string(), "request timed out");
    }
}
