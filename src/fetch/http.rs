// src/fetch/http.rs
// =============================================================================
// This module fetches web pages over HTTP(S).
//
// Key functionality:
// - Sends GET requests with browser-like headers (some sites gate on them)
// - Enforces a total timeout and a redirect limit
// - Verifies TLS certificates against the bundled root store (rustls)
// - Measures how long the server took to answer
// - Sorts failures into FetchError variants (timeout, DNS, TLS, ...)
//
// Rust concepts:
// - async/await: For network I/O
// - Result<T, E>: Every failure mode is a typed error, nothing panics
// - std::time::Instant: Monotonic clock for measuring latency
// =============================================================================

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use reqwest::Client;
use std::time::Instant;
use tracing::debug;
use url::Url;

use super::{is_usable_status, FetchedPage, PageFetcher};
use crate::config::AuditConfig;
use crate::error::FetchError;

/// Fetches pages with one shared reqwest client.
///
/// Cloning is cheap: reqwest's Client is reference counted internally, so
/// clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    // Builds the HTTP client from the audit configuration
    //
    // Fails only if the configuration itself is broken (for example a header
    // value with control characters in it).
    pub fn new(config: &AuditConfig) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, header_value(&config.accept)?);
        headers.insert(ACCEPT_LANGUAGE, header_value(&config.accept_language)?);

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .timeout(config.request_timeout)
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .use_rustls_tls()
            .build()
            .map_err(|e| FetchError::Other(format!("could not build HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchedPage, FetchError> {
        let started = Instant::now();

        let response = self
            .client
            .get(url.as_str())
            .send()
            .await
            .map_err(categorize_error)?;

        // Latency is measured up to the response headers, before the body
        // is downloaded
        let load_time_ms = started.elapsed().as_secs_f64() * 1000.0;
        let status_code = response.status().as_u16();

        if !is_usable_status(status_code) {
            return Err(FetchError::Status(status_code));
        }

        let html = response.text().await.map_err(categorize_error)?;

        debug!(url = %url, status = status_code, load_time_ms, bytes = html.len(), "Fetched page");

        Ok(FetchedPage {
            html,
            status_code,
            load_time_ms,
        })
    }
}

fn header_value(value: &str) -> Result<HeaderValue, FetchError> {
    HeaderValue::from_str(value)
        .map_err(|e| FetchError::Other(format!("invalid header value '{}': {}", value, e)))
}

// Categorizes different error types from reqwest
//
// reqwest errors can happen for many reasons:
// - Network timeout
// - DNS resolution failure
// - SSL certificate issues
// - Too many redirects
// - Broken response bodies
fn categorize_error(error: reqwest::Error) -> FetchError {
    // Convert error to string once; the interesting detail is often in the
    // source chain, which {:#} doesn't print for reqwest, so walk it by hand
    let error_string = error_chain(&error);
    let lowered = error_string.to_lowercase();

    if error.is_timeout() {
        FetchError::Timeout
    } else if error.is_redirect() {
        FetchError::TooManyRedirects
    } else if lowered.contains("certificate") || lowered.contains("tls") || lowered.contains("ssl") {
        FetchError::Tls(error_string)
    } else if error.is_connect() {
        // Connection errors often mean DNS issues or host unreachable
        if lowered.contains("dns") || lowered.contains("resolve") {
            FetchError::Dns(error_string)
        } else {
            FetchError::Connection(error_string)
        }
    } else if error.is_body() || error.is_decode() {
        FetchError::Body(error_string)
    } else {
        FetchError::Other(error_string)
    }
}

fn error_chain(error: &reqwest::Error) -> String {
    let mut message = error.to_string();
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn fetcher() -> HttpFetcher {
        let config = AuditConfig::default().with_request_timeout(Duration::from_secs(5));
        HttpFetcher::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_ok_page() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/")
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body("<html><title>Hello</title></html>")
            .create_async()
            .await;

        let url = Url::parse(&server.url()).unwrap();
        let page = fetcher().fetch(&url).await.unwrap();

        assert_eq!(page.status_code, 200);
        assert!(page.html.contains("<title>Hello</title>"));
        assert!(page.load_time_ms >= 0.0);
    }

    #[tokio::test]
    async fn test_sends_browser_headers() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/")
            .match_header("user-agent", mockito::Matcher::Regex("Mozilla/5.0".to_string()))
            .match_header("accept", mockito::Matcher::Regex("text/html".to_string()))
            .match_header("accept-language", "en-US,en;q=0.5")
            .with_status(200)
            .with_body("<html></html>")
            .create_async()
            .await;

        let url = Url::parse(&server.url()).unwrap();
        fetcher().fetch(&url).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_forbidden_page_is_still_usable() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/")
            .with_status(403)
            .with_body("<html><h1>Checking your browser</h1></html>")
            .create_async()
            .await;

        let url = Url::parse(&server.url()).unwrap();
        let page = fetcher().fetch(&url).await.unwrap();
        assert_eq!(page.status_code, 403);
    }

    #[tokio::test]
    async fn test_not_found_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/missing")
            .with_status(404)
            .create_async()
            .await;

        let url = Url::parse(&format!("{}/missing", server.url())).unwrap();
        let result = fetcher().fetch(&url).await;
        assert_eq!(result, Err(FetchError::Status(404)));
    }

    #[tokio::test]
    async fn test_follows_redirects() {
        let mut server = mockito::Server::new_async().await;
        let _redirect = server
            .mock("GET", "/old")
            .with_status(301)
            .with_header("location", "/new")
            .create_async()
            .await;
        let _target = server
            .mock("GET", "/new")
            .with_status(200)
            .with_body("<p>moved here</p>")
            .create_async()
            .await;

        let url = Url::parse(&format!("{}/old", server.url())).unwrap();
        let page = fetcher().fetch(&url).await.unwrap();
        assert_eq!(page.status_code, 200);
        assert!(page.html.contains("moved here"));
    }

    #[tokio::test]
    async fn test_connection_refused() {
        // Port 1 is reserved and nothing listens on it
        let url = Url::parse("http://127.0.0.1:1/").unwrap();
        let result = fetcher().fetch(&url).await;
        assert!(matches!(result, Err(FetchError::Connection(_))));
    }
}
