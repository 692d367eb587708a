// src/crawl/queue.rs
// =============================================================================
// This module implements website crawling with a breadth-first approach.
//
// How it works:
// 1. Start with the initial URL in a queue
// 2. Fetch and parse the page
// 3. While we still want more pages, add its same-site links to the queue
// 4. Repeat until the queue is empty or the page budget is spent
//
// Politeness:
// - One request at a time, with a delay between requests
// - Only crawls the start URL's host (and explicit port)
//
// Failures:
// - A page that fails to load is logged and skipped
// - Only "not even the start page loaded" is an error
//
// Rust concepts:
// - HashSet: To track visited URLs (O(1) lookup)
// - VecDeque: Double-ended queue for breadth-first crawling
// - &dyn Trait: The crawler doesn't care how pages are fetched
// =============================================================================

use std::collections::{HashSet, VecDeque};
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

use super::CrawledPage;
use crate::error::CrawlError;
use crate::fetch::PageFetcher;
use crate::parse::{self, normalize, same_site};

// Crawls a website starting from a URL
//
// Parameters:
//   fetcher: how pages are downloaded
//   start: the URL to start crawling from
//   max_pages: the most pages to collect (1 = just the starting page)
//   delay: pause between requests
//
// Returns: the pages in the order they were fetched, or CrawlError when
// nothing at all could be fetched
pub async fn crawl_website(
    fetcher: &dyn PageFetcher,
    start: &Url,
    max_pages: usize,
    delay: Duration,
) -> Result<Vec<CrawledPage>, CrawlError> {
    let mut queue = VecDeque::new();
    queue.push_back(start.clone());

    // Normalized URLs (fragment removed) that were already tried
    let mut visited: HashSet<String> = HashSet::new();

    let mut pages: Vec<CrawledPage> = Vec::new();

    while pages.len() < max_pages {
        let Some(url) = queue.pop_front() else {
            break;
        };

        // insert() returns false when the URL was already there
        if !visited.insert(normalize(&url)) {
            continue;
        }

        debug!(url = %url, queued = queue.len(), "Crawling");

        let fetched = match fetcher.fetch(&url).await {
            Ok(fetched) => fetched,
            Err(e) => {
                warn!(url = %url, error = %e, "Failed to fetch page, skipping");
                continue;
            }
        };

        let document = parse::parse(&fetched.html, &url);
        let title = document.title().map(str::to_string);

        // Only harvest links if we still need more pages
        if pages.len() + 1 < max_pages {
            for anchor in document.anchors() {
                let Some(target) = &anchor.target else {
                    continue;
                };
                if same_site(start, target) && !visited.contains(&normalize(target)) {
                    queue.push_back(target.clone());
                }
            }
        }

        pages.push(CrawledPage {
            url,
            raw_html: fetched.html,
            document,
            status_code: fetched.status_code,
            title,
            load_time_ms: fetched.load_time_ms,
        });

        // Polite crawling: small delay between requests
        if pages.len() < max_pages && !queue.is_empty() && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    if pages.is_empty() {
        return Err(CrawlError::NoPagesRetrieved {
            url: start.to_string(),
        });
    }

    info!(start = %start, pages = pages.len(), "Crawl finished");
    Ok(pages)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is let-else?
//    - let Some(url) = queue.pop_front() else { break; };
//    - Binds `url` if the pattern matches, otherwise runs the else block
//    - The else block must leave the scope (break, continue, return)
//
// 2. Why normalize before checking visited?
//    - /about and /about#team are the same page on the server
//    - Comparing the fragment-free form means we fetch it once
//
// 3. Why is the visited check done on pop, not on push?
//    - The same link can appear on several pages before we get to it
//    - Duplicates sit in the queue harmlessly and are skipped when popped
//
// 4. Why `&dyn PageFetcher`?
//    - Production passes the reqwest-backed HttpFetcher
//    - Tests pass an in-memory fetcher with canned pages
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AuditConfig;
    use crate::error::FetchError;
    use crate::fetch::{FetchedPage, HttpFetcher};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    // Serves canned HTML from memory and records every request
    struct MemoryFetcher {
        pages: HashMap<String, (u16, String)>,
        requests: Mutex<Vec<String>>,
    }

    impl MemoryFetcher {
        fn new(pages: &[(&str, u16, &str)]) -> Self {
            Self {
                pages: pages
                    .iter()
                    .map(|(url, status, html)| (url.to_string(), (*status, html.to_string())))
                    .collect(),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PageFetcher for MemoryFetcher {
        async fn fetch(&self, url: &Url) -> Result<FetchedPage, FetchError> {
            self.requests.lock().unwrap().push(url.to_string());
            match self.pages.get(url.as_str()) {
                Some((status, html)) => Ok(FetchedPage {
                    html: html.clone(),
                    status_code: *status,
                    load_time_ms: 12.0,
                }),
                None => Err(FetchError::Status(404)),
            }
        }
    }

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[tokio::test]
    async fn test_stops_at_max_pages() {
        let fetcher = MemoryFetcher::new(&[
            ("https://example.com/", 200, r#"<a href="/a">A</a><a href="/b">B</a><a href="/c">C</a>"#),
            ("https://example.com/a", 200, "<title>A</title>"),
            ("https://example.com/b", 200, "<title>B</title>"),
            ("https://example.com/c", 200, "<title>C</title>"),
        ]);

        let pages = crawl_website(&fetcher, &url("https://example.com/"), 2, Duration::ZERO)
            .await
            .unwrap();

        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].url.as_str(), "https://example.com/");
        assert_eq!(pages[1].url.as_str(), "https://example.com/a");
        assert_eq!(pages[1].title.as_deref(), Some("A"));
        assert_eq!(fetcher.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_breadth_first_order() {
        let fetcher = MemoryFetcher::new(&[
            ("https://example.com/", 200, r#"<a href="/a">A</a><a href="/b">B</a>"#),
            ("https://example.com/a", 200, r#"<a href="/a/deep">Deep</a>"#),
            ("https://example.com/b", 200, ""),
            ("https://example.com/a/deep", 200, ""),
        ]);

        let pages = crawl_website(&fetcher, &url("https://example.com/"), 10, Duration::ZERO)
            .await
            .unwrap();

        let order: Vec<&str> = pages.iter().map(|p| p.url.path()).collect();
        assert_eq!(order, ["/", "/a", "/b", "/a/deep"]);
    }

    #[tokio::test]
    async fn test_never_revisits_a_page() {
        // Every page links back to the others, with and without fragments
        let html = r##"<a href="/">Home</a><a href="/#top">Top</a><a href="/a">A</a><a href="/a#x">A again</a>"##;
        let fetcher = MemoryFetcher::new(&[("https://example.com/", 200, html), ("https://example.com/a", 200, html)]);

        let pages = crawl_website(&fetcher, &url("https://example.com/"), 5, Duration::ZERO)
            .await
            .unwrap();

        assert_eq!(pages.len(), 2);
        assert_eq!(fetcher.requests(), ["https://example.com/", "https://example.com/a"]);
    }

    #[tokio::test]
    async fn test_stays_on_same_site() {
        let fetcher = MemoryFetcher::new(&[(
            "https://example.com/",
            200,
            r#"<a href="https://other.org/">Other</a><a href="https://www.example.com/">www</a><a href="https://example.com:8443/">port</a>"#,
        )]);

        let pages = crawl_website(&fetcher, &url("https://example.com/"), 5, Duration::ZERO)
            .await
            .unwrap();

        assert_eq!(pages.len(), 1);
        assert_eq!(fetcher.requests(), ["https://example.com/"]);
    }

    #[tokio::test]
    async fn test_follows_https_links_from_http_start() {
        let fetcher = MemoryFetcher::new(&[
            (
                "http://example.com/",
                200,
                r#"<a href="https://example.com/about">About</a><a href="https://example.com/pricing">Pricing</a>"#,
            ),
            ("https://example.com/about", 200, ""),
            ("https://example.com/pricing", 200, ""),
        ]);

        let pages = crawl_website(&fetcher, &url("http://example.com/"), 5, Duration::ZERO)
            .await
            .unwrap();

        assert_eq!(pages.len(), 3);
        assert_eq!(pages[1].url.as_str(), "https://example.com/about");
    }

    #[tokio::test]
    async fn test_failed_pages_are_skipped() {
        let fetcher = MemoryFetcher::new(&[
            ("https://example.com/", 200, r#"<a href="/missing">Gone</a><a href="/ok">OK</a>"#),
            ("https://example.com/ok", 200, ""),
        ]);

        let pages = crawl_website(&fetcher, &url("https://example.com/"), 5, Duration::ZERO)
            .await
            .unwrap();

        let order: Vec<&str> = pages.iter().map(|p| p.url.path()).collect();
        assert_eq!(order, ["/", "/ok"]);
    }

    #[tokio::test]
    async fn test_forbidden_page_is_kept() {
        let fetcher = MemoryFetcher::new(&[("https://example.com/", 403, "<title>Just a moment</title>")]);

        let pages = crawl_website(&fetcher, &url("https://example.com/"), 5, Duration::ZERO)
            .await
            .unwrap();

        assert_eq!(pages[0].status_code, 403);
        assert_eq!(pages[0].title.as_deref(), Some("Just a moment"));
    }

    #[tokio::test]
    async fn test_start_page_failure_is_an_error() {
        let fetcher = MemoryFetcher::new(&[]);
        let result = crawl_website(&fetcher, &url("https://example.com/"), 5, Duration::ZERO).await;
        assert_eq!(
            result.unwrap_err(),
            CrawlError::NoPagesRetrieved {
                url: "https://example.com/".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_crawls_a_live_server() {
        let mut server = mockito::Server::new_async().await;
        let _home = server
            .mock("GET", "/")
            .with_status(200)
            .with_body(r#"<title>Home</title><a href="/about">About</a>"#)
            .create_async()
            .await;
        let _about = server
            .mock("GET", "/about")
            .with_status(200)
            .with_body("<title>About</title>")
            .create_async()
            .await;

        let fetcher = HttpFetcher::new(&AuditConfig::default()).unwrap();
        let start = url(&server.url());
        let pages = crawl_website(&fetcher, &start, 5, Duration::from_millis(1))
            .await
            .unwrap();

        let titles: Vec<_> = pages.iter().map(|p| p.title.as_deref()).collect();
        assert_eq!(titles, [Some("Home"), Some("About")]);
    }
}
