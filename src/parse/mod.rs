// src/parse/mod.rs
// =============================================================================
// This module turns raw HTML into a ParsedDocument that the analyzers query.
//
// Submodules:
// - document: the ParsedDocument type and the extraction logic
// - links: href resolution and same-site checks (shared with the crawler)
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever, so broken markup still produces a usable tree
//
// Parsing never fails. A missing element is just reported as absent.
// =============================================================================

// Compiles a CSS selector once and hands out a &'static reference to it
//
// Selector::parse returns Result; unwrapping is fine here because every
// selector in this crate is a string literal known to be valid.
macro_rules! selector {
    ($css:literal) => {{
        static SELECTOR: std::sync::OnceLock<scraper::Selector> = std::sync::OnceLock::new();
        SELECTOR.get_or_init(|| scraper::Selector::parse($css).expect("static CSS selector is valid"))
    }};
}

mod document;
mod links;

pub use document::{Anchor, ContentView, Image, MetaTag, ParsedDocument};
pub use links::{is_http, netloc, normalize, resolve_link, same_site};

use url::Url;

// Parses a page
//
// Parameters:
//   html: the page markup (may be malformed)
//   page_url: where the page was fetched from, used to resolve relative links
pub fn parse(html: &str, page_url: &Url) -> ParsedDocument {
    ParsedDocument::parse(html, page_url)
}
