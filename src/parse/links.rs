// src/parse/links.rs
// =============================================================================
// Helpers for turning href attributes into absolute, comparable URLs.
//
// We use the `url` crate to:
// - Parse and validate URLs
// - Resolve relative URLs to absolute URLs
// - Compare the network location (host + explicit port) of two URLs
// =============================================================================

use url::Url;

// Resolves a possibly-relative href to an absolute HTTP(S) URL
//
// Parameters:
//   base: the base URL (the current page)
//   href: the href value (might be relative, might be absolute)
//
// Returns: Some(absolute_url) or None if the link isn't crawlable
//
// Examples:
//   base = "https://example.com/page"
//   href = "/docs" -> Some("https://example.com/docs")
//   href = "../other" -> Some("https://example.com/other")
//   href = "https://other.com" -> Some("https://other.com/")
//   href = "javascript:void(0)" -> None (not HTTP)
pub fn resolve_link(base: &Url, href: &str) -> Option<Url> {
    let href = href.trim();

    // Skip anchors and special protocols
    if href.is_empty()
        || href.starts_with('#')
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("javascript:")
    {
        return None;
    }

    // join() handles both cases: absolute hrefs replace the base entirely,
    // relative ones are resolved against it
    let url = base.join(href).ok()?;

    if is_http(&url) {
        Some(url)
    } else {
        None
    }
}

pub fn is_http(url: &Url) -> bool {
    url.scheme() == "http" || url.scheme() == "https"
}

// Two URLs are on the same site when their network location is identical:
// the host plus any port written in the URL. The scheme is ignored, so
// http://example.com and https://example.com are the same site, while
// www.example.com and example.com:8443 are not.
pub fn same_site(a: &Url, b: &Url) -> bool {
    a.host_str().is_some() && netloc(a) == netloc(b)
}

// Host with the port appended when the URL spells one out
//
// The url crate drops a port that is the scheme default, so
// https://example.com:443/ and https://example.com/ give the same netloc.
pub fn netloc(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default();
    match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    }
}

// The form of a URL used for "have we seen this page?" checks
//
// Fragments never change what the server sends back, so
// /about#team and /about are the same page.
pub fn normalize(url: &Url) -> String {
    let mut normalized = url.clone();
    normalized.set_fragment(None);
    normalized.to_string()
}
