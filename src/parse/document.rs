// src/parse/document.rs
// =============================================================================
// ParsedDocument: everything the analyzers need to know about one page.
//
// The scraper DOM is only alive while parse() runs. Every fact is copied out
// into plain owned data, so a ParsedDocument is Send + Sync and can be shared
// with the analyzer tasks without any locking.
//
// Two views are extracted:
// - The full document (title, meta tags, headings, images, links, ...)
// - A content view with <script>, <style>, <nav> and <footer> subtrees
//   removed, used to judge the page's actual prose
// =============================================================================

use scraper::node::Node;
use scraper::{ElementRef, Html};
use url::Url;

use super::links::resolve_link;

// Subtrees that never count as page content
const NON_CONTENT_TAGS: [&str; 4] = ["script", "style", "nav", "footer"];

/// One `<meta>` tag. Either `name` or `property` identifies it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTag {
    pub name: Option<String>,
    pub property: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub src: Option<String>,
    /// alt attribute present and not blank
    pub has_alt: bool,
    pub has_srcset: bool,
    /// loading="lazy"
    pub lazy: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    /// The href exactly as written in the markup
    pub href: String,
    /// The href resolved against the page URL, if it points at an HTTP(S) page
    pub target: Option<Url>,
    /// Visible link text with whitespace collapsed
    pub text: String,
}

/// The page with navigation, footers, scripts and styles stripped out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentView {
    /// Flattened visible text, one space between lines
    pub text: String,
    pub paragraph_count: usize,
    /// Number of `<ul>` and `<ol>` elements
    pub list_count: usize,
    pub h2_count: usize,
    pub anchors: Vec<Anchor>,
    /// Text of every `<button>` and `<a>`
    pub action_texts: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDocument {
    title: Option<String>,
    meta_tags: Vec<MetaTag>,
    headings: [Vec<String>; 6],
    images: Vec<Image>,
    anchors: Vec<Anchor>,
    structured_data: Vec<String>,
    has_canonical: bool,
    has_stylesheet: bool,
    font_link_count: usize,
    has_font_face: bool,
    has_aria_label: bool,
    content: ContentView,
}

impl ParsedDocument {
    pub fn parse(html: &str, page_url: &Url) -> Self {
        let document = Html::parse_document(html);

        let title = document
            .select(selector!("title"))
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|text| !text.is_empty());

        let meta_tags = document
            .select(selector!("meta"))
            .map(|el| MetaTag {
                name: attr(&el, "name"),
                property: attr(&el, "property"),
                content: attr(&el, "content"),
            })
            .collect();

        let heading_selectors = [
            selector!("h1"),
            selector!("h2"),
            selector!("h3"),
            selector!("h4"),
            selector!("h5"),
            selector!("h6"),
        ];
        let headings: [Vec<String>; 6] = heading_selectors.map(|sel| document.select(sel).map(|el| element_text(&el)).collect());

        let images = document
            .select(selector!("img"))
            .map(|el| Image {
                src: attr(&el, "src"),
                has_alt: attr(&el, "alt").is_some_and(|alt| !alt.is_empty()),
                has_srcset: attr(&el, "srcset").is_some_and(|srcset| !srcset.trim().is_empty()),
                lazy: attr(&el, "loading").is_some_and(|loading| loading.trim().eq_ignore_ascii_case("lazy")),
            })
            .collect();

        let anchors = document
            .select(selector!("a[href]"))
            .map(|el| anchor(&el, page_url))
            .collect();

        let structured_data = document
            .select(selector!("script[type=\"application/ld+json\"]"))
            .map(|el| el.text().collect::<String>().trim().to_string())
            .collect();

        let has_canonical = document.select(selector!("link[rel~=\"canonical\"]")).next().is_some();

        let has_stylesheet = document.select(selector!("link[rel~=\"stylesheet\"]")).next().is_some()
            || document.select(selector!("style")).next().is_some();

        let font_link_count = document.select(selector!("link[href*=\"font\"]")).count();
        let has_font_face = document
            .select(selector!("style"))
            .any(|el| el.text().any(|chunk| chunk.contains("@font-face")));

        let has_aria_label = document.select(selector!("[aria-label]")).next().is_some();

        let content = content_view(&document, page_url);

        Self {
            title,
            meta_tags,
            headings,
            images,
            anchors,
            structured_data,
            has_canonical,
            has_stylesheet,
            font_link_count,
            has_font_face,
            has_aria_label,
            content,
        }
    }

    /// Trimmed text of the first `<title>`; `None` when missing or blank.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn meta_tags(&self) -> &[MetaTag] {
        &self.meta_tags
    }

    /// Content of the first `<meta name=...>` with this name, if non-empty.
    pub fn meta_content(&self, name: &str) -> Option<&str> {
        self.meta_tags
            .iter()
            .find(|tag| tag.name.as_deref().is_some_and(|n| n.eq_ignore_ascii_case(name)))
            .and_then(|tag| tag.content.as_deref())
            .filter(|content| !content.is_empty())
    }

    pub fn meta_description(&self) -> Option<&str> {
        self.meta_content("description")
    }

    pub fn has_viewport(&self) -> bool {
        self.meta_tags
            .iter()
            .any(|tag| tag.name.as_deref().is_some_and(|n| n.eq_ignore_ascii_case("viewport")))
    }

    /// Number of `<meta property="og:*">` tags.
    pub fn og_tag_count(&self) -> usize {
        self.meta_tags
            .iter()
            .filter(|tag| tag.property.as_deref().is_some_and(|p| p.starts_with("og:")))
            .count()
    }

    // Heading texts for one level, in document order
    //
    // Levels outside 1..=6 have no headings.
    pub fn headings(&self, level: usize) -> &[String] {
        match level {
            1..=6 => &self.headings[level - 1],
            _ => &[],
        }
    }

    pub fn images(&self) -> &[Image] {
        &self.images
    }

    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    pub fn structured_data_blocks(&self) -> &[String] {
        &self.structured_data
    }

    pub fn has_canonical(&self) -> bool {
        self.has_canonical
    }

    pub fn has_stylesheet(&self) -> bool {
        self.has_stylesheet
    }

    /// Number of `<link>` tags whose href mentions fonts.
    pub fn font_link_count(&self) -> usize {
        self.font_link_count
    }

    pub fn has_custom_fonts(&self) -> bool {
        self.font_link_count > 0 || self.has_font_face
    }

    pub fn has_aria_label(&self) -> bool {
        self.has_aria_label
    }

    pub fn content(&self) -> &ContentView {
        &self.content
    }
}

fn attr(el: &ElementRef, name: &str) -> Option<String> {
    el.value().attr(name).map(str::to_string)
}

// Text nodes are joined as-is, so <a>Sign<b>up</b></a> reads "Signup".
// Whitespace runs are then collapsed to single spaces.
fn element_text(el: &ElementRef) -> String {
    el.text().collect::<String>().split_whitespace().collect::<Vec<_>>().join(" ")
}

fn anchor(el: &ElementRef, page_url: &Url) -> Anchor {
    let href = el.value().attr("href").unwrap_or_default().to_string();
    Anchor {
        target: resolve_link(page_url, &href),
        text: element_text(el),
        href,
    }
}

fn is_non_content_element(node: &Node) -> bool {
    matches!(node, Node::Element(el) if NON_CONTENT_TAGS.contains(&el.name()))
}

// True when the element sits inside (or is) a script/style/nav/footer
fn in_non_content(el: &ElementRef) -> bool {
    NON_CONTENT_TAGS.contains(&el.value().name())
        || el.ancestors().any(|node| is_non_content_element(node.value()))
}

fn content_view(document: &Html, page_url: &Url) -> ContentView {
    // Text nodes are concatenated as-is, then cleaned line by line. This
    // keeps "<b>foo</b>bar" as one word the way a browser renders it.
    let mut raw = String::new();
    for node in document.tree.root().descendants() {
        if let Node::Text(text) = node.value() {
            let hidden = node.ancestors().any(|parent| is_non_content_element(parent.value()));
            if !hidden {
                raw.push_str(text);
            }
        }
    }
    let text = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    ContentView {
        text,
        paragraph_count: document.select(selector!("p")).filter(|el| !in_non_content(el)).count(),
        list_count: document.select(selector!("ul, ol")).filter(|el| !in_non_content(el)).count(),
        h2_count: document.select(selector!("h2")).filter(|el| !in_non_content(el)).count(),
        anchors: document
            .select(selector!("a[href]"))
            .filter(|el| !in_non_content(el))
            .map(|el| anchor(&el, page_url))
            .collect(),
        action_texts: document
            .select(selector!("button, a"))
            .filter(|el| !in_non_content(el))
            .map(|el| element_text(&el))
            .collect(),
    }
}
