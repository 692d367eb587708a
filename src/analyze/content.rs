// src/analyze/content.rs
// =============================================================================
// Content quality scoring.
//
// Works on the page's content view: the text left after <script>, <style>,
// <nav> and <footer> are removed. Navigation menus would otherwise inflate
// every link and word count.
//
// Criterion                         Points
// --------------------------------  ------------------------------------
// Word count                        20 (300+), 15 (200+), 10 (100+), 0
// Average words per sentence        20 (<=20), 15 (<=25), 10 (<=30), 0
// At least 3 paragraphs             10
// Internal links                    15 (5+), 10 (3+), 5 (1+), 0
// At least 2 external links         5
// H2 headings                       10 (2+), 5 (1), 0
// Call-to-action wording            10
// Any <ul> or <ol>                  10
// =============================================================================

use super::{unscored, Scorecard};
use crate::crawl::CrawledPage;
use crate::parse::same_site;
use crate::report::{Category, ContentAnalysis, ContentDetails};

const TARGET_WORD_COUNT: usize = 300;

// Button or link wording that counts as a call to action
const CTA_PHRASES: [&str; 7] = [
    "contact",
    "buy",
    "shop",
    "subscribe",
    "sign up",
    "get started",
    "learn more",
];

pub fn analyze_content(pages: &[CrawledPage]) -> ContentAnalysis {
    let Some(page) = pages.first() else {
        return unscored();
    };
    let content = page.document.content();
    let mut card = Scorecard::new(Category::Content);

    let word_count = content.text.split_whitespace().count();
    card.add(match word_count {
        n if n >= 300 => 20,
        n if n >= 200 => 15,
        n if n >= 100 => 10,
        _ => 0,
    });
    if word_count < TARGET_WORD_COUNT {
        card.warning(
            "Insufficient Content",
            format!(
                "Page has only {} words. Aim for at least {} words of quality content.",
                word_count, TARGET_WORD_COUNT
            ),
        );
    }

    // A sentence is whatever sits between two periods
    let sentence_count = content.text.split('.').filter(|s| !s.trim().is_empty()).count();
    if sentence_count > 0 {
        let average = word_count as f64 / sentence_count as f64;
        if average <= 20.0 {
            card.add(20);
        } else if average <= 25.0 {
            card.add(15);
        } else if average <= 30.0 {
            card.add(10);
        } else {
            card.warning(
                "Poor Readability",
                format!("Average sentence length is {:.1} words. Aim for 15-20 words per sentence.", average),
            );
        }
    }

    if content.paragraph_count >= 3 {
        card.add(10);
    } else {
        card.info(
            "Limited Content Structure",
            "Break content into more paragraphs for better readability.",
        );
    }

    let targets = || content.anchors.iter().filter_map(|anchor| anchor.target.as_ref());
    let internal_links = targets().filter(|target| same_site(&page.url, target)).count();
    let external_links = targets().filter(|target| !same_site(&page.url, target)).count();

    match internal_links {
        0 => card.warning(
            "Insufficient Internal Linking",
            "Add more internal links to help users and search engines navigate your site.",
        ),
        1..=2 => card.add(5),
        3..=4 => card.add(10),
        _ => card.add(15),
    }

    if external_links >= 2 {
        card.add(5);
    }

    match content.h2_count {
        0 => card.warning(
            "Missing Content Headings",
            "Use H2 tags to structure your content and improve scannability.",
        ),
        1 => card.add(5),
        _ => card.add(10),
    }

    let has_cta = content.action_texts.iter().any(|text| is_call_to_action(text));
    if has_cta {
        card.add(10);
    } else {
        card.info(
            "No Clear Call-to-Action",
            "Add clear calls-to-action to guide users toward conversion.",
        );
    }

    if content.list_count > 0 {
        card.add(10);
    } else {
        card.info("No Lists or Bullet Points", "Use lists to make content more scannable and digestible.");
    }

    card.finish(ContentDetails {
        word_count,
        sentence_count,
        paragraph_count: content.paragraph_count,
        internal_links,
        external_links,
        has_cta,
    })
}

fn is_call_to_action(text: &str) -> bool {
    let lowered = text.to_lowercase();
    CTA_PHRASES.iter().any(|phrase| lowered.contains(phrase))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::test_support::{page, page_at};
    use crate::report::Severity;

    // `sentences` sentences of `words_per_sentence` words each
    fn prose(sentences: usize, words_per_sentence: usize) -> String {
        let sentence = vec!["word"; words_per_sentence].join(" ");
        vec![sentence; sentences].join(". ") + "."
    }

    fn rich_page() -> String {
        format!(
            r#"<html><body>
                <nav><a href="/nav-only">Menu</a></nav>
                <h2>Why us</h2><h2>Pricing</h2>
                <p>{}</p><p>{}</p><p>{}</p>
                <ul><li>fast</li></ul>
                <a href="/a">a</a><a href="/b">b</a><a href="/c">c</a><a href="/d">d</a>
                <a href="https://example.com/e">e</a>
                <a href="https://partner.org/">Partner</a><a href="https://docs.rs/">Docs</a>
                <button>Get Started</button>
                <footer><a href="/privacy">Privacy</a></footer>
            </body></html>"#,
            prose(7, 15),
            prose(7, 15),
            prose(7, 15)
        )
    }

    #[test]
    fn test_rich_page_scores_100() {
        let result = analyze_content(&[page(&rich_page())]);
        assert!(result.issues.is_empty(), "unexpected issues: {:?}", result.issues);
        assert_eq!(result.score, 100);

        let details = &result.details;
        assert!(details.word_count >= 300);
        assert_eq!(details.paragraph_count, 3);
        // nav and footer links are not content
        assert_eq!(details.internal_links, 5);
        assert_eq!(details.external_links, 2);
        assert!(details.has_cta);
    }

    #[test]
    fn test_thin_page() {
        let result = analyze_content(&[page("<p>Hello there.</p>")]);
        let severities: Vec<(&str, Severity)> =
            result.issues.iter().map(|i| (i.title.as_str(), i.severity)).collect();
        assert_eq!(
            severities,
            [
                ("Insufficient Content", Severity::Warning),
                ("Limited Content Structure", Severity::Info),
                ("Insufficient Internal Linking", Severity::Warning),
                ("Missing Content Headings", Severity::Warning),
                ("No Clear Call-to-Action", Severity::Info),
                ("No Lists or Bullet Points", Severity::Info),
            ]
        );
        // Only readability scores: 2 words in 1 sentence
        assert_eq!(result.score, 20);
        assert_eq!(result.details.word_count, 2);
        assert_eq!(result.details.sentence_count, 1);
    }

    #[test]
    fn test_word_count_bands_warn_below_300() {
        let result = analyze_content(&[page(&format!("<p>{}</p>", prose(25, 10)))]);
        assert_eq!(result.details.word_count, 250);
        let issue = result.issues.iter().find(|i| i.title == "Insufficient Content").unwrap();
        assert_eq!(issue.description, "Page has only 250 words. Aim for at least 300 words of quality content.");
    }

    #[test]
    fn test_long_sentences_hurt_readability() {
        let result = analyze_content(&[page(&format!("<p>{}</p>", prose(2, 40)))]);
        let issue = result.issues.iter().find(|i| i.title == "Poor Readability").unwrap();
        assert_eq!(issue.description, "Average sentence length is 40.0 words. Aim for 15-20 words per sentence.");
    }

    #[test]
    fn test_text_without_periods_has_one_sentence() {
        let result = analyze_content(&[page("<p>no full stop here</p>")]);
        assert_eq!(result.details.sentence_count, 1);
    }

    #[test]
    fn test_empty_text_skips_readability() {
        let result = analyze_content(&[page("<html><body></body></html>")]);
        assert_eq!(result.details.sentence_count, 0);
        assert!(!result.issues.iter().any(|i| i.title == "Poor Readability"));
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_https_links_from_http_page_are_internal() {
        let html = r#"<a href="https://example.com/about">About</a><a href="https://example.com/pricing">Pricing</a>
            <a href="http://example.com:8080/admin">Admin</a><a href="https://other.org/">Other</a>"#;
        let result = analyze_content(&[page_at("http://example.com/", html, 120.0)]);
        assert_eq!(result.details.internal_links, 2);
        assert_eq!(result.details.external_links, 2);
    }

    #[test]
    fn test_split_link_text_is_not_a_call_to_action() {
        let result = analyze_content(&[page(r#"<a href="/join">Sign<b>up</b></a>"#)]);
        assert!(!result.details.has_cta);
        assert!(result.issues.iter().any(|i| i.title == "No Clear Call-to-Action"));
    }

    #[test]
    fn test_call_to_action_matching() {
        assert!(is_call_to_action("Sign Up today"));
        assert!(is_call_to_action("CONTACT"));
        assert!(is_call_to_action("Learn more about us"));
        assert!(!is_call_to_action("Read the blog"));
    }
}
