// src/analyze/seo.rs
// =============================================================================
// SEO scoring.
//
// Criterion                         Points
// --------------------------------  ------------------------------------
// Title, 30-60 characters           15 (10 if the length is off)
// Meta description, 120-160 chars   10 (5 if the length is off)
// Exactly one H1                    10 (5 if several)
// At least one H2                   10
// Image alt-text coverage           15 / 10 / 5 / 0 (no images = 15)
// OpenGraph tags                    10 for 4+, 5 for 1-3
// JSON-LD structured data           10
// Canonical link                    5
// Viewport meta tag                 5
//
// Lengths are counted in characters, not bytes. The table adds up to 90,
// so a page with no SEO issues scores 90.
// =============================================================================

use super::{unscored, Scorecard};
use crate::crawl::CrawledPage;
use crate::report::{Category, SeoAnalysis, SeoDetails};

pub fn analyze_seo(pages: &[CrawledPage]) -> SeoAnalysis {
    let Some(page) = pages.first() else {
        return unscored();
    };
    let doc = &page.document;
    let mut card = Scorecard::new(Category::Seo);

    match doc.title() {
        Some(title) => {
            let length = title.chars().count();
            if (30..=60).contains(&length) {
                card.add(15);
            } else {
                card.add(10);
                card.warning(
                    "Title Length Not Optimal",
                    format!("Title is {} characters. Optimal length is 30-60 characters.", length),
                );
            }
        }
        None => card.critical(
            "Missing Title Tag",
            "Every page should have a unique, descriptive title tag.",
        ),
    }

    match doc.meta_description() {
        Some(description) => {
            let length = description.chars().count();
            if (120..=160).contains(&length) {
                card.add(10);
            } else {
                card.add(5);
                card.warning(
                    "Meta Description Length Not Optimal",
                    format!(
                        "Meta description is {} characters. Optimal length is 120-160 characters.",
                        length
                    ),
                );
            }
        }
        None => card.critical(
            "Missing Meta Description",
            "Meta descriptions help search engines understand page content.",
        ),
    }

    // One warning for any number of extra H1s, not one per tag
    let h1_count = doc.headings(1).len();
    match h1_count {
        0 => card.critical(
            "Missing H1 Tag",
            "Every page should have exactly one H1 tag describing the main content.",
        ),
        1 => card.add(10),
        n => {
            card.add(5);
            card.warning(
                "Multiple H1 Tags",
                format!("Found {} H1 tags. Best practice is to have exactly one H1 per page.", n),
            );
        }
    }

    if doc.headings(2).is_empty() {
        card.warning("Poor Heading Structure", "Use H2-H6 tags to create a clear content hierarchy.");
    } else {
        card.add(10);
    }

    let images_total = doc.images().len();
    let images_with_alt = doc.images().iter().filter(|img| img.has_alt).count();
    if images_total == 0 {
        card.add(15);
    } else {
        let coverage = images_with_alt as f64 / images_total as f64 * 100.0;
        card.add(match coverage {
            c if c >= 100.0 => 15,
            c if c >= 80.0 => 10,
            c if c >= 50.0 => 5,
            _ => 0,
        });

        if images_with_alt < images_total {
            let description = format!(
                "Only {:.0}% of images have alt text. All images should have descriptive alt attributes.",
                coverage
            );
            if coverage >= 50.0 {
                card.warning("Missing Image Alt Text", description);
            } else {
                card.critical("Missing Image Alt Text", description);
            }
        }
    }

    let og_tags_count = doc.og_tag_count();
    match og_tags_count {
        0 => card.warning(
            "Missing OpenGraph Tags",
            "OpenGraph tags improve how your site appears when shared on social media.",
        ),
        1..=3 => {
            card.add(5);
            card.info("Incomplete OpenGraph Tags", "Add more OpenGraph tags for better social media sharing.");
        }
        _ => card.add(10),
    }

    let has_structured_data = !doc.structured_data_blocks().is_empty();
    if has_structured_data {
        card.add(10);
    } else {
        card.info(
            "No Structured Data",
            "Implement schema.org structured data to help search engines understand your content.",
        );
    }

    if doc.has_canonical() {
        card.add(5);
    } else {
        card.info("Missing Canonical URL", "Canonical tags prevent duplicate content issues.");
    }

    if doc.has_viewport() {
        card.add(5);
    } else {
        card.warning("Missing Viewport Meta Tag", "Add viewport meta tag for mobile responsiveness.");
    }

    card.finish(SeoDetails {
        title_tag: doc.title().map(str::to_string),
        meta_description: doc.meta_description().map(str::to_string),
        h1_count,
        images_total,
        images_with_alt,
        og_tags_count,
        has_structured_data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::test_support::page;
    use crate::report::Severity;

    fn titles(result: &SeoAnalysis) -> Vec<&str> {
        result.issues.iter().map(|i| i.title.as_str()).collect()
    }

    fn perfect_page() -> String {
        let title = "A".repeat(45);
        let description = "d".repeat(140);
        format!(
            r#"<html><head>
                <title>{title}</title>
                <meta name="description" content="{description}">
                <meta name="viewport" content="width=device-width, initial-scale=1">
                <meta property="og:title" content="t">
                <meta property="og:description" content="d">
                <meta property="og:image" content="i">
                <meta property="og:url" content="u">
                <link rel="canonical" href="https://example.com/">
                <script type="application/ld+json">{{"@type": "WebSite"}}</script>
            </head><body>
                <h1>Main</h1>
                <h2>One</h2><h2>Two</h2>
                <img src="1.png" alt="one"><img src="2.png" alt="two"><img src="3.png" alt="three">
                <img src="4.png" alt="four"><img src="5.png" alt="five">
            </body></html>"#
        )
    }

    #[test]
    fn test_perfect_page_scores_90_with_no_issues() {
        let result = analyze_seo(&[page(&perfect_page())]);
        assert_eq!(result.score, 90);
        assert!(result.issues.is_empty(), "unexpected issues: {:?}", titles(&result));

        let details = &result.details;
        assert_eq!(details.title_tag.as_deref().map(str::len), Some(45));
        assert_eq!(details.h1_count, 1);
        assert_eq!(details.images_total, 5);
        assert_eq!(details.images_with_alt, 5);
        assert_eq!(details.og_tags_count, 4);
        assert!(details.has_structured_data);
    }

    #[test]
    fn test_bare_page_reports_missing_basics() {
        let result = analyze_seo(&[page("<html><body><p>hello</p></body></html>")]);

        let criticals: Vec<&str> = result
            .issues
            .iter()
            .filter(|i| i.severity == Severity::Critical)
            .map(|i| i.title.as_str())
            .collect();
        assert_eq!(criticals, ["Missing Title Tag", "Missing Meta Description", "Missing H1 Tag"]);

        // No images means full credit and no alt-text issue
        assert!(!titles(&result).contains(&"Missing Image Alt Text"));
        assert_eq!(result.score, 15);
    }

    #[test]
    fn test_multiple_h1_is_one_warning() {
        let result = analyze_seo(&[page("<h1>a</h1><h1>b</h1><h1>c</h1>")]);
        let h1_issues: Vec<_> = result.issues.iter().filter(|i| i.title == "Multiple H1 Tags").collect();
        assert_eq!(h1_issues.len(), 1);
        assert_eq!(h1_issues[0].severity, Severity::Warning);
        assert!(h1_issues[0].description.starts_with("Found 3 H1 tags"));
        assert_eq!(result.details.h1_count, 3);
    }

    #[test]
    fn test_title_length_off() {
        let result = analyze_seo(&[page("<title>Short</title>")]);
        let issue = result.issues.iter().find(|i| i.title == "Title Length Not Optimal").unwrap();
        assert_eq!(issue.severity, Severity::Warning);
        assert_eq!(issue.description, "Title is 5 characters. Optimal length is 30-60 characters.");
    }

    #[test]
    fn test_alt_coverage_bands() {
        // 4 of 5 = 80%: 10 points, warning
        let html = r#"<img alt="a"><img alt="b"><img alt="c"><img alt="d"><img>"#;
        let result = analyze_seo(&[page(html)]);
        let issue = result.issues.iter().find(|i| i.title == "Missing Image Alt Text").unwrap();
        assert_eq!(issue.severity, Severity::Warning);
        assert!(issue.description.starts_with("Only 80% of images"));

        // 1 of 3 is below half: critical
        let result = analyze_seo(&[page(r#"<img alt="a"><img><img>"#)]);
        let issue = result.issues.iter().find(|i| i.title == "Missing Image Alt Text").unwrap();
        assert_eq!(issue.severity, Severity::Critical);
        assert_eq!(result.details.images_with_alt, 1);
    }

    #[test]
    fn test_partial_opengraph_is_info() {
        let result = analyze_seo(&[page(r#"<meta property="og:title" content="x">"#)]);
        let issue = result.issues.iter().find(|i| i.title == "Incomplete OpenGraph Tags").unwrap();
        assert_eq!(issue.severity, Severity::Info);
        assert_eq!(result.details.og_tags_count, 1);
    }

    #[test]
    fn test_only_first_page_is_scored() {
        let pages = [page("<p>bare</p>"), page(&perfect_page())];
        assert_eq!(analyze_seo(&pages).score, analyze_seo(&pages[..1]).score);
    }
}
