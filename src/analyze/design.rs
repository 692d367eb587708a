// src/analyze/design.rs
// =============================================================================
// Design and performance scoring.
//
// Criterion                         Points
// --------------------------------  ------------------------------------
// Viewport meta tag                 20
// Load time                         20 (<1s), 15 (<3s), 10 (<5s), 0
// Stylesheet or <style> block       5
// Custom fonts                      5
// Any lazy-loaded image             5
// Any image with srcset             5
// Color contrast                    10 (not measured, always awarded)
// Any aria-label                    10
//
// Lighthouse and PageSpeed are reserved fields; no external API is called,
// so they are always None.
// =============================================================================

use super::{unscored, Scorecard};
use crate::crawl::CrawledPage;
use crate::report::{Category, DesignAnalysis, DesignDetails};

// Points given for contrast until a real check exists
const CONTRAST_PLACEHOLDER_POINTS: u32 = 10;

pub fn analyze_design(pages: &[CrawledPage]) -> DesignAnalysis {
    let Some(page) = pages.first() else {
        return unscored();
    };
    let doc = &page.document;
    let mut card = Scorecard::new(Category::Design);

    let is_mobile_responsive = doc.has_viewport();
    if is_mobile_responsive {
        card.add(20);
    } else {
        card.critical(
            "Not Mobile Responsive",
            "Add viewport meta tag and ensure responsive design for mobile devices.",
        );
    }

    let load_time_ms = page.load_time_ms;
    if load_time_ms < 1000.0 {
        card.add(20);
    } else if load_time_ms < 3000.0 {
        card.add(15);
    } else if load_time_ms < 5000.0 {
        card.add(10);
    } else {
        card.warning(
            "Slow Page Load Time",
            format!("Page loads in {:.2} seconds. Aim for under 3 seconds.", load_time_ms / 1000.0),
        );
    }

    if doc.has_stylesheet() {
        card.add(5);
    }

    let has_custom_fonts = doc.has_custom_fonts();
    if has_custom_fonts {
        card.add(5);
    }

    let images = doc.images();
    let images_lazy_loaded = images.iter().filter(|img| img.lazy).count();
    if images_lazy_loaded > 0 {
        card.add(5);
    }
    if images.iter().any(|img| img.has_srcset) {
        card.add(5);
    }
    if images_lazy_loaded == 0 && images.len() > 3 {
        card.info(
            "Images Not Lazy Loaded",
            "Implement lazy loading for images to improve initial page load.",
        );
    }

    card.add(CONTRAST_PLACEHOLDER_POINTS);

    if doc.has_aria_label() {
        card.add(10);
    } else {
        card.info(
            "Limited Accessibility Features",
            "Add ARIA labels and improve accessibility for screen readers.",
        );
    }

    card.finish(DesignDetails {
        load_time_ms,
        is_mobile_responsive,
        has_custom_fonts,
        images_lazy_loaded,
        total_images: images.len(),
        lighthouse: None,
        pagespeed: None,
    })
}
