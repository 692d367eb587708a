// src/lib.rs
// =============================================================================
// site-audit: crawl a website, score it on SEO, design and content, and
// suggest what to fix first.
//
// Module map (leaves first):
// - config:    AuditConfig and GenerationConfig
// - error:     FetchError, CrawlError, GenerationError, AuditError
// - fetch:     HTTP GETs with browser headers (PageFetcher trait)
// - parse:     HTML -> ParsedDocument
// - crawl:     breadth-first same-site crawl
// - analyze:   the three scoring engines
// - aggregate: overall score and issue counts
// - generate:  text generation (TextGenerator trait)
// - suggest:   prompt, reply parsing and fallback suggestions
// - audit:     Auditor::audit_website, the whole pipeline
// - report:    the serializable result types
// - logging:   tracing setup for the binary
// =============================================================================

pub mod aggregate;
pub mod analyze;
pub mod audit;
pub mod config;
pub mod crawl;
pub mod error;
pub mod fetch;
pub mod generate;
pub mod logging;
pub mod parse;
pub mod report;
pub mod suggest;

pub use audit::Auditor;
pub use config::{AuditConfig, GenerationConfig};
pub use error::{AuditError, CrawlError, FetchError, GenerationError};
pub use report::AuditResult;
