// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (stderr, so JSON on stdout stays clean)
// 3. Dispatch to the appropriate subcommand handler
// 4. Print the report as a table or as JSON
// 5. Exit with proper code (0 = success, 2 = error)
//
// Rust concepts used:
// - async/await: The crawl and the model call are network I/O
// - Result<T, E>: For error handling (T = success type, E = error type)
// - match: Pattern matching to handle different subcommands
// =============================================================================

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use std::time::Duration;

use cli::{Cli, Commands};
use site_audit::config::{AuditConfig, GenerationConfig};
use site_audit::crawl::crawl_website;
use site_audit::fetch::HttpFetcher;
use site_audit::report::{AuditResult, PageSummary};
use site_audit::{audit, logging, Auditor};

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();

    logging::init_logging(cli.verbose)?;

    match cli.command {
        Commands::Audit {
            url,
            depth,
            json,
            no_suggestions,
            api_key,
            model,
            timeout,
        } => {
            let generation = GenerationConfig {
                api_key: if no_suggestions { None } else { api_key },
                model,
                ..GenerationConfig::default()
            };
            let config = AuditConfig::default()
                .with_request_timeout(Duration::from_secs(timeout))
                .with_generation(generation);
            handle_audit(&url, depth, json, config).await
        }
        Commands::Crawl { url, max_pages, json } => handle_crawl(&url, max_pages, json).await,
    }
}

// Handles the 'audit' subcommand
async fn handle_audit(url: &str, depth: usize, json: bool, config: AuditConfig) -> Result<i32> {
    if !json {
        println!("🔍 Auditing website: {}", url);
        println!("📊 Max pages: {}", depth);
    }

    let auditor = Auditor::new(config).context("could not set up the HTTP client")?;
    let report = auditor.audit_website(url, depth).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(0)
}

// Handles the 'crawl' subcommand
async fn handle_crawl(url: &str, max_pages: usize, json: bool) -> Result<i32> {
    let start = audit::validate_url(url)?;
    let config = AuditConfig::default();
    let fetcher = HttpFetcher::new(&config).context("could not set up the HTTP client")?;

    let pages = crawl_website(&fetcher, &start, max_pages, config.crawl_delay).await?;
    let summaries: Vec<PageSummary> = pages
        .iter()
        .map(|page| PageSummary {
            url: page.url.to_string(),
            title: page.title.clone(),
            status_code: page.status_code,
            load_time_ms: page.load_time_ms,
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
    } else {
        print_pages(&summaries);
    }
    Ok(0)
}

fn print_report(report: &AuditResult) {
    println!();
    println!("📋 {} ({} page(s) analyzed)", report.domain, report.pages_analyzed);
    println!();
    println!("{:<12} {:>5}", "SCORE", "/100");
    println!("{}", "=".repeat(18));
    println!("{:<12} {:>5}", "Overall", report.overall_score);
    println!("{:<12} {:>5}", "SEO", report.seo_score);
    println!("{:<12} {:>5}", "Design", report.design_score);
    println!("{:<12} {:>5}", "Content", report.content_score);
    println!();

    if report.issues.is_empty() {
        println!("✅ No issues found");
    } else {
        println!("{:<10} {:<9} {:<40}", "SEVERITY", "CATEGORY", "ISSUE");
        println!("{}", "=".repeat(60));
        for issue in &report.issues {
            println!("{:<10} {:<9} {:<40}", issue.severity.to_string().to_uppercase(), issue.category, issue.title);
            println!("{:<20} {}", "", issue.description);
        }
    }
    println!();

    println!("💡 Suggestions:");
    for (n, suggestion) in report.suggestions.iter().enumerate() {
        println!("   {}. [{}] {}", n + 1, suggestion.priority, suggestion.title);
        println!("      {}", suggestion.description);
        println!("      Impact: {}", suggestion.impact);
    }
    println!();

    print_pages(&report.pages);

    let counts = &report.issue_counts;
    println!("📊 Summary:");
    println!("   ❌ Critical: {}", counts.critical_issues);
    println!("   ⚠️  Warnings: {}", counts.warnings);
    println!("   ℹ️  Info: {}", counts.info_issues);
    println!("   ⏱️  Took {:.2}s", report.analysis_duration_seconds);
}

// Prints the crawled pages as a table
fn print_pages(pages: &[PageSummary]) {
    println!("{:<60} {:<7} {:>9}  {}", "URL", "STATUS", "LOAD MS", "TITLE");
    println!("{}", "=".repeat(100));

    for page in pages {
        // Truncate URL if too long for display
        let url_display = if page.url.chars().count() > 57 {
            format!("{}...", page.url.chars().take(57).collect::<String>())
        } else {
            page.url.clone()
        };

        println!(
            "{:<60} {:<7} {:>9.0}  {}",
            url_display,
            page.status_code,
            page.load_time_ms,
            page.title.as_deref().unwrap_or("-")
        );
    }
    println!();
}
