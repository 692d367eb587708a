// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Enums: Types that can be one of several variants
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::{Parser, Subcommand};

use site_audit::config::{DEFAULT_DEPTH, DEFAULT_MODEL};

// This struct represents our entire CLI application
#[derive(Parser, Debug)]
#[command(
    name = "site-audit",
    version,
    about = "Audit a website's SEO, design and content",
    long_about = "site-audit crawls a few pages of a website, scores the home page on SEO, design \
                  and content, lists the issues it found and suggests what to fix first."
)]
pub struct Cli {
    /// Log debug output to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a full audit and print the report
    ///
    /// Example: site-audit audit https://example.com --depth 3
    Audit {
        /// Website URL to audit (e.g., https://example.com)
        url: String,

        /// Maximum number of pages to crawl
        #[arg(long, default_value_t = DEFAULT_DEPTH, value_parser = parse_page_count)]
        depth: usize,

        /// Output the report as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Skip the language model and use the default suggestions
        #[arg(long)]
        no_suggestions: bool,

        /// Anthropic API key used to generate suggestions
        #[arg(long, env = "ANTHROPIC_API_KEY", hide_env_values = true)]
        api_key: Option<String>,

        /// Model used to generate suggestions
        #[arg(long, default_value = DEFAULT_MODEL)]
        model: String,

        /// Per-request timeout in seconds
        #[arg(long, default_value_t = 15)]
        timeout: u64,
    },

    /// Crawl a website and list the pages that would be audited
    ///
    /// Example: site-audit crawl https://example.com --max-pages 10
    Crawl {
        /// Website URL to start from
        url: String,

        /// Maximum number of pages to crawl
        #[arg(long, default_value_t = DEFAULT_DEPTH, value_parser = parse_page_count)]
        max_pages: usize,

        /// Output the page list as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

// A page budget must be at least 1
fn parse_page_count(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(count) => Ok(count),
        Err(e) => Err(e.to_string()),
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does `env = "ANTHROPIC_API_KEY"` do?
//    - If --api-key isn't given, clap reads the environment variable
//    - hide_env_values keeps the key out of --help output
//
// 2. Why `global = true` on --verbose?
//    - The flag can be written before or after the subcommand
//    - site-audit -v audit ... and site-audit audit ... -v both work
//
// 3. What is Option<String>?
//    - Either Some(key) or None
//    - None here means "no API key, use the default suggestions"
// -----------------------------------------------------------------------------
