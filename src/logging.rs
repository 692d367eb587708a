// src/logging.rs
// =============================================================================
// Sets up tracing output for the binary.
//
// Logs go to stderr so that `--json` output on stdout stays parseable.
//
// Filter, first match wins:
// 1. RUST_LOG
// 2. SITE_AUDIT_LOG
// 3. site_audit=debug with --verbose, site_audit=info otherwise
// =============================================================================

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_ENV: &str = "SITE_AUDIT_LOG";

pub fn filter_directive(verbose: bool) -> String {
    std::env::var("RUST_LOG")
        .or_else(|_| std::env::var(LOG_ENV))
        .unwrap_or_else(|_| default_directive(verbose))
}

fn default_directive(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("{}={}", env!("CARGO_CRATE_NAME"), level)
}

// Installs the global subscriber. Calling it twice is an error from
// tracing_subscriber, which we pass up instead of panicking.
pub fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(EnvFilter::new(filter_directive(verbose)))
        .try_init()?;

    Ok(())
}
